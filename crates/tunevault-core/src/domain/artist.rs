//! Artist record type.
//!
//! Persisted for fidelity with upstream catalog exports; nothing in the
//! acquisition core populates or reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A music artist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Database ID.
    pub id: i64,
    /// Primary artist name.
    pub name: String,
    /// Alternate names, if known.
    pub aliases: Option<String>,
    /// UTC timestamp of when the artist was recorded.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last write to this row.
    pub updated_at: DateTime<Utc>,
}
