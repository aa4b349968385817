//! Acquisition pipeline for tunevault.
//!
//! Walks the catalog's audio-less songs and runs the full sequence for
//! each one: search the providers, select the best eligible candidate,
//! resolve its download URL, fetch the bytes, and store them as a
//! content-addressed blob backed by a resource row. One song failing
//! marks that song errored and never sinks the pass.

mod error;
mod pipeline;
mod selector;
mod store;

pub use error::AcquireError;
pub use pipeline::{AcquireConfig, AcquireOutcome, Acquirer, PassSummary};
pub use selector::pick_best;
pub use store::{BlobStore, StoreError};
