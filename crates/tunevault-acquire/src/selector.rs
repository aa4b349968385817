//! Candidate selection logic.
//!
//! Centralizes the rules for choosing which search candidate to
//! download, so every caller agrees on what "best" means.
//!
//! # Selection Rules
//!
//! 1. Only eligible candidates count: the provider must report the
//!    track as both licensed and downloadable, and the candidate's
//!    artist and song names must equal the catalog entry's exactly,
//!    case and all. A provider writing "The Beatles" where the catalog
//!    says "Beatles" is not a match.
//! 2. The first eligible candidate becomes the pick.
//! 3. A later lossless candidate displaces a non-lossless pick.
//! 4. A later 320kbps candidate displaces the pick only when the pick
//!    has neither lossless nor 320kbps available.
//! 5. A 192kbps-only candidate never displaces anything.
//!
//! Within a tier the first-found candidate wins, which makes provider
//! order part of the behavior.

use tunevault_core::TrackCandidate;

use crate::error::AcquireError;

/// Choose the candidate to download for a catalog entry.
///
/// # Errors
///
/// Returns [`AcquireError::NoMatchFound`] when no candidate is
/// eligible, including when `candidates` is empty.
pub fn pick_best(
    candidates: &[TrackCandidate],
    artist_name: &str,
    song_name: &str,
) -> Result<TrackCandidate, AcquireError> {
    let mut pick: Option<&TrackCandidate> = None;

    for candidate in candidates {
        if !candidate.copyrighted
            || !candidate.downloadable
            || candidate.artist_name != artist_name
            || candidate.song_name != song_name
        {
            continue;
        }

        match pick {
            None => pick = Some(candidate),
            Some(current) => {
                if candidate.lossless && !current.lossless {
                    pick = Some(candidate);
                } else if candidate.kbps320 && !current.lossless && !current.kbps320 {
                    pick = Some(candidate);
                }
            }
        }
    }

    pick.cloned().ok_or_else(|| AcquireError::NoMatchFound {
        artist: artist_name.to_string(),
        song: song_name.to_string(),
    })
}
