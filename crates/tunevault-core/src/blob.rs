//! Content-addressed blob path derivation.
//!
//! A blob's storage path is a pure function of its bytes: a SHA-256 hex
//! digest sharded two directory levels deep, with the extension taken from
//! magic-byte sniffing of the content (never from a filename). Identical
//! bytes always resolve to the identical path, which deduplicates storage
//! automatically.
//!
//! This module only derives paths; the blob store performs the actual
//! write.

use sha2::{Digest, Sha256};
use std::path::PathBuf;
use thiserror::Error;

/// Content sniffing found no known file signature.
///
/// Callers must treat this as fatal for the item and write nothing: an
/// unidentified blob never enters the store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown file type: content matches no known signature")]
pub struct UnknownFileType;

/// A derived content address: hex digest plus detected extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAddress {
    hash: String,
    extension: &'static str,
}

impl ContentAddress {
    /// Lowercase hex SHA-256 digest of the content.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// File extension detected from the content's magic bytes.
    pub const fn extension(&self) -> &str {
        self.extension
    }

    /// Relative storage path: `<hash[0:2]>/<hash[2:4]>/<hash>.<ext>`.
    ///
    /// The two shard levels bound directory fan-out.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.hash[0..2])
            .join(&self.hash[2..4])
            .join(format!("{}.{}", self.hash, self.extension))
    }
}

/// Derive the content address for a byte buffer.
pub fn content_address(data: &[u8]) -> Result<ContentAddress, UnknownFileType> {
    let kind = infer::get(data).ok_or(UnknownFileType)?;
    let hash = format!("{:x}", Sha256::digest(data));
    Ok(ContentAddress {
        hash,
        extension: kind.extension(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal buffers carrying real audio signatures.
    fn mp3_bytes() -> Vec<u8> {
        let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
        data.extend_from_slice(b"payload");
        data
    }

    fn flac_bytes() -> Vec<u8> {
        let mut data = b"fLaC\x00\x00\x00\x22".to_vec();
        data.extend_from_slice(b"payload");
        data
    }

    #[test]
    fn address_is_deterministic() {
        let first = content_address(&mp3_bytes()).unwrap();
        let second = content_address(&mp3_bytes()).unwrap();
        assert_eq!(first.relative_path(), second.relative_path());
    }

    #[test]
    fn distinct_bytes_get_distinct_paths() {
        let a = content_address(&mp3_bytes()).unwrap();
        let b = content_address(&flac_bytes()).unwrap();
        assert_ne!(a.relative_path(), b.relative_path());
    }

    #[test]
    fn extension_comes_from_signature() {
        assert_eq!(content_address(&mp3_bytes()).unwrap().extension(), "mp3");
        assert_eq!(content_address(&flac_bytes()).unwrap().extension(), "flac");
    }

    #[test]
    fn path_is_sharded_by_hash_prefix() {
        let address = content_address(&mp3_bytes()).unwrap();
        let hash = address.hash().to_string();
        assert_eq!(hash.len(), 64);

        let path = address.relative_path();
        let parts: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], hash[0..2]);
        assert_eq!(parts[1], hash[2..4]);
        assert_eq!(parts[2], format!("{hash}.mp3"));
    }

    #[test]
    fn unrecognized_content_is_rejected() {
        assert_eq!(
            content_address(b"no signature here"),
            Err(UnknownFileType)
        );
    }
}
