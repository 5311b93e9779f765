//! Content fingerprints for change records
//!
//! Stores only a 16-hex-char prefix of SHA-256, never the content itself.
//! The prefix length is part of the on-disk format.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest
pub const DIGEST_LEN: usize = 16;

/// Fingerprint `content`, or `None` when there is nothing to fingerprint.
///
/// Empty content counts as absent.
pub fn digest(content: Option<&str>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(DIGEST_LEN);
    Some(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_content() {
        assert_eq!(digest(None), None);
        assert_eq!(digest(Some("")), None);
    }

    #[test]
    fn test_known_prefix() {
        // sha256("hello") = 2cf24dba5fb0a30e26e83b2ac5b9e29e...
        assert_eq!(digest(Some("hello")).as_deref(), Some("2cf24dba5fb0a30e"));
    }

    #[test]
    fn test_deterministic() {
        let a = digest(Some("fn main() {}\n"));
        let b = digest(Some("fn main() {}\n"));
        assert_eq!(a, b);
        assert_eq!(a.unwrap().len(), DIGEST_LEN);
        assert_ne!(digest(Some("a")), digest(Some("b")));
    }
}
