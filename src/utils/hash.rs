//! Content hashing for change detection.
//!
//! Used by the config handle to skip reloads when the file on disk has
//! not actually changed, regardless of mtime churn from editors.

/// Hash arbitrary bytes down to a `u64` comparison key.
///
/// Truncates a blake3 digest; collisions are not a correctness concern
/// here since a false "unchanged" requires an engineered preimage.
pub fn compute(bytes: &[u8]) -> u64 {
    let digest = blake3::hash(bytes);
    let mut key = [0u8; 8];
    key.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_is_deterministic() {
        let a = compute(b"[base]\nname = \"Aperture\"");
        let b = compute(b"[base]\nname = \"Aperture\"");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compute_differs_on_change() {
        let a = compute(b"port = 4848");
        let b = compute(b"port = 4849");
        assert_ne!(a, b);
    }

    #[test]
    fn test_compute_empty_input() {
        // Stable value for empty input, distinct from typical content
        assert_eq!(compute(b""), compute(b""));
        assert_ne!(compute(b""), compute(b" "));
    }
}
