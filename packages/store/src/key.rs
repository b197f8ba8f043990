//! Primary key generation.
//!
//! Keys are 8 lowercase hexadecimal characters drawn from the operating system's
//! random source. 32 bits collide quickly at scale, so [`generate`] keeps drawing
//! until the candidate is unused in the target collection.

use rand::rngs::OsRng;
use rand::RngCore;

/// Length of a generated key in characters.
pub const KEY_LENGTH: usize = 8;

/// Draw a key that `taken` reports as unused.
pub fn generate(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = random_key();
        if !taken(&candidate) {
            return candidate;
        }
        tracing::warn!(key = %candidate, "generated key already in use, drawing again");
    }
}

/// A single random key, not checked for uniqueness.
pub fn random_key() -> String {
    let mut bytes = [0u8; KEY_LENGTH / 2];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Whether `key` has the shape of a generated key.
pub fn is_generated_key(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_random_key_shape() {
        for _ in 0..64 {
            let key = random_key();
            assert!(is_generated_key(&key), "{key} is not 8 lowercase hex chars");
        }
    }

    #[test]
    fn test_generate_redraws_on_collision() {
        let calls = Cell::new(0);
        let key = generate(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert_eq!(calls.get(), 3);
        assert!(is_generated_key(&key));
    }

    #[test]
    fn test_is_generated_key() {
        assert!(is_generated_key("a946d132"));
        assert!(!is_generated_key("A946D132"));
        assert!(!is_generated_key("a946d13"));
        assert!(!is_generated_key("f7c0e59f5ffccf157d0ab6b1a946d132"));
        assert!(!is_generated_key("a946d13g"));
    }
}
