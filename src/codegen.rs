//! Short-code generation.
//!
//! Codes are drawn uniformly and independently per character from the 62
//! character alphanumeric alphabet. Nothing is remembered between calls: two
//! calls may return the same code and no collision handling is attempted.
//!
//! The generator takes its randomness source explicitly so callers (and
//! tests) can substitute a seeded or mock RNG.

use rand::distributions::Uniform;
use rand::{Rng, thread_rng};

/// Alphabet every short code is drawn from.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of the codes shown on the page.
pub const CODE_LENGTH: usize = 6;

/// Generate a code of `length` characters using `rng`.
///
/// Each character is sampled independently from [`ALPHABET`]. The result is
/// fully determined by the state of `rng`.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let pool = ALPHABET.as_bytes();
    let dist = Uniform::from(0..pool.len());
    (0..length)
        .map(|_| char::from(pool[rng.sample(dist)]))
        .collect()
}

/// Generate a code of `length` characters from the thread-local RNG.
pub fn random_code(length: usize) -> String {
    generate_code(&mut thread_rng(), length)
}

/// Returns `true` when `candidate` has exactly `length` characters, all taken
/// from [`ALPHABET`].
pub fn is_short_code(candidate: &str, length: usize) -> bool {
    candidate.len() == length && candidate.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_chars() {
        let set: HashSet<char> = ALPHABET.chars().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(set.len(), 62);
    }

    #[test]
    fn test_code_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let code = generate_code(&mut rng, CODE_LENGTH);
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| ALPHABET.contains(c)), "bad code {code}");
        }
    }

    #[test]
    fn test_same_seed_same_code() {
        let a = generate_code(&mut StdRng::seed_from_u64(42), CODE_LENGTH);
        let b = generate_code(&mut StdRng::seed_from_u64(42), CODE_LENGTH);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_rng_picks_first_char() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(generate_code(&mut rng, 6), "AAAAAA");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(random_code(0), "");
    }

    #[test]
    fn test_every_char_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_code(&mut rng, CODE_LENGTH).chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_is_short_code() {
        assert!(is_short_code("Ab3dE9", 6));
        assert!(!is_short_code("Ab3dE", 6));
        assert!(!is_short_code("Ab3-E9", 6));
        assert!(!is_short_code("Ab3dÉ9", 6));
        assert!(is_short_code(&random_code(12), 12));
    }
}
