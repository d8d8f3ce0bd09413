//! Strong password generation.
//!
//! Guarantees one character from each of the four composition classes, fills
//! the rest uniformly from the combined alphabet, and shuffles. The RNG is
//! injectable so tests can run the composition contract deterministically.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AdvisorError, Result};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Shortest password that can still contain all four classes
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Default generated length
pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// Generate a password with the ambient thread RNG.
pub fn generate_password(length: usize) -> Result<String> {
    generate_password_with(&mut rand::thread_rng(), length)
}

/// Generate a password from an injected RNG.
///
/// For any `length >= 4` the result contains at least one uppercase letter,
/// one lowercase letter, one digit, and one symbol. Shorter requests are
/// rejected.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    if length < MIN_GENERATED_LENGTH {
        return Err(AdvisorError::validation(format!(
            "password length must be at least {MIN_GENERATED_LENGTH}, got {length}"
        )));
    }

    let mut chars: Vec<char> = vec![
        pick(rng, UPPERCASE),
        pick(rng, LOWERCASE),
        pick(rng, DIGITS),
        pick(rng, SYMBOLS),
    ];

    let combined: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
    for _ in MIN_GENERATED_LENGTH..length {
        chars.push(pick(rng, &combined));
    }

    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}
