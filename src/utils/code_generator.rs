//! Short code generation.
//!
//! Draws fixed-length codes from a lowercase alphanumeric alphabet. Codes
//! are not guaranteed unique here; the service layer redraws on collision.

use rand::Rng;

/// Alphabet a short code is drawn from: lowercase ASCII letters and digits.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated short code.
///
/// Three characters over a 36-symbol alphabet give 46,656 possible codes.
pub const CODE_LENGTH: usize = 3;

/// Generates a random short code.
///
/// Each position is drawn independently and uniformly from [`ALPHABET`],
/// so repeated characters are possible ("aaa" is a valid draw).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 3);
/// assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
