//! Short code generation and format checks.

use rand::{Rng, distr::Alphanumeric};

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Each of the [`CODE_LENGTH`] characters is drawn independently and
/// uniformly from `[a-zA-Z0-9]`, giving 62^6 (about 5.7e10) possible codes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a generated code.
///
/// Anything else can never be a registry key.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
