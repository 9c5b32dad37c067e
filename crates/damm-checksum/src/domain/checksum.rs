//! Damm checksum fold and the three operations built on it
//!
//! The interim digit starts at 0 and every input digit advances it through
//! the operation table. Folding a payload followed by its own check digit
//! always terminates at 0, which is what `verify` tests for.

use crate::constants::{INITIAL_INTERIM, OPERATION_TABLE};
use crate::domain::digits::{InputError, digit_to_char, parse_digits};

/// Fold a digit sequence through the operation table.
///
/// Digits must already be validated to the range 0-9. Returns the final
/// interim digit, which is the check digit of the sequence.
pub fn fold_digits(digits: &[u8]) -> u8 {
    let mut interim = INITIAL_INTERIM;
    for &digit in digits {
        interim = OPERATION_TABLE[interim as usize][digit as usize];
    }
    interim
}

/// Compute the check digit of a digit-only string.
///
/// Returns a one-character string. The empty string yields an empty result
/// rather than an error.
pub fn generate(input: &str) -> Result<String, InputError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let digits = parse_digits(input)?;
    Ok(digit_to_char(fold_digits(&digits)).to_string())
}

/// Compute the check digit of a non-negative integer.
///
/// The integer is folded over its canonical decimal rendering, so an
/// integer input cannot carry leading zeros. The check digit itself is
/// unaffected (folding a zero from the zero interim state is a no-op), but
/// callers that need the zeros present in the appended identifier must pass
/// the string form.
pub fn generate_number(input: u64) -> String {
    let rendered = input.to_string();
    let digits: Vec<u8> = rendered.bytes().map(|b| b - b'0').collect();
    digit_to_char(fold_digits(&digits)).to_string()
}

/// Append the check digit to a digit-only string.
///
/// The empty string passes through unchanged. Validation happens inside
/// the `generate` call and its error propagates as is.
pub fn append(input: &str) -> Result<String, InputError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let check = generate(input)?;
    let mut out = String::with_capacity(input.len() + 1);
    out.push_str(input);
    out.push_str(&check);
    Ok(out)
}

/// Append the check digit to a non-negative integer.
///
/// The result is always textual: the decimal rendering of the integer
/// followed by its check digit.
pub fn append_number(input: u64) -> String {
    let mut out = input.to_string();
    out.push_str(&generate_number(input));
    out
}

/// Check that a value carrying a trailing check digit folds back to 0.
///
/// The empty string has no check digit and verifies as `false`. Malformed
/// input is an error, never a silent `false`: a failed format check and a
/// checksum mismatch are distinct outcomes.
pub fn verify(input: &str) -> Result<bool, InputError> {
    Ok(generate(input)? == "0")
}

/// Check a non-negative integer carrying a trailing check digit.
pub fn verify_number(input: u64) -> bool {
    generate_number(input) == "0"
}
