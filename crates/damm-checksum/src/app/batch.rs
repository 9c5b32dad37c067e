//! Batch checksum workflows
//!
//! Applies the scalar operations elementwise over a slice of values, with
//! results in input order. A batch aborts on the first invalid element and
//! returns its error; there are no partial results.

use crate::domain::checksum::{
    append, append_number, generate, generate_number, verify, verify_number,
};
use crate::domain::digits::InputError;
use rayon::prelude::*;

/// Compute the check digit for each value.
pub fn generate_many<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, InputError> {
    inputs.iter().map(|s| generate(s.as_ref())).collect()
}

/// Append the check digit to each value.
pub fn append_many<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, InputError> {
    inputs.iter().map(|s| append(s.as_ref())).collect()
}

/// Verify the trailing check digit of each value.
pub fn verify_many<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<bool>, InputError> {
    inputs.iter().map(|s| verify(s.as_ref())).collect()
}

// =============================================================================
// Parallel batch operations
// =============================================================================

/// Parallel version of `generate_many`.
///
/// Elements are independent, so the folds run across the rayon pool. Output
/// order still matches input order. When several elements are invalid, which
/// element's error is returned is unspecified.
pub fn generate_many_parallel<S>(inputs: &[S]) -> Result<Vec<String>, InputError>
where
    S: AsRef<str> + Sync,
{
    inputs.par_iter().map(|s| generate(s.as_ref())).collect()
}

/// Parallel version of `append_many`.
pub fn append_many_parallel<S>(inputs: &[S]) -> Result<Vec<String>, InputError>
where
    S: AsRef<str> + Sync,
{
    inputs.par_iter().map(|s| append(s.as_ref())).collect()
}

/// Parallel version of `verify_many`.
pub fn verify_many_parallel<S>(inputs: &[S]) -> Result<Vec<bool>, InputError>
where
    S: AsRef<str> + Sync,
{
    inputs.par_iter().map(|s| verify(s.as_ref())).collect()
}

// =============================================================================
// Integer batch operations
// =============================================================================

/// Compute the check digit for each integer.
pub fn generate_numbers(inputs: &[u64]) -> Vec<String> {
    inputs.iter().map(|&n| generate_number(n)).collect()
}

/// Append the check digit to each integer, producing textual identifiers.
pub fn append_numbers(inputs: &[u64]) -> Vec<String> {
    inputs.iter().map(|&n| append_number(n)).collect()
}

/// Verify the trailing check digit of each integer.
pub fn verify_numbers(inputs: &[u64]) -> Vec<bool> {
    inputs.iter().map(|&n| verify_number(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_many_matches_scalar() {
        let inputs = ["572", "72", "96", ""];
        let results = generate_many(&inputs).unwrap();
        assert_eq!(results, vec!["4", "6", "1", ""]);

        for (input, result) in inputs.iter().zip(&results) {
            assert_eq!(generate(input).unwrap(), *result);
        }
    }

    #[test]
    fn test_generate_many_empty_batch() {
        let inputs: [&str; 0] = [];
        assert_eq!(generate_many(&inputs).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_many_aborts_on_first_invalid_element() {
        // Both elements are invalid; the first one's error is reported
        let inputs = ["12a3", "x"];
        assert_eq!(
            generate_many(&inputs).unwrap_err(),
            InputError::NonDigit {
                found: 'a',
                position: 2,
            }
        );
    }

    #[test]
    fn test_append_many() {
        let results = append_many(&["572", "96", ""]).unwrap();
        assert_eq!(results, vec!["5724", "961", ""]);
    }

    #[test]
    fn test_verify_many() {
        let results = verify_many(&["5724", "5274", "961", ""]).unwrap();
        assert_eq!(results, vec![true, false, true, false]);
    }

    #[test]
    fn test_verify_many_propagates_error() {
        assert!(verify_many(&["5724", "57x4"]).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs: Vec<String> = (0..200u64).map(|n| (n * n).to_string()).collect();

        assert_eq!(
            generate_many_parallel(&inputs).unwrap(),
            generate_many(&inputs).unwrap()
        );
        assert_eq!(
            append_many_parallel(&inputs).unwrap(),
            append_many(&inputs).unwrap()
        );

        let appended = append_many(&inputs).unwrap();
        assert_eq!(
            verify_many_parallel(&appended).unwrap(),
            verify_many(&appended).unwrap()
        );
    }

    #[test]
    fn test_parallel_reports_invalid_element() {
        let inputs = ["5724", "bad", "961"];
        assert!(generate_many_parallel(&inputs).is_err());
    }

    #[test]
    fn test_number_batches() {
        assert_eq!(generate_numbers(&[572, 96]), vec!["4", "1"]);
        assert_eq!(append_numbers(&[572, 96]), vec!["5724", "961"]);
        assert_eq!(verify_numbers(&[5724, 5274, 961]), vec![true, false, true]);
    }
}
