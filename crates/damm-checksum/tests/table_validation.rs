//! Operation table validation tests
//!
//! The detection guarantees rest entirely on the algebraic shape of the
//! constant table: every row and column must be a permutation of 0-9, the
//! diagonal must be zero, and the table must be weakly totally
//! anti-symmetric. These tests pin all of that down so a transcription
//! error cannot slip through silently.

use damm_checksum::OPERATION_TABLE;
use damm_checksum::constants::TABLE_SIZE;

/// Check that ten digit values cover 0-9 exactly once.
fn is_permutation(values: impl IntoIterator<Item = u8>) -> bool {
    let mut seen = [false; TABLE_SIZE];
    for value in values {
        if value as usize >= TABLE_SIZE || seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    seen.iter().all(|&s| s)
}

// =============================================================================
// Quasigroup structure
// =============================================================================

#[test]
fn test_every_row_is_a_permutation() {
    for (r, row) in OPERATION_TABLE.iter().enumerate() {
        assert!(
            is_permutation(row.iter().copied()),
            "row {} is not a permutation of 0-9",
            r
        );
    }
}

#[test]
fn test_every_column_is_a_permutation() {
    for c in 0..TABLE_SIZE {
        assert!(
            is_permutation(OPERATION_TABLE.iter().map(|row| row[c])),
            "column {} is not a permutation of 0-9",
            c
        );
    }
}

#[test]
fn test_diagonal_is_zero() {
    // T[d][d] == 0 is what makes payload + check digit fold back to 0
    for d in 0..TABLE_SIZE {
        assert_eq!(OPERATION_TABLE[d][d], 0, "diagonal entry {} is nonzero", d);
    }
}

// =============================================================================
// Anti-symmetry (transposition detection)
// =============================================================================

#[test]
fn test_weak_total_anti_symmetry() {
    // For every interim state c and distinct digits a != b, folding "ab"
    // and "ba" from c must land on different interim states. This is the
    // property that makes adjacent transpositions detectable.
    for c in 0..TABLE_SIZE {
        for a in 0..TABLE_SIZE {
            for b in 0..TABLE_SIZE {
                if a == b {
                    continue;
                }
                let ab = OPERATION_TABLE[OPERATION_TABLE[c][a] as usize][b];
                let ba = OPERATION_TABLE[OPERATION_TABLE[c][b] as usize][a];
                assert_ne!(
                    ab, ba,
                    "transposition of {} and {} undetected from interim {}",
                    a, b, c
                );
            }
        }
    }
}

#[test]
fn test_first_row_matches_published_constant() {
    // Spot-check against the published table so a row swap cannot pass the
    // structural tests unnoticed
    assert_eq!(OPERATION_TABLE[0], [0, 3, 1, 7, 5, 9, 8, 6, 4, 2]);
    assert_eq!(OPERATION_TABLE[9], [2, 5, 8, 1, 4, 3, 6, 7, 9, 0]);
}
