//! Checksum engine constants
//!
//! Note: the operation table values are fixed by the published Damm
//! quasigroup. They must be reproduced verbatim, never re-derived.

// =============================================================================
// Operation table parameters
// =============================================================================

/// Table dimension (decimal digits 0-9)
pub const TABLE_SIZE: usize = 10;

/// Interim digit the checksum fold starts from
pub const INITIAL_INTERIM: u8 = 0;

// =============================================================================
// Operation table
// =============================================================================

/// Weakly totally anti-symmetric quasigroup table over the digits 0-9.
///
/// `OPERATION_TABLE[interim][digit]` is the next interim digit after folding
/// `digit` into `interim`. Every row and every column is a permutation of
/// 0-9, and the main diagonal is zero, so a payload followed by its own
/// check digit always folds back to 0. The anti-symmetry is what makes
/// adjacent transpositions detectable; altering any entry silently breaks
/// both guarantees.
pub const OPERATION_TABLE: [[u8; TABLE_SIZE]; TABLE_SIZE] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];
