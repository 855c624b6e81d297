//! Average nucleotide identity (ANI).
//!
//! The identity of two rows is the fraction of alignment columns in which
//! they carry the same character; two gaps count as a match. The alignment
//! ANI averages this over all ordered pairs, self-pairs included, so an
//! alignment of `n` rows contributes `n²` terms.

use crate::analysis::Alignment;
use crate::analysis::utils::count_matches;
use rayon::prelude::*;

/// Number of columns where `row1` and `row2` agree.
#[inline]
pub fn identical_columns(row1: &[u8], row2: &[u8]) -> usize {
    count_matches(row1, row2)
}

/// Fraction of identical columns between two rows of equal width.
///
/// Returns 0.0 for zero-width rows.
pub fn pairwise_identity(row1: &[u8], row2: &[u8]) -> f64 {
    let width = row1.len().max(row2.len());
    if width == 0 {
        return 0.0;
    }
    identical_columns(row1, row2) as f64 / width as f64
}

/// Mean identity over all ordered pairs of rows, self-pairs included.
///
/// Identity is symmetric, so only pairs `i < j` are compared (in parallel)
/// and counted twice; each self-pair contributes exactly 1.
pub fn average_identity(alignment: &Alignment) -> f64 {
    let rows = alignment.rows();
    let n = rows.len();
    let width = alignment.width();
    if n == 0 || width == 0 {
        return 0.0;
    }

    let off_diagonal: usize = (0..n)
        .into_par_iter()
        .map(|i| {
            (i + 1..n)
                .map(|j| identical_columns(&rows[i], &rows[j]))
                .sum::<usize>()
        })
        .sum();

    let total_matches = 2 * off_diagonal + n * width;
    total_matches as f64 / (n * n * width) as f64
}
