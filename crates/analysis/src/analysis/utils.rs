//! Utility functions for analysis module
//!
//! Shared helper functions used across analysis submodules.

/// Calculate mean of a slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Count positions where two rows carry the same byte.
///
/// Only the common prefix is compared. This sits in the innermost loop of
/// the identity computation.
#[inline]
pub fn count_matches(row1: &[u8], row2: &[u8]) -> usize {
    let len = row1.len().min(row2.len());
    let (row1, row2) = (&row1[..len], &row2[..len]);

    // Process in chunks of 8 for better CPU pipelining
    let mut matches = 0;
    let mut chunks1 = row1.chunks_exact(8);
    let mut chunks2 = row2.chunks_exact(8);
    for (a, b) in chunks1.by_ref().zip(chunks2.by_ref()) {
        matches += (a[0] == b[0]) as usize;
        matches += (a[1] == b[1]) as usize;
        matches += (a[2] == b[2]) as usize;
        matches += (a[3] == b[3]) as usize;
        matches += (a[4] == b[4]) as usize;
        matches += (a[5] == b[5]) as usize;
        matches += (a[6] == b[6]) as usize;
        matches += (a[7] == b[7]) as usize;
    }

    matches
        + chunks1
            .remainder()
            .iter()
            .zip(chunks2.remainder())
            .filter(|(a, b)| a == b)
            .count()
}
