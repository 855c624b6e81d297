use crate::analysis::utils::{mean, population_std};
use crate::analysis::{Alignment, average_identity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsaStats {
    pub num_seqs: usize,
    /// Mean ungapped sequence length.
    pub seq_length_mean: f64,
    /// Population standard deviation of ungapped sequence lengths.
    pub seq_length_std: f64,
    /// Average nucleotide identity over all ordered pairs.
    pub ani: f64,
}

/// Compute [`MsaStats`] for `alignment`.
pub fn msa_stats(alignment: &Alignment) -> MsaStats {
    let lengths: Vec<f64> = alignment
        .ungapped_lengths()
        .into_iter()
        .map(|len| len as f64)
        .collect();

    MsaStats {
        num_seqs: alignment.num_rows(),
        seq_length_mean: mean(&lengths),
        seq_length_std: population_std(&lengths),
        ani: average_identity(alignment),
    }
}

/// Tab-separated `name<TAB>value` lines.
impl fmt::Display for MsaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num_seqs\t{}", self.num_seqs)?;
        writeln!(f, "seq_length_mean\t{:?}", self.seq_length_mean)?;
        writeln!(f, "seq_length_std\t{:?}", self.seq_length_std)?;
        writeln!(f, "ani\t{:?}", self.ani)
    }
}
