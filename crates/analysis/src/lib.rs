//! # Synthap analysis crate
//!
//! Summary statistics over multiple sequence alignments of generated
//! datasets: sequence count, ungapped length distribution and average
//! nucleotide identity.

pub mod analysis;
pub mod errors;

pub use analysis::{Alignment, MsaStats, average_identity, msa_stats};
pub use errors::AnalysisError;
