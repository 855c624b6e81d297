//! Alignment statistics.
//!
//! - Alignment loading and validation
//! - Ungapped length distribution
//! - Average nucleotide identity over all ordered pairs

pub mod alignment;
pub mod identity;
pub mod stats;
pub mod utils;

pub use alignment::{Alignment, GAP};
pub use identity::{average_identity, identical_columns, pairwise_identity};
pub use stats::{MsaStats, msa_stats};
