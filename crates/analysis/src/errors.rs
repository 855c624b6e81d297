use synthap_sim::errors::FastaError;
use thiserror::Error;

/// Errors raised while loading or summarizing an alignment.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Alignment contains no sequences")]
    Empty,

    /// Rows of an alignment must all have the same width.
    #[error("Alignment row '{id}' has width {found}, expected {expected}")]
    LengthMismatch {
        expected: usize,
        found: usize,
        id: String,
    },

    #[error("Alignment has zero columns")]
    ZeroWidth,

    #[error(transparent)]
    Fasta(#[from] FastaError),
}
