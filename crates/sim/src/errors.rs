use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

/// Error type for failures when constructing a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSequence {
    /// A character was not recognized as a valid nucleotide.
    #[error("Invalid character in sequence: '{0}'")]
    InvalidChar(char),
}

/// Configuration problems detected before any random draw is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Error rate is negative, above 1.0 or not a number.
    #[error("Invalid error rate: {0} (must be between 0.0 and 1.0)")]
    InvalidErrorRate(f64),

    /// Descendants were requested but there is nothing to derive them from.
    #[error("Cannot generate {count} sequences from an empty haplotype collection")]
    NoHaplotypes { count: usize },

    /// A dataset sweep was configured with an empty or invalid axis.
    #[error("Invalid sweep configuration: {0}")]
    InvalidSweep(String),
}

/// Errors raised while reading or writing FASTA data.
#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed FASTA, e.g. sequence data before the
    /// first `>` header.
    #[error("Malformed FASTA in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A record could not be interpreted as a nucleotide sequence.
    #[error("Record '{id}' is not a valid nucleotide sequence: {source}")]
    InvalidSequence {
        id: String,
        #[source]
        source: InvalidSequence,
    },
}

impl FastaError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify an error raised while parsing records.
    pub(crate) fn read(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::InvalidData => Self::Malformed { path, source },
            _ => Self::Io { path, source },
        }
    }
}

/// Errors related to dataset metadata (`meta.toml`).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse dataset metadata {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not serialize dataset metadata: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No dataset metadata found at {}", .0.display())]
    MissingMetadata(PathBuf),

    #[error("Could not scan dataset directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Errors from a full dataset sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fasta(#[from] FastaError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
