//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use synthap_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("ACGT").unwrap();
//! let mut rng = create_rng(Some(1));
//! assert_eq!(mutate(&seq, 0.0, &mut rng), seq);
//! ```

pub use crate::base::{Nucleotide, Sequence};
pub use crate::errors::{self, ConfigError, DatasetError, FastaError, SweepError};
pub use crate::evolution::{EventKind, MutationOutcome, Mutator, mutate, mutate_traced};
pub use crate::genome::HaplotypeRecord;
pub use crate::simulation::{GenerationConfig, create_rng, generate, generate_with};
