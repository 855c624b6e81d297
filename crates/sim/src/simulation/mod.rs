//! Generation of mutated sequence batches and dataset sweeps.
//!
//! - `generator`: lazy batch generation of mutated descendants.
//! - `parameters`: generation options and their defaults.
//! - `rng`: construction of the run's random number generator.
//! - `sweep`: dataset sweeps built on the generator.

pub mod generator;
pub mod parameters;
pub mod rng;
pub mod sweep;

pub use generator::{MutatedRecords, generate, generate_with, per_haplotype};
pub use parameters::{DEFAULT_COUNT, DEFAULT_ERROR_RATE, GenerationConfig, validate_error_rate};
pub use rng::create_rng;
pub use sweep::{DatasetSummary, SweepConfig, SweepPoint, build_dataset, run_sweep};
