//! # Synthap simulation crate
//!
//! Reproducible generation of mutated nucleotide sequences for benchmarking
//! sequence-to-graph alignment. The crate provides:
//!
//! - `base`: nucleotides and sequences.
//! - `evolution`: the single-pass mutation engine.
//! - `genome`: identified haplotype records.
//! - `simulation`: batch generation, RNG construction and dataset sweeps.
//! - `io`: FASTA reading and writing, with gzip support.
//! - `storage`: dataset directories and their `meta.toml`.
//!
//! All randomness comes from a caller-owned generator, so a complete run is
//! reproducible from one seed.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod io;
pub mod prelude;
pub mod simulation;
pub mod storage;

pub use base::{Nucleotide, Sequence};
pub use genome::HaplotypeRecord;
