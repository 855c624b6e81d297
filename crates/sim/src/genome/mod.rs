//! Identified haplotype records.

pub mod haplotype;

pub use haplotype::HaplotypeRecord;
