//! Mutation of nucleotide sequences.
//!
//! Each planned position receives one of three events:
//! - **Substitution**: the base is replaced by a different one
//! - **Insertion**: up to two random bases follow the original base
//! - **Deletion**: up to two bases are removed

pub mod mutation;

pub use mutation::{
    AppliedEvent, EVENT_PROBABILITIES, EventKind, MAX_INDEL_LENGTH, MutationOutcome,
    MutationPlan, Mutator, mutate, mutate_traced, planned_mutation_count,
};
