//! Subcommand implementations.
//!
//! Every subcommand's argument struct implements [`Command`]; `main`
//! dispatches on the parsed subcommand through it.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

pub mod datasets;
pub mod make_datasets;
pub mod msa_stats;
pub mod mutate;

/// Trait implemented by all synthap subcommands.
#[enum_dispatch]
pub trait Command {
    fn execute(&self) -> Result<()>;
}
