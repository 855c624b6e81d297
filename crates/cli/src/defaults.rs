//! Shared default values for command line options.

pub const ERROR_RATE: f64 = synthap_sim::simulation::DEFAULT_ERROR_RATE;
pub const COUNT: usize = synthap_sim::simulation::DEFAULT_COUNT;
pub const NUM_SEQUENCES: usize = synthap_sim::simulation::sweep::DEFAULT_NUM_SEQUENCES;
