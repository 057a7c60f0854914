//! Library surface of the NEO explorer CLI.
//!
//! Exposed so integration tests can drive the pipeline without spawning
//! the binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
