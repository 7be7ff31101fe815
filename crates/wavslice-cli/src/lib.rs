//! wavslice CLI library.
//!
//! Command implementations and logging setup for the `wavslice` binary.

pub mod commands;
pub mod logging;
