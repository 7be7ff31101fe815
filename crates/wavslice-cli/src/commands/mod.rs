//! Command implementations for the wavslice CLI

pub mod info;
pub mod json_output;
pub mod slice;
pub mod split;

mod reporting;
