//! Report analyzers.

pub mod candidates;
