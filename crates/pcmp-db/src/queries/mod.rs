//! Database query implementations.

pub mod comparisons;
pub mod projects;
