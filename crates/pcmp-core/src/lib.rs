//! Prompt Compare Core Library
//!
//! Domain models and business logic for projects and saved comparisons.

pub mod comparison;
pub mod error;
pub mod project;

pub use error::{PcmpError, PcmpResult};
