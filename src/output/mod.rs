//! Fixture output
//!
//! - `json`: writing and reading fixture files
//! - `text`: console summary of a generated fixture

pub mod json;
pub mod text;
