//! Utility modules

pub mod logging;
pub mod verification;
