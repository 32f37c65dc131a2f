//! Request handlers for API endpoints

pub mod calculator;
pub mod portfolio;
pub mod preflight;

pub use calculator::*;
pub use portfolio::*;
pub use preflight::*;
