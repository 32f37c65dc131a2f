//! loadprobe - demo HTTP endpoints for load-testing tools
//!
//! Two stateless JSON endpoints:
//! - `POST /calculator` sums `num1` and `num2`
//! - `POST /process-portfolio` counts `holdings`
//!
//! Both answer CORS preflights and reject every other method.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use crate::config::Config;
pub use error::{Error, Result};
