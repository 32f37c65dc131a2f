//! Request/response records for the loadprobe endpoints

pub mod calculator;
pub mod portfolio;

pub use calculator::{SumRequest, SumResponse};
pub use portfolio::{PortfolioRequest, PortfolioResponse};
