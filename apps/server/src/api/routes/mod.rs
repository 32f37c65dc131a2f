//! API routes

pub mod endpoints;
