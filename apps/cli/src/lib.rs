//! loadprobe CLI support library

pub mod holdings;
