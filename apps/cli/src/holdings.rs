//! Random holdings fixtures for `POST /process-portfolio` load tests.

use anyhow::Context;
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Body shape accepted by the portfolio endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingsFixture {
    pub holdings: Vec<String>,
}

/// A random symbol of `length` uppercase ASCII letters.
pub fn random_symbol<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| rng.random_range(b'A'..=b'Z') as char)
        .collect()
}

pub fn generate_holdings<R: Rng>(
    count: usize,
    length: usize,
    rng: &mut R,
) -> HoldingsFixture {
    HoldingsFixture {
        holdings: (0..count).map(|_| random_symbol(rng, length)).collect(),
    }
}

/// `holdings_<count>_<6 random digits>.json`
pub fn fixture_file_name<R: Rng>(count: usize, rng: &mut R) -> String {
    let suffix: String = (0..6)
        .map(|_| rng.random_range(b'0'..=b'9') as char)
        .collect();
    format!("holdings_{count}_{suffix}.json")
}

/// Write a pretty-printed fixture into `output_dir`, creating it if missing.
pub fn write_fixture<R: Rng>(
    output_dir: &Path,
    fixture: &HoldingsFixture,
    rng: &mut R,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let path = output_dir.join(fixture_file_name(fixture.holdings.len(), rng));
    let json = serde_json::to_string_pretty(fixture).context("Failed to encode holdings")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
