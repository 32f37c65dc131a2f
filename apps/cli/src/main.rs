//! loadprobe CLI
//!
//! Usage:
//!   cargo run --bin loadprobe-cli -- holdings --count 580 --output-dir testdata

use anyhow::Result;
use clap::{Parser, Subcommand};
use loadprobe_cli::holdings;
use std::path::PathBuf;

const SAMPLE_SIZE: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "loadprobe-cli")]
#[command(about = "Fixture tooling for loadprobe load tests")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random holdings file for POST /process-portfolio
    Holdings {
        /// Number of symbols to generate
        #[arg(short, long, default_value_t = 580)]
        count: usize,

        /// Letters per symbol
        #[arg(short, long, default_value_t = 4)]
        length: usize,

        /// Directory the fixture is written to
        #[arg(short, long, default_value = "testdata")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Holdings {
            count,
            length,
            output_dir,
        } => {
            let mut rng = rand::rng();
            let fixture = holdings::generate_holdings(count, length, &mut rng);
            let path = holdings::write_fixture(&output_dir, &fixture, &mut rng)?;

            let sample = &fixture.holdings[..fixture.holdings.len().min(SAMPLE_SIZE)];
            let ellipsis = if fixture.holdings.len() > SAMPLE_SIZE {
                "..."
            } else {
                ""
            };

            println!("Generated {count} holdings");
            println!("Output file: {}", path.display());
            println!("Sample: {sample:?}{ellipsis}");
        }
    }

    Ok(())
}
