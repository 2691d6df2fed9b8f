//! Haunt - hunters and a ghost race through a house until one side gives up.
//!
//! Reads hunter names from stdin, narrates the round on stdout and logs to
//! stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use haunt_core::{Building, Director, StdoutNarrator};
use haunt_rules::{HouseLayout, SimConfig};

#[derive(Parser)]
#[command(name = "haunt")]
#[command(about = "Concurrent ghost hunt simulation", version)]
struct Cli {
    /// TOML house layout (defaults to the built-in house)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let layout = match &cli.layout {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            HouseLayout::from_toml_str(&source)
                .with_context(|| format!("invalid layout {}", path.display()))?
        }
        None => HouseLayout::default_house()?,
    };

    let config = SimConfig::default();
    let names = read_names(config.hunter_count)?;

    let building = Building::assemble(&layout, names, config, &mut rand::thread_rng())?;
    let report = Director::new().run(&building, &StdoutNarrator)?;

    if cli.json {
        println!("{}", report.to_json()?);
    }

    let dropped = building.evidence.drain();
    debug!(dropped, "evidence discarded");

    Ok(())
}

/// Prompt for `count` non-blank names.
fn read_names(count: usize) -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut names = Vec::with_capacity(count);

    for n in 1..=count {
        print!("Enter the name of hunter {n}: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("expected {count} hunter names, got {}", names.len());
        };
        let name = line?.trim().to_string();
        if name.is_empty() {
            bail!("hunter {n} needs a name");
        }
        names.push(name);
    }

    Ok(names)
}
