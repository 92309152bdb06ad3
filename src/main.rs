//! Reads a list of whole numbers, sorts it with counting sort and with quicksort, and prints
//! the sorted lists together with how long each step took.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use popular_sorts::counting::{self, DEFAULT_RANGE};
use popular_sorts::input::read_whole_input;
use popular_sorts::measure::measure;
use popular_sorts::quicksort;
use popular_sorts::report::{Elements, ReadTiming, Timing};

#[derive(Parser)]
#[command(name = "popular-sorts", version)]
#[command(about = "Time counting sort and quicksort on a list of whole numbers")]
struct Cli {
    /// Input file with one whole number per line
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Exclusive upper bound of the values counting sort accepts
    #[arg(short, long, default_value_t = DEFAULT_RANGE)]
    range: usize,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(input = %cli.input.display(), range = cli.range, "starting");

    let (loaded, read_elapsed) = measure(|| read_whole_input(&cli.input));
    let mut values = loaded.with_context(|| format!("could not load {}", cli.input.display()))?;
    println!("{}", ReadTiming(read_elapsed));
    info!(len = values.len(), "loaded input");

    let (count_sorted, count_elapsed) = measure(|| counting::sort(&values, cli.range));
    let count_sorted = count_sorted.context("counting sort rejected the input")?;
    println!(
        "{}",
        Timing {
            label: "Count",
            elapsed: count_elapsed,
        }
    );
    println!("{}", Elements(&count_sorted));

    let ((), quick_elapsed) = measure(|| quicksort::sort(&mut values));
    println!(
        "{}",
        Timing {
            label: "Quick",
            elapsed: quick_elapsed,
        }
    );
    println!("{}", Elements(&values));

    Ok(())
}
