//! Command-line front end: reads a fixed number of lines, sorts them with
//! the named algorithm and comparator, and writes them back out.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use linesort::{Algorithm, Direction, MAX_INPUT_STRING_SIZE, SortConfig, lines, sort_with_config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sorts a fixed number of lines", long_about = None)]
struct Args {
    /// Number of lines to read from INPUT.
    count: usize,

    input: PathBuf,

    output: PathBuf,

    /// One of: bubble, insertion, merge, quick, radix.
    algorithm: Algorithm,

    /// One of: asc, des.
    comparator: Direction,

    /// Maximum line length in bytes; also the radix sort width.
    #[arg(long, default_value_t = MAX_INPUT_STRING_SIZE)]
    width: usize,

    /// Cap on auxiliary memory for merge and radix sort, in bytes.
    #[arg(long)]
    scratch_limit: Option<usize>,

    /// Seed for the quick sort shuffle.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SortConfig {
        let mut config = SortConfig::default().with_width(self.width);
        if let Some(limit) = self.scratch_limit {
            config = config.with_scratch_limit(limit);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).init();

    let config = args.config();
    debug!("Config: {:?}", config);

    let mut data = lines::read_lines_from_path(&args.input, args.count, config.width)
        .with_context(|| format!("failed to read {} line(s) from {:?}", args.count, args.input))?;

    info!("Sorting {} line(s) with {} sort ({})", data.len(), args.algorithm, args.comparator);
    let start = Instant::now();
    sort_with_config(args.algorithm, &mut data, &args.comparator, &config)
        .with_context(|| format!("{} sort failed", args.algorithm))?;
    info!("Sorted in {:?}", start.elapsed());

    lines::write_lines_to_path(&args.output, &data)
        .with_context(|| format!("failed to write {:?}", args.output))?;

    Ok(())
}
