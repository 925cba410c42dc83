//! natstat - NAT translation statistics CLI
//!
//! Reads a `show ip nat translations` dump from a file or standard input
//! and prints per-protocol session statistics.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use natstat::{read_table, render_text, summarize};

/// NAT translation table statistics
#[derive(Parser, Debug)]
#[command(name = "natstat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Translation dump to read (defaults to standard input)
    input: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

/// Initializes tracing/logging subsystem
fn init_logging(level: &str) {
    let level = level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run(args: &Args) -> anyhow::Result<()> {
    let table = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_table(BufReader::new(file))?
        }
        None => read_table(io::stdin().lock())?,
    };
    info!("parsed {} translation records", table.len());

    let report = summarize(&table);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    info!("reading NAT translation dump");
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("natstat failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
