//! weave CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod expand;

#[derive(Parser, Debug)]
#[command(name = "weave")]
#[command(version)]
#[command(about = "Flatten a document by expanding <@file@> inclusion directives")]
struct Cli {
    /// Root document; the result is written next to it as t.<name>
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Wrap every inclusion in <!-- name --> / <!-- END name --> markers
    #[arg(short = 'b', long, overrides_with = "no_boundaries")]
    boundaries: bool,

    /// Splice inclusions with no visible markers
    #[arg(long, overrides_with = "boundaries")]
    no_boundaries: bool,

    /// Prefix for the output file name (default "t.")
    #[arg(short = 'p', long)]
    prefix: Option<String>,

    /// Maximum inclusion nesting depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the result to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Config file (defaults to weave.toml next to INPUT, if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn boundaries(&self) -> Option<bool> {
        match (self.boundaries, self.no_boundaries) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.quiet { "weave=warn" } else { "weave=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    expand::execute(expand::ExpandArgs {
        boundaries: cli.boundaries(),
        input: cli.input,
        config: cli.config,
        prefix: cli.prefix,
        max_depth: cli.max_depth,
        stdout: cli.stdout,
    })
}
