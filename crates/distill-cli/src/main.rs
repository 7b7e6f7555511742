//! distill: token-budgeted code context extraction

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use distill_cli::commands;
use distill_cli::ScanOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "distill")]
#[command(author, version, about = "Code context extraction tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree and print the digest summary
    Scan {
        /// Path to the source tree to scan
        path: PathBuf,

        /// Write the full scan result as JSON to this file ("-" for stdout)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Keep configuration files in the scan
        #[arg(long)]
        include_config: bool,

        /// Line count above which a record carries signatures only
        #[arg(long)]
        context_threshold: Option<usize>,

        /// Largest line count still eligible for full content
        #[arg(long)]
        max_full_size: Option<usize>,

        /// Extra extension to scan (repeatable)
        #[arg(long = "extension")]
        extensions: Vec<String>,

        /// Extra ignore pattern merged with the defaults (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,
    },

    /// Show statistics for a scanned tree
    Info {
        /// Path to the source tree to scan
        path: PathBuf,

        /// How many of the largest files to list
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            path,
            json,
            include_config,
            context_threshold,
            max_full_size,
            extensions,
            ignore,
        } => {
            let options = ScanOptions {
                json,
                include_config,
                context_threshold,
                max_full_size,
                extensions,
                ignore,
            };
            commands::scan::run(&path, &options)?;
        }
        Commands::Info { path, top } => {
            commands::info::run(&path, top)?;
        }
    }

    Ok(())
}
