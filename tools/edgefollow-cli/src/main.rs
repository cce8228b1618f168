//! EdgeFollow CLI — replay pointer traces through the resizer and run the
//! preprocessing demo.
//!
//! Usage:
//!   edgefollow simulate <TRACE>   Replay a JSONL pointer trace
//!   edgefollow edge               Report the closest surface edge to a point
//!   edgefollow preprocess         Run the background task demo
//!   edgefollow config             Show or write the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use edgefollow_common::config::AppConfig;
use edgefollow_model::geometry::{ElementSize, Point, Rect};

mod args;
mod commands;

#[derive(Parser)]
#[command(
    name = "edgefollow",
    about = "Pointer-driven resize and follow for host UI surfaces",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/edgefollow/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a pointer trace and print one visual update per event
    Simulate {
        /// Path to the JSONL trace
        trace: PathBuf,

        /// Surface bounds as X,Y,WIDTH,HEIGHT (overrides the trace header)
        #[arg(long, value_parser = args::parse_rect)]
        surface: Option<Rect>,

        /// Element natural size as WIDTH,HEIGHT (overrides the trace header)
        #[arg(long, value_parser = args::parse_size)]
        element: Option<ElementSize>,

        /// Initial scale divisor
        #[arg(long)]
        initial_scale: Option<u32>,

        /// Growth per pixel of distance from the entry edge
        #[arg(long)]
        sensitivity: Option<f64>,

        /// Print the accumulated drawable state instead of raw updates
        #[arg(long)]
        render: bool,
    },

    /// Report which surface edge is closest to a point
    Edge {
        /// Surface bounds as X,Y,WIDTH,HEIGHT
        #[arg(long, value_parser = args::parse_rect)]
        surface: Rect,

        /// Pointer position as X,Y
        #[arg(long, value_parser = args::parse_point)]
        point: Point,
    },

    /// Run the background preprocessing demo with a progress bar
    Preprocess {
        /// Number of doubling iterations
        #[arg(long)]
        iterations: Option<u64>,

        /// Pause after each percent (milliseconds)
        #[arg(long)]
        pause_ms: Option<u64>,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration back to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    edgefollow_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Simulate {
            trace,
            surface,
            element,
            initial_scale,
            sensitivity,
            render,
        } => commands::simulate::run(
            &config,
            trace,
            commands::simulate::Overrides {
                surface,
                element,
                initial_scale,
                sensitivity,
            },
            render,
        ),
        Commands::Edge { surface, point } => commands::edge::run(surface, point),
        Commands::Preprocess {
            iterations,
            pause_ms,
        } => commands::preprocess::run(&config, iterations, pause_ms).await,
        Commands::Config { write } => commands::config::run(&config, cli.config, write),
    }
}
