//! Affect CLI — Score interview snapshots and replay recorded sessions.
//!
//! Usage:
//!   affect snapshot <FILE>     Score one frame's recorded detections
//!   affect session <FILE>      Replay a recorded session through the aggregator
//!   affect config              Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "affect",
    about = "Interview affect analysis from face-emotion detections",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single frame (JSON array of detections)
    Snapshot {
        /// Path to the snapshot detections file
        path: PathBuf,

        /// Also print a plain-language feedback sentence
        #[arg(long)]
        feedback: bool,
    },

    /// Replay a recorded session (JSON Lines, one frame per line)
    Session {
        /// Path to the session recording
        path: PathBuf,

        /// Stop after this many frames
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_frames: Option<u64>,

        /// Abort on the first frame the detector could not analyze
        #[arg(long)]
        strict: bool,

        /// Also print a plain-language feedback sentence
        #[arg(long)]
        feedback: bool,

        /// Include frame accounting in the output
        #[arg(long)]
        stats: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the standard location
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = affect_common::config::AppConfig::load();

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    affect_common::logging::init_logging(&config.logging);

    if let Err(e) = config.validate() {
        tracing::warn!("Ignoring invalid configuration: {e}");
        config = affect_common::config::AppConfig::default();
    }

    match cli.command {
        Commands::Snapshot { path, feedback } => {
            commands::snapshot::run(path, feedback || config.analysis.feedback)
        }
        Commands::Session {
            path,
            max_frames,
            strict,
            feedback,
            stats,
        } => {
            let session_config =
                commands::session::session_config(&config.analysis, max_frames, strict)?;
            commands::session::run(
                path,
                session_config,
                feedback || config.analysis.feedback,
                stats,
            )
            .await
        }
        Commands::Config { save } => commands::config::run(&config, save),
    }
}
