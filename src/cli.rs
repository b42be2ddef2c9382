use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flood risk impact mapping.
#[derive(Parser)]
#[command(
    name = "floodrisk",
    version,
    about = "Flood risk impact mapping from depth severity and social vulnerability"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full workflow on synthetic streamflow and vulnerability data.
    Run(RunArgs),
    /// Assess risk from existing depth and vulnerability tables.
    Assess(AssessArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "floodrisk.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the output root directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `assess` subcommand.
#[derive(clap::Args)]
pub struct AssessArgs {
    /// Path to TOML configuration file. Defaults apply when it does not exist.
    #[arg(short, long, default_value = "floodrisk.toml")]
    pub config: PathBuf,

    /// Depth table (CSV with feature_id, depth_m and optional longitude/latitude).
    #[arg(long)]
    pub depths: PathBuf,

    /// Vulnerability table (CSV with location_id, longitude, latitude, svi_score).
    #[arg(long)]
    pub vulnerability: PathBuf,

    /// Override the output root directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
