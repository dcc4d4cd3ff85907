use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Academic calendar generator.
#[derive(Parser)]
#[command(
    name = "acal",
    version,
    about = "Study schedule generator for residency and postgraduate programs"
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
    /// Generate a schedule from a TOML request.
    Generate(GenerateArgs),
    /// Generate the built-in residency example plan.
    Example(ExampleArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "acal.toml")]
    pub config: PathBuf,

    /// Print the week grid of every academic year.
    #[arg(long)]
    pub grid: bool,

    /// Fail when the blocks do not fit the academic years.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `example` subcommand.
#[derive(clap::Args)]
pub struct ExampleArgs {
    /// Calendar year in which the first academic year starts.
    #[arg(short, long, default_value_t = 2025)]
    pub start_year: i32,

    /// Print the week grid of every academic year.
    #[arg(long)]
    pub grid: bool,
}
