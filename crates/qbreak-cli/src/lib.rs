//! qbreak Command-Line Interface
//!
//! Argument definitions and command implementations behind the `qbreak`
//! binary. A session builds a fresh grid, replays a script of edit commands
//! against it, and prints the result.
//!
//! ```text
//! $ qbreak edit --wires 2 --columns 3 --script "h d s x c"
//! → Editing 2×3 grid (5 commands)
//!
//! q0  ──H────●───────
//! q1  ───────⊕───────
//!
//! Operations (2):
//!   1. h q0
//!   2. cx q0, q1
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

pub mod commands;
pub mod config;

/// qbreak - edit and run quantum circuit grids from the terminal
#[derive(Debug, Parser)]
#[command(name = "qbreak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.qbreak/config.yaml)
    #[arg(long, env = "QBREAK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply an edit script and show the resulting grid
    Edit {
        #[command(flatten)]
        session: SessionArgs,

        /// Print the compiled operations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply an edit script and simulate the compiled grid
    Run {
        #[command(flatten)]
        session: SessionArgs,

        /// Number of measurements (overrides the configuration)
        #[arg(long)]
        shots: Option<u32>,

        /// Seed for reproducible measurements
        #[arg(long)]
        seed: Option<u64>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Where the edit script comes from and how the grid is sized.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["script", "input"])))]
pub struct SessionArgs {
    /// Edit commands, separated by whitespace or commas
    #[arg(short, long)]
    pub script: Option<String>,

    /// File holding the edit commands
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of wires (overrides the configuration)
    #[arg(long)]
    pub wires: Option<usize>,

    /// Number of columns (overrides the configuration)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Radians turned by `rot+` / `rot-` (overrides the configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub rotation_step: Option<f64>,
}
