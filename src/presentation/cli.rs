//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all
//!   subcommands
//! - Flags override config values, which override environment variables

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Browser;
use crate::domain::Location;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Slipway - sliplane.io provisioning from the command line
#[derive(Parser, Debug)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Credentials come from SLIPWAY_CREDENTIALS (or GT_PW): \"username password\".")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./slipway.toml, then user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recreate the server and deploy the Docker service
    Run {
        /// Server name to recreate
        #[arg(long)]
        server: Option<String>,

        /// Docker image reference to deploy
        #[arg(long)]
        image: Option<String>,

        /// Environment block, KEY=VALUE lines (literal \n accepted)
        #[arg(long)]
        env_vars: Option<String>,

        /// Server location
        #[arg(long, value_enum)]
        location: Option<Location>,

        /// Session cookie file
        #[arg(long)]
        cookie_file: Option<PathBuf>,

        /// Run the browser with a visible window
        #[arg(long)]
        headed: bool,

        /// Browser engine
        #[arg(long, value_enum)]
        browser: Option<Browser>,
    },

    /// Sign in and persist the session without provisioning
    Login {
        /// Session cookie file
        #[arg(long)]
        cookie_file: Option<PathBuf>,

        /// Run the browser with a visible window
        #[arg(long)]
        headed: bool,

        /// Browser engine
        #[arg(long, value_enum)]
        browser: Option<Browser>,
    },
}
