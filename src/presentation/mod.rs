//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the pipeline with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Wires the pipeline together (dependency injection)
//! - `output` - Run report rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_event_sink, create_pipeline};
pub use output::{create_renderer, print_config_warnings, OutputFormat};
