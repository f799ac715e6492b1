//! Slipway - browser-automation deployer for sliplane.io
//!
//! Slipway recreates a sliplane.io server and deploys a Docker service onto
//! it by driving the web console through a Playwright sidecar. A persisted
//! login session is reused whenever the saved cookies still hold; otherwise
//! it falls back to the delegated GitHub sign-in.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ProvisionPipeline, RunOptions};
pub use config::{Browser, Config, Timeouts};
pub use domain::{AuthOutcome, Credentials, EnvBlock, Location, RunReport, StepName};
pub use error::{SlipwayError, SlipwayResult};
pub use infrastructure::{JsonCookieStore, PlaywrightDriver};
pub use presentation::{Cli, Commands};
