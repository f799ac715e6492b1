//! Domain Layer
//!
//! The core of Slipway - session, server and deployment concepts without
//! any I/O.
//!
//! ## Structure
//!
//! - `cookies` - Browser session cookies and expiry pruning
//! - `credentials` - Delegated login account, redacted in debug output
//! - `env_block` - Environment variable block for the deploy form
//! - `provision` - What to create and what to deploy
//! - `report` - Step outcomes and the run report
//! - `ports` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the browser, file system or network
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod cookies;
pub mod credentials;
pub mod env_block;
pub mod ports;
pub mod provision;
pub mod report;

pub use cookies::{prune_expired, Cookie};
pub use credentials::Credentials;
pub use env_block::EnvBlock;
pub use provision::{DeploymentSpec, Location, ServerSpec};
pub use report::{AuthOutcome, RunReport, StepName, StepOutcome};
