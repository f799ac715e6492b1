//! Application Layer
//!
//! Workflow controllers that orchestrate the provisioning run.
//! This layer:
//! - Depends on Domain layer (value objects, report, ports)
//! - Coordinates the browser through the `BrowserDriver` port
//! - Contains no locator strings (those live in `pages`)
//!
//! ## Controllers
//!
//! - `SessionManager` - restore, probe and persist the cookie session
//! - `LoginController` - delegated GitHub login fallback
//! - `ServerLifecycle` - delete-if-exists and create-server flows
//! - `DeploymentFlow` - registry deploy of a container image
//! - `ProvisionPipeline` - the full run with step isolation

pub mod deployment;
pub mod lifecycle;
pub mod login;
pub mod pages;
pub mod pipeline;
pub mod session;

pub use deployment::DeploymentFlow;
pub use lifecycle::{DeleteOutcome, ServerLifecycle};
pub use login::{LoginController, LoginError};
pub use pipeline::{ProvisionPipeline, RunOptions};
pub use session::{RestoreOutcome, SessionManager};
