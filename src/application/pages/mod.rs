//! Page objects for the platform UI.
//!
//! Each type owns the locator constants for one screen and exposes
//! intent-named operations, so locator brittleness stays in this module.
//! Controllers never construct `Locator` values themselves.

pub mod deploy;
pub mod login;
pub mod project;
pub mod servers;

pub use deploy::DeployPanel;
pub use login::LoginPage;
pub use project::ProjectPage;
pub use servers::ServersPage;
