//! Deployment Controller
//!
//! Deploys a container image onto the freshly created server through the
//! registry-deploy panel.

use crate::application::pages::DeployPanel;
use crate::config::Timeouts;
use crate::domain::ports::driver::{BrowserDriver, DriverResult};
use crate::domain::provision::{DeploymentSpec, ServerSpec};

/// Drives the registry-deploy panel for one server.
pub struct DeploymentFlow {
    timeouts: Timeouts,
}

impl DeploymentFlow {
    pub fn new(timeouts: Timeouts) -> Self {
        Self { timeouts }
    }

    /// Open the panel for the server, configure image and environment,
    /// apply, deploy, and wait for the panel to settle.
    pub fn deploy<D: BrowserDriver>(
        &self,
        driver: &mut D,
        server: &ServerSpec,
        spec: &DeploymentSpec,
    ) -> DriverResult<()> {
        let mut panel = DeployPanel::open_for_server(driver, &server.name)?;
        panel.configure(spec)?;
        panel.launch()?;
        panel.wait_settled(self.timeouts.action())
    }
}
