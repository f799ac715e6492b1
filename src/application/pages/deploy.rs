//! Registry-deploy panel for a server inside the project view.

use std::time::Duration;

use crate::domain::ports::driver::{BrowserDriver, DriverResult, Locator, WaitCondition};
use crate::domain::provision::DeploymentSpec;

const REGISTRY_DEPLOY_BUTTON: &str = "Registry Deploy a Docker";
const IMAGE_PLACEHOLDER: &str = "docker.io/username/image:tag";
const ENV_FILE_TAB: &str = "From .env file";
const ENV_PLACEHOLDER: &str = "KEY_1=VALUE_1\nKEY_2=VALUE_2\nKEY_3=VALUE_3";
const APPLY_BUTTON: &str = "Apply";
const DEPLOY_BUTTON: &str = "deploy-button";

/// Deploy-from-registry panel, opened by clicking a server's name button.
pub struct DeployPanel<'d, D: BrowserDriver> {
    driver: &'d mut D,
}

impl<'d, D: BrowserDriver> DeployPanel<'d, D> {
    /// Click the named server and open its registry-deploy panel.
    ///
    /// The server is addressed by display name; a page with another
    /// control of the same accessible name is ambiguous.
    pub fn open_for_server(driver: &'d mut D, server_name: &str) -> DriverResult<Self> {
        driver.click(&Locator::role("button", server_name))?;
        driver.click(&Locator::role("button", REGISTRY_DEPLOY_BUTTON))?;
        Ok(Self { driver })
    }

    /// Fill image reference and environment block, then apply.
    ///
    /// The env entry is switched to bulk mode first so the whole block
    /// lands in one textarea.
    pub fn configure(&mut self, spec: &DeploymentSpec) -> DriverResult<()> {
        self.driver
            .fill(&Locator::placeholder(IMAGE_PLACEHOLDER), &spec.image)?;
        self.driver.click(&Locator::role("button", ENV_FILE_TAB))?;
        self.driver
            .fill(&Locator::placeholder(ENV_PLACEHOLDER), spec.env.as_str())?;
        self.driver.click(&Locator::role("button", APPLY_BUTTON))
    }

    /// Trigger the deploy.
    pub fn launch(&mut self) -> DriverResult<()> {
        self.driver.click(&Locator::test_id(DEPLOY_BUTTON))
    }

    /// Wait until the deploy button leaves the page, i.e. the panel closed
    /// and the deploy was accepted.
    pub fn wait_settled(&mut self, budget: Duration) -> DriverResult<()> {
        let condition = WaitCondition::Gone(Locator::test_id(DEPLOY_BUTTON));
        self.driver.wait_until(&condition, budget)
    }
}
