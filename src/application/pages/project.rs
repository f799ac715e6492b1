//! Default project view and its create-server dialog.

use std::time::Duration;

use crate::domain::ports::driver::{
    BrowserDriver, DriverError, DriverResult, Locator, WaitCondition,
};
use crate::domain::provision::ServerSpec;

const PROJECTS_SIDEBAR_LINK: &str = "sidebar-projects-link";
const DEFAULT_PROJECT_LINK: &str = "Default project";
const EMPTY_LIST: &str = "empty-list";
const DEPLOY_SERVICE_BUTTON: &str = "Deploy Service";
const CREATE_SERVER_BUTTON: &str = "Create Server";
const LOCATION_DROPDOWN: &str = "#location-dropdown-invoke";
const SERVER_NAME_PLACEHOLDER: &str = "My awesome Server";
const CREATE_DEMO_SERVER_BUTTON: &str = "Create Demo Server";

/// The default project's service view, entered from the sidebar.
pub struct ProjectPage<'d, D: BrowserDriver> {
    driver: &'d mut D,
}

impl<'d, D: BrowserDriver> ProjectPage<'d, D> {
    /// Open the projects sidebar and enter the default project.
    pub fn open(driver: &'d mut D) -> DriverResult<Self> {
        driver.click(&Locator::test_id(PROJECTS_SIDEBAR_LINK))?;
        driver.click(&Locator::role("link", DEFAULT_PROJECT_LINK))?;
        Ok(Self { driver })
    }

    /// Open the deploy-service dialog.
    ///
    /// A fresh project renders the button inside its empty-list
    /// placeholder; once services exist it moves to page level. Try the
    /// placeholder first, fall back to the page-level button.
    pub fn open_deploy_service_dialog(&mut self) -> DriverResult<()> {
        let scoped =
            Locator::role("button", DEPLOY_SERVICE_BUTTON).within(Locator::test_id(EMPTY_LIST));
        match self.driver.click(&scoped) {
            Ok(()) => Ok(()),
            Err(DriverError::NotFound(_)) => self
                .driver
                .click(&Locator::role("button", DEPLOY_SERVICE_BUTTON)),
            Err(e) => Err(e),
        }
    }

    /// Drive the create-server dialog: location, name, confirm.
    pub fn create_server(&mut self, spec: &ServerSpec) -> DriverResult<()> {
        self.driver
            .click(&Locator::role("button", CREATE_SERVER_BUTTON))?;
        self.driver.click(&Locator::css(LOCATION_DROPDOWN))?;
        self.driver
            .click(&Locator::role("button", spec.location.select_label()))?;
        self.driver
            .fill(&Locator::placeholder(SERVER_NAME_PLACEHOLDER), &spec.name)?;
        self.driver
            .click(&Locator::role("button", CREATE_DEMO_SERVER_BUTTON))
    }

    /// Wait until the new server's button shows up in the project view.
    pub fn wait_server_listed(&mut self, name: &str, budget: Duration) -> DriverResult<()> {
        let condition = WaitCondition::Visible(Locator::role("button", name));
        self.driver.wait_until(&condition, budget)
    }
}
