//! Server Lifecycle Controller
//!
//! Deletes the existing server (when one is listed) and creates the new
//! one. The existence probe is deliberately coarse: any non-empty server
//! list counts as "the target exists", matching the single-server account
//! model the platform's demo tier enforces. The typed confirmation still
//! embeds the configured name, so a mismatch fails the delete loudly
//! instead of removing the wrong server.

use crate::application::pages::{ProjectPage, ServersPage};
use crate::config::Timeouts;
use crate::domain::ports::driver::{BrowserDriver, DriverResult};
use crate::domain::provision::ServerSpec;

/// What `delete_if_exists` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A server was listed and walked through the delete dialog.
    Deleted,
    /// The list was empty; deleting nothing is a success.
    Absent,
}

/// Creates and deletes servers through the platform UI.
pub struct ServerLifecycle<'a> {
    base_url: &'a str,
    timeouts: Timeouts,
}

impl<'a> ServerLifecycle<'a> {
    pub fn new(base_url: &'a str, timeouts: Timeouts) -> Self {
        Self { base_url, timeouts }
    }

    /// Delete the listed server if there is one; a bare list is a no-op.
    pub fn delete_if_exists<D: BrowserDriver>(
        &self,
        driver: &mut D,
        server: &ServerSpec,
    ) -> DriverResult<DeleteOutcome> {
        let mut page = ServersPage::open(driver, self.base_url)?;

        if !page.wait_list_rendered(self.timeouts.element())? {
            return Ok(DeleteOutcome::Absent);
        }
        if page.server_count()? == 0 {
            return Ok(DeleteOutcome::Absent);
        }

        page.delete_first_server(&server.delete_confirmation())?;
        page.wait_list_drained(self.timeouts.action())?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Create the server inside the default project and wait until it
    /// shows up.
    pub fn create_server<D: BrowserDriver>(
        &self,
        driver: &mut D,
        server: &ServerSpec,
    ) -> DriverResult<()> {
        let mut page = ProjectPage::open(driver)?;
        page.open_deploy_service_dialog()?;
        page.create_server(server)?;
        page.wait_server_listed(&server.name, self.timeouts.action())
    }
}
