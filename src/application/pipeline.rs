//! Provision Pipeline
//!
//! Orchestrates one full run:
//! 1. Restore the persisted session and probe it
//! 2. Fall back to credential login, persisting fresh cookies
//! 3. Run the fixed step sequence: delete-server, create-server,
//!    deploy-service
//! 4. Close the browser, error-tolerant
//!
//! Isolation invariant: every step is individually caught; a failed step
//! is recorded and execution proceeds to the next step unconditionally.
//! The pipeline always completes and returns the full report; the caller
//! decides what the aggregate means.

use std::sync::Arc;

use crate::application::deployment::DeploymentFlow;
use crate::application::lifecycle::{DeleteOutcome, ServerLifecycle};
use crate::application::login::LoginController;
use crate::application::session::SessionManager;
use crate::config::{Config, Timeouts};
use crate::domain::credentials::Credentials;
use crate::domain::env_block::EnvBlock;
use crate::domain::ports::cookie_store::CookieStore;
use crate::domain::ports::driver::BrowserDriver;
use crate::domain::ports::events::{NoopEventSink, RunEvent, RunEventSink};
use crate::domain::provision::{DeploymentSpec, ServerSpec};
use crate::domain::report::{AuthOutcome, RunReport, StepName, StepOutcome};

/// Everything one run needs, assembled once up front.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub server: ServerSpec,
    pub deployment: DeploymentSpec,
    pub credentials: Credentials,
}

impl RunOptions {
    pub fn new(server: ServerSpec, deployment: DeploymentSpec, credentials: Credentials) -> Self {
        Self {
            server,
            deployment,
            credentials,
        }
    }

    /// Build run options from the assembled configuration.
    pub fn from_config(config: &Config) -> Self {
        let server = ServerSpec::new(config.server.name.clone(), config.server.location);
        let deployment = DeploymentSpec::new(
            config.deploy.image.clone(),
            EnvBlock::new(&config.deploy.env_vars),
        );
        Self {
            server,
            deployment,
            credentials: config.credentials.clone(),
        }
    }
}

/// Provision pipeline - orchestrates the whole run
///
/// Parameterized by its ports so tests can substitute a scripted driver
/// and an in-memory store.
pub struct ProvisionPipeline<D, S>
where
    D: BrowserDriver,
    S: CookieStore,
{
    driver: D,
    store: S,
    base_url: String,
    timeouts: Timeouts,
}

impl<D, S> ProvisionPipeline<D, S>
where
    D: BrowserDriver,
    S: CookieStore,
{
    pub fn new(driver: D, store: S, base_url: impl Into<String>, timeouts: Timeouts) -> Self {
        Self {
            driver,
            store,
            base_url: base_url.into(),
            timeouts,
        }
    }

    /// Execute the run without event reporting.
    pub fn run(&mut self, options: &RunOptions) -> RunReport {
        self.run_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the run, emitting progress events along the way.
    pub fn run_with_events(
        &mut self,
        options: &RunOptions,
        events: Arc<dyn RunEventSink>,
    ) -> RunReport {
        events.on_event(RunEvent::RunStarted {
            server: options.server.name.clone(),
            image: options.deployment.image.clone(),
        });

        let auth = self.authenticate(options, events.as_ref());
        let mut report = RunReport::new(auth);

        for step in StepName::SEQUENCE {
            events.on_event(RunEvent::StepStarted { step });
            let outcome = self.execute_step(step, options, events.as_ref());
            match &outcome.error {
                None => events.on_event(RunEvent::StepCompleted { step }),
                Some(error) => events.on_event(RunEvent::StepFailed {
                    step,
                    error: error.clone(),
                }),
            }
            report.record(outcome);
        }

        if let Err(e) = self.driver.close() {
            report.cleanup_error = Some(e.to_string());
            events.on_event(RunEvent::CleanupFailed {
                error: e.to_string(),
            });
        }

        events.on_event(RunEvent::RunFinished {
            success: report.is_success(),
        });
        report
    }

    /// Authenticate and persist the session without provisioning.
    /// Backs `slipway login`; the browser is closed before returning.
    pub fn login(&mut self, options: &RunOptions, events: Arc<dyn RunEventSink>) -> RunReport {
        let auth = self.authenticate(options, events.as_ref());
        let mut report = RunReport::new(auth);

        if let Err(e) = self.driver.close() {
            report.cleanup_error = Some(e.to_string());
            events.on_event(RunEvent::CleanupFailed {
                error: e.to_string(),
            });
        }

        events.on_event(RunEvent::RunFinished {
            success: report.is_success(),
        });
        report
    }

    /// Restore-probe-login sequence. Never aborts the run; a broken
    /// driver or a failed login comes back as `AuthOutcome::Failed`.
    fn authenticate(&mut self, options: &RunOptions, events: &dyn RunEventSink) -> AuthOutcome {
        let session = SessionManager::new(&self.store, &self.base_url, self.timeouts);

        match session.restore(&mut self.driver) {
            Ok(outcome) => {
                if let Some(reason) = outcome.warning {
                    events.on_event(RunEvent::SessionRestoreSkipped { reason });
                } else if outcome.applied > 0 {
                    events.on_event(RunEvent::SessionRestored {
                        cookie_count: outcome.applied,
                    });
                }
            }
            Err(e) => {
                return AuthOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }

        let authenticated = match session.probe(&mut self.driver) {
            Ok(authenticated) => authenticated,
            Err(e) => {
                return AuthOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        events.on_event(RunEvent::SessionProbed { authenticated });

        if authenticated {
            return AuthOutcome::CachedSession;
        }

        events.on_event(RunEvent::LoginStarted {
            username: options.credentials.username().to_string(),
        });
        let controller = LoginController::new(self.timeouts);
        if let Err(e) = controller.login(&mut self.driver, &options.credentials) {
            return AuthOutcome::Failed {
                reason: e.to_string(),
            };
        }
        events.on_event(RunEvent::LoginSucceeded);

        // Cookies are only written after a fresh login; a cached session
        // keeps the file untouched.
        match session.persist(&mut self.driver) {
            Ok(count) => events.on_event(RunEvent::SessionSaved {
                cookie_count: count,
            }),
            Err(e) => events.on_event(RunEvent::SessionSaveFailed {
                error: e.to_string(),
            }),
        }

        AuthOutcome::FreshLogin
    }

    /// Run one step, containing its error into the outcome.
    fn execute_step(
        &mut self,
        step: StepName,
        options: &RunOptions,
        events: &dyn RunEventSink,
    ) -> StepOutcome {
        let result = match step {
            StepName::DeleteServer => ServerLifecycle::new(&self.base_url, self.timeouts)
                .delete_if_exists(&mut self.driver, &options.server)
                .map(|outcome| {
                    if outcome == DeleteOutcome::Absent {
                        events.on_event(RunEvent::ServerAbsent);
                    }
                }),
            StepName::CreateServer => ServerLifecycle::new(&self.base_url, self.timeouts)
                .create_server(&mut self.driver, &options.server),
            StepName::DeployService => DeploymentFlow::new(self.timeouts).deploy(
                &mut self.driver,
                &options.server,
                &options.deployment,
            ),
        };

        match result {
            Ok(()) => StepOutcome::ok(step),
            Err(e) => StepOutcome::failed(step, e.to_string()),
        }
    }
}
