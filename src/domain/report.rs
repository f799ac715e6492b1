//! Typed outcome of a provisioning run.
//!
//! Every step failure is contained and recorded here; the caller decides
//! what the aggregate means (exit code, summary rendering). Nothing in
//! this module is persisted.

use serde::Serialize;

/// The fixed provisioning steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepName {
    DeleteServer,
    CreateServer,
    DeployService,
}

impl StepName {
    /// All steps in the order the pipeline runs them.
    pub const SEQUENCE: [StepName; 3] = [
        StepName::DeleteServer,
        StepName::CreateServer,
        StepName::DeployService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::DeleteServer => "delete-server",
            StepName::CreateServer => "create-server",
            StepName::DeployService => "deploy-service",
        }
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one step, success or the contained error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: StepName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepOutcome {
    pub fn ok(step: StepName) -> Self {
        Self { step, error: None }
    }

    pub fn failed(step: StepName, error: impl Into<String>) -> Self {
        Self {
            step,
            error: Some(error.into()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// How the run ended up authenticated (or didn't).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum AuthOutcome {
    /// Persisted cookies passed the validity probe.
    CachedSession,
    /// Credential login succeeded and cookies were persisted.
    FreshLogin,
    /// Neither cached session nor login produced an authenticated state.
    Failed { reason: String },
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, AuthOutcome::Failed { .. })
    }
}

/// Aggregate of one full run: authentication, per-step outcomes, cleanup.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub auth: AuthOutcome,
    pub steps: Vec<StepOutcome>,
    /// Browser close failure, reported but never fatal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_error: Option<String>,
}

impl RunReport {
    pub fn new(auth: AuthOutcome) -> Self {
        Self {
            auth,
            steps: Vec::new(),
            cleanup_error: None,
        }
    }

    pub fn record(&mut self, outcome: StepOutcome) {
        self.steps.push(outcome);
    }

    /// Steps that failed, in execution order.
    pub fn failed_steps(&self) -> Vec<&StepOutcome> {
        self.steps.iter().filter(|s| !s.succeeded()).collect()
    }

    /// A run succeeds when it authenticated and every step passed.
    /// Cleanup trouble alone never fails a run.
    pub fn is_success(&self) -> bool {
        self.auth.is_authenticated() && self.steps.iter().all(StepOutcome::succeeded)
    }
}
