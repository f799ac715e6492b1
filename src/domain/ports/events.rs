//! Run Event Port
//!
//! Provides an observable interface for provisioning runs.
//! Enables progress reporting, NDJSON event streams, and debugging.

use crate::domain::report::StepName;

/// Event emitted during a provisioning run
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Run started for the named server and image
    RunStarted { server: String, image: String },

    /// A persisted session was injected into the browser
    SessionRestored { cookie_count: usize },

    /// The cookie store was unreadable and the run degraded to anonymous
    SessionRestoreSkipped { reason: String },

    /// The session probe decided whether we are signed in
    SessionProbed { authenticated: bool },

    /// Delegated login is being attempted for the account
    LoginStarted { username: String },

    /// Delegated login landed back on the dashboard
    LoginSucceeded,

    /// The fresh session was written to disk
    SessionSaved { cookie_count: usize },

    /// Writing the fresh session failed; the run continues without it
    SessionSaveFailed { error: String },

    /// A provisioning step began
    StepStarted { step: StepName },

    /// A provisioning step finished cleanly
    StepCompleted { step: StepName },

    /// A provisioning step failed and was skipped past
    StepFailed { step: StepName, error: String },

    /// Delete found no server to remove
    ServerAbsent,

    /// Browser teardown failed after the steps ran
    CleanupFailed { error: String },

    /// The run is over
    RunFinished { success: bool },
}

/// Trait for receiving run events
///
/// Implementations can be:
/// - ConsoleEventSink: progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: discard everything
///
/// Sinks must not panic and must not block the run; a sink that cannot
/// write should drop the event.
pub trait RunEventSink {
    fn on_event(&self, event: RunEvent);
}

/// Sink that discards all events.
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
