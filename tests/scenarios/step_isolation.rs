//! Scenario: Step Isolation
//!
//! A failing provisioning step never stops the ones after it. Every
//! step's outcome lands in the report and the caller reads the aggregate
//! off the report, not off an early return.

use slipway::config::Timeouts;
use slipway::domain::ports::RunEvent;
use slipway::domain::StepName;
use slipway::ProvisionPipeline;

use crate::common::*;

fn pipeline(
    driver: &ScriptedDriver,
    store: &MemoryCookieStore,
) -> ProvisionPipeline<ScriptedDriver, MemoryCookieStore> {
    ProvisionPipeline::new(driver.clone(), store.clone(), BASE_URL, Timeouts::default())
}

/// SCENARIO: Create-server fails, deploy still runs
///
/// The create dialog breaks at its final button. The failure is recorded
/// against create-server alone and the deploy step still drives the
/// registry panel.
#[test]
fn scenario_failing_step_does_not_stop_later_steps() {
    let driver = ScriptedDriver::new().break_matching("Create Demo Server");
    let store = MemoryCookieStore::seeded(vec![session_cookie("sid", "abc")]);
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(!report.is_success());
    assert_eq!(report.steps.len(), 3);
    assert_eq!(report.failed_steps().len(), 1);
    assert_eq!(report.failed_steps()[0].step, StepName::CreateServer);

    // The deploy step still drove the registry panel to completion.
    assert!(driver.call_index("Registry Deploy a Docker").is_some());
    assert!(driver
        .call_index("click [data-test-id=deploy-button]")
        .is_some());

    // Exactly one failure event, for the create step.
    let failures: Vec<RunEvent> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, RunEvent::StepFailed { .. }))
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(matches!(
        &failures[0],
        RunEvent::StepFailed {
            step: StepName::CreateServer,
            ..
        }
    ));
}

/// SCENARIO: Delete fails, create and deploy still run
#[test]
fn scenario_broken_delete_dialog_is_contained() {
    let driver = ScriptedDriver::new().break_matching("Unsafe Territory");
    let store = MemoryCookieStore::seeded(vec![session_cookie("sid", "abc")]);
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(!report.is_success());
    assert_eq!(report.failed_steps().len(), 1);
    assert_eq!(report.failed_steps()[0].step, StepName::DeleteServer);

    // Both later steps completed.
    assert!(sink.contains(&RunEvent::StepCompleted {
        step: StepName::CreateServer
    }));
    assert!(sink.contains(&RunEvent::StepCompleted {
        step: StepName::DeployService
    }));

    // The browser was still torn down at the end.
    assert!(driver.closed());
}

/// SCENARIO: Empty server list makes delete a no-op success
///
/// The list never renders, which is the platform's empty state. Nothing
/// destructive is attempted and the step still counts as a success.
#[test]
fn scenario_empty_server_list_makes_delete_a_no_op() {
    let driver = ScriptedDriver::new().without_element("servers-list");
    let store = MemoryCookieStore::seeded(vec![session_cookie("sid", "abc")]);
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(report.is_success());
    assert!(report.steps[0].succeeded());

    // No destructive traffic at all.
    assert!(driver.call_index("menu-expand-button").is_none());
    assert!(driver.call_index("Delete Server").is_none());
    assert!(driver.call_index("Enter command here").is_none());
    assert!(sink.contains(&RunEvent::ServerAbsent));
}

/// SCENARIO: Failed authentication still walks every step
///
/// Authentication failure degrades the run instead of aborting it; the
/// steps run against whatever session the browser has.
#[test]
fn scenario_failed_auth_still_attempts_all_steps() {
    // Probe times out and so does the post-login redirect.
    let driver = ScriptedDriver::new().with_url_waits([false, false]);
    let store = MemoryCookieStore::empty();
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(!report.is_success());
    assert!(!report.auth.is_authenticated());
    assert_eq!(report.steps.len(), 3);

    // Each step was started regardless.
    for step in StepName::SEQUENCE {
        assert!(sink.contains(&RunEvent::StepStarted { step }));
    }

    // Nothing was persisted after the failed login.
    assert_eq!(store.save_count(), 0);
}
