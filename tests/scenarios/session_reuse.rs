//! Scenario: Session Reuse
//!
//! Journey: Repeated runs on the same machine should pay the login cost
//! only once. Saved cookies that still probe as signed in skip the
//! delegated login entirely; a rejected session falls back to
//! credentials and the fresh cookies replace the stored ones.

use slipway::config::Timeouts;
use slipway::domain::ports::RunEvent;
use slipway::domain::AuthOutcome;
use slipway::ProvisionPipeline;

use crate::common::*;

fn pipeline(
    driver: &ScriptedDriver,
    store: &MemoryCookieStore,
) -> ProvisionPipeline<ScriptedDriver, MemoryCookieStore> {
    ProvisionPipeline::new(driver.clone(), store.clone(), BASE_URL, Timeouts::default())
}

/// SCENARIO: Valid saved session
///
/// With stored cookies that still probe as signed in, no login form
/// traffic happens and the cookie file stays untouched.
#[test]
fn scenario_valid_saved_session_skips_login() {
    let driver = ScriptedDriver::new();
    let store = MemoryCookieStore::seeded(vec![session_cookie("sid", "abc")]);
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(
        report.is_success(),
        "run should succeed, failed steps: {:?}",
        report.failed_steps()
    );
    assert_eq!(report.auth, AuthOutcome::CachedSession);

    // The stored session went into the browser.
    assert_eq!(driver.injected_cookies().len(), 1);

    // No login form traffic at all.
    assert!(driver.call_index("Login With Github").is_none());
    assert!(driver.call_index("Username or email address").is_none());

    // The store was not rewritten.
    assert_eq!(store.save_count(), 0);
    assert!(sink.contains(&RunEvent::SessionProbed {
        authenticated: true
    }));
}

/// SCENARIO: Rejected saved session
///
/// The probe times out, the delegated login runs, and the stored session
/// is replaced with exactly the cookies the browser reports.
#[test]
fn scenario_rejected_session_falls_back_to_login() {
    let fresh = vec![session_cookie("sid", "fresh"), session_cookie("csrf", "tok")];
    let driver = ScriptedDriver::new()
        .with_url_waits([false, true])
        .with_browser_cookies(fresh.clone());
    let store = MemoryCookieStore::seeded(vec![session_cookie("sid", "stale")]);
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(report.is_success());
    assert_eq!(report.auth, AuthOutcome::FreshLogin);

    // The delegated form was driven with the configured account.
    assert!(driver.call_index("Login With Github").is_some());
    assert!(driver
        .call_index("fill label \"Username or email address\" = octocat")
        .is_some());
    assert!(driver
        .call_index("click button[name=\"Sign in\" exact]")
        .is_some());

    // The stored session now matches the browser's cookies exactly.
    assert_eq!(store.saved().unwrap(), fresh);
    assert_eq!(store.save_count(), 1);
    assert!(sink.contains(&RunEvent::LoginSucceeded));
    assert!(sink.contains(&RunEvent::SessionSaved { cookie_count: 2 }));
}

/// SCENARIO: Expired cookies are pruned before injection
#[test]
fn scenario_expired_cookies_are_pruned_before_injection() {
    let driver = ScriptedDriver::new();
    let store = MemoryCookieStore::seeded(vec![
        expired_cookie("old_sid"),
        session_cookie("keep", "v"),
    ]);
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(report.is_success());
    let injected = driver.injected_cookies();
    assert_eq!(injected.len(), 1);
    assert_eq!(injected[0].name, "keep");
    assert!(sink.contains(&RunEvent::SessionRestored { cookie_count: 1 }));
}

/// SCENARIO: Corrupt cookie store degrades to an anonymous start
///
/// An unreadable store is surfaced as a warning, never an abort; the run
/// simply proceeds to the login fallback.
#[test]
fn scenario_corrupt_store_degrades_to_login() {
    let driver = ScriptedDriver::new()
        .with_url_waits([false, true])
        .with_browser_cookies(vec![session_cookie("sid", "new")]);
    let store = MemoryCookieStore::corrupt();
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).run_with_events(&demo_options(), sink.clone());

    assert!(report.is_success());
    assert_eq!(report.auth, AuthOutcome::FreshLogin);

    let skipped = sink
        .events()
        .into_iter()
        .find_map(|e| match e {
            RunEvent::SessionRestoreSkipped { reason } => Some(reason),
            _ => None,
        })
        .expect("restore skip should be reported");
    assert!(skipped.contains("corrupt"), "unexpected reason: {}", skipped);

    // Nothing was injected into the browser.
    assert!(driver.injected_cookies().is_empty());
}

/// SCENARIO: Login-only entry point persists the session and stops
#[test]
fn scenario_login_command_persists_without_provisioning() {
    let fresh = vec![session_cookie("sid", "fresh")];
    let driver = ScriptedDriver::new()
        .with_url_waits([false, true])
        .with_browser_cookies(fresh.clone());
    let store = MemoryCookieStore::empty();
    let sink = RecordingSink::new();

    let report = pipeline(&driver, &store).login(&demo_options(), sink.clone());

    assert!(report.is_success());
    assert_eq!(report.auth, AuthOutcome::FreshLogin);
    assert!(report.steps.is_empty());
    assert_eq!(store.saved().unwrap(), fresh);

    // No provisioning traffic, and the browser was shut down.
    assert!(driver.call_index("sidebar-servers-link").is_none());
    assert!(driver.call_index("Registry Deploy a Docker").is_none());
    assert!(driver.closed());
    assert!(sink.contains(&RunEvent::RunFinished { success: true }));
}
