//! Common test utilities for slipway scenario tests.
//!
//! This module provides:
//! - `ScriptedDriver`: scripted browser driver recording every call
//! - `MemoryCookieStore`: shared-state in-memory cookie store
//! - `RecordingSink`: event sink capturing the emitted run events
//! - Fixtures: cookies and run options reused across scenarios

pub mod doubles;
pub mod fixtures;

pub use doubles::*;
pub use fixtures::*;
