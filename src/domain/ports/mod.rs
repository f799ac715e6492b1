//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cookie_store;
pub mod driver;
pub mod events;

pub use cookie_store::{CookieStore, CookieStoreError, CookieStoreResult};
pub use driver::{BrowserDriver, DriverError, DriverResult, Locator, LocatorKind, WaitCondition};
pub use events::{NoopEventSink, RunEvent, RunEventSink};
