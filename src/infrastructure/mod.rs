//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `driver/` - Playwright sidecar process (BrowserDriver port)
//! - `cookie_store` - JSON file session persistence (CookieStore port)
//! - `events/` - Run event sinks (console progress, NDJSON)

pub mod cookie_store;
pub mod driver;
pub mod events;

// Re-export for convenience
pub use cookie_store::JsonCookieStore;
pub use driver::PlaywrightDriver;
pub use events::{ConsoleEventSink, JsonEventSink};
