//! Browser Driver Implementation
//!
//! Talks to a Playwright sidecar process over a line-oriented JSON
//! protocol. `protocol` defines the wire shapes, `playwright` owns the
//! child process and implements the BrowserDriver port.

mod playwright;
mod protocol;

pub use playwright::PlaywrightDriver;
