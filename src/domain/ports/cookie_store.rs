//! CookieStore port - persistence for the browser session
//!
//! Implementations:
//! - `JsonCookieStore` - Playwright-shaped JSON file (production)
//! - `MemoryCookieStore` - in-memory store for tests

use thiserror::Error;

use crate::domain::cookies::Cookie;

/// Result type for cookie store operations
pub type CookieStoreResult<T> = Result<T, CookieStoreError>;

/// Cookie persistence errors
#[derive(Error, Debug)]
pub enum CookieStoreError {
    /// The store exists but its content is not a cookie list
    #[error("cookie store is corrupt: {0}")]
    Corrupt(String),

    /// Another process holds the store lock
    #[error("cookie store is locked: {0}")]
    Lock(String),

    /// IO error reading or writing the store
    #[error("cookie store IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence boundary for session cookies.
///
/// `load` returns `None` when no session has ever been saved; a present
/// but unreadable store is an error, not an absence.
pub trait CookieStore {
    /// Load the persisted session, if one exists
    fn load(&self) -> CookieStoreResult<Option<Vec<Cookie>>>;

    /// Persist the session, replacing any previous one
    fn save(&self, cookies: &[Cookie]) -> CookieStoreResult<()>;
}
