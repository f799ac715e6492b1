//! Error types for Slipway
//!
//! Library errors use `thiserror`; the binary edge wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::login::LoginError;
use crate::domain::ports::cookie_store::CookieStoreError;
use crate::domain::ports::driver::DriverError;

/// Result type alias for Slipway operations
pub type SlipwayResult<T> = Result<T, SlipwayError>;

/// Main error type for Slipway operations
#[derive(Error, Debug)]
pub enum SlipwayError {
    /// Browser driver failure (sidecar spawn, protocol, wait timeout)
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Cookie store failure (unreadable, corrupt, locked)
    #[error(transparent)]
    CookieStore(#[from] CookieStoreError),

    /// Credential login did not reach the authenticated area
    #[error(transparent)]
    Login(#[from] LoginError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
