//! JSON Cookie Store
//!
//! Persists the browser session as a Playwright-shaped JSON array so a
//! saved file can be injected straight back into a fresh browser context.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::{CookieStore, CookieStoreError, CookieStoreResult};
use crate::domain::Cookie;

/// Cookie store backed by a single JSON file.
///
/// The file holds a flat array of cookie objects with camelCase keys.
/// Saves replace the whole file; there is no merging.
pub struct JsonCookieStore {
    path: PathBuf,
}

impl JsonCookieStore {
    /// Create a store at the given path, expanding a leading `~`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: expand_home(&path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn write_atomic(&self, cookies: &[Cookie]) -> CookieStoreResult<()> {
        let json = serde_json::to_string_pretty(cookies)
            .map_err(|e| CookieStoreError::Io(std::io::Error::other(e)))?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Atomic write: temp file + rename, so a crash mid-save never
        // leaves a truncated store behind.
        let temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.as_file().write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)
            .map_err(|e| CookieStoreError::Io(e.error))?;
        Ok(())
    }
}

impl CookieStore for JsonCookieStore {
    fn load(&self) -> CookieStoreResult<Option<Vec<Cookie>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let cookies: Vec<Cookie> =
            serde_json::from_str(&content).map_err(|e| CookieStoreError::Corrupt(e.to_string()))?;
        Ok(Some(cookies))
    }

    fn save(&self, cookies: &[Cookie]) -> CookieStoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_file = fs::File::create(self.lock_path())?;
        lock_file
            .lock_exclusive()
            .map_err(|e| CookieStoreError::Lock(e.to_string()))?;

        let result = self.write_atomic(cookies);

        let _ = lock_file.unlock();
        result
    }
}

/// Expand ~ to the actual home directory
fn expand_home(path: &Path) -> PathBuf {
    let path_str = path.display().to_string();
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    } else if path_str == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    path.to_path_buf()
}
