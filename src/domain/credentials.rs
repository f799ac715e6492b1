//! Login credentials parsed from a single combined secret.
//!
//! The platform login is delegated to GitHub, so operators provide one
//! secret of the form `"<username> <password>"`. Anything with fewer than
//! two whitespace-separated tokens degrades to anonymous credentials
//! instead of failing the run.

/// GitHub credentials for the delegated login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Parse a combined `"<username> <password>"` secret.
    ///
    /// Extra tokens beyond the first two are ignored. Fewer than two
    /// tokens yields anonymous (empty) credentials; the caller is expected
    /// to surface a warning.
    pub fn parse(combined: &str) -> Self {
        let mut tokens = combined.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(username), Some(password)) => Self {
                username: username.to_string(),
                password: password.to_string(),
            },
            _ => Self::anonymous(),
        }
    }

    /// Empty credentials, used when no usable secret was provided.
    pub fn anonymous() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
        }
    }

    /// True when parsing degraded to empty credentials.
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

// Manual Debug so the password never lands in logs or panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
