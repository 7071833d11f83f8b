/// Runtime configuration resolved from the environment.
use std::time::Duration;

use crate::esv::{BUILD_OPTIONS, EsvError, PassageOptions};

/// Holds the API token.
pub const API_KEY_VAR: &str = "ESV_API_KEY";
/// Optional override for the endpoint.
pub const API_URL_VAR: &str = "ESV_API_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.esv.org/v3/passage/text/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the lookup needs besides the reference itself.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub options: PassageOptions,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `EsvError::MissingApiKey` if `ESV_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, EsvError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `EsvError::MissingApiKey` if the key is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EsvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(API_KEY_VAR).ok_or(EsvError::MissingApiKey { var: API_KEY_VAR })?;
        let base_url = non_blank(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Ok(Self {
            api_key: api_key.trim().to_owned(),
            base_url,
            timeout: REQUEST_TIMEOUT,
            options: BUILD_OPTIONS,
        })
    }
}

// The token stays out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("options", &self.options)
            .finish()
    }
}
