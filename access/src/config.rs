//! Access-layer configuration: landing routes and idle expiry.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessConfig {
    /// Where unauthenticated navigation is sent.
    pub login_path: String,
    /// Default authenticated landing route; target of silent role denials.
    pub dashboard_path: String,
    /// Discard a persisted session whose last activity is older than this.
    /// `None` disables idle expiry.
    pub idle_timeout_ms: Option<u64>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            idle_timeout_ms: None,
        }
    }
}

impl AccessConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, AccessError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| AccessError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_idle_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.idle_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn validate(&self) -> Result<(), AccessError> {
        for (field, path) in [("login_path", &self.login_path), ("dashboard_path", &self.dashboard_path)] {
            if !path.starts_with('/') {
                return Err(AccessError::Config(format!("{field} must start with '/': {path:?}")));
            }
        }
        if self.login_path == self.dashboard_path {
            return Err(AccessError::Config("login_path and dashboard_path must differ".into()));
        }
        if self.idle_timeout_ms == Some(0) {
            return Err(AccessError::Config("idle_timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
