//! Stack behaviour knobs, loadable from JSON or the environment.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

pub const CLOSE_POLICY_VAR: &str = "SCREENSTACK_CLOSE_POLICY";
pub const DUPLICATE_IDS_VAR: &str = "SCREENSTACK_DUPLICATE_IDS";

/// What `close` does with the navigation history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosePolicy {
    /// Hide the stack but keep screens and index, so `reopen` can resume.
    #[default]
    Retain,
    /// Drop every screen on close.
    Clear,
}

/// How `push_screen` treats an id that is already somewhere in the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    Allow,
    /// Accept the push and log a warning.
    #[default]
    Warn,
    Reject,
}

impl FromStr for ClosePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(ClosePolicy::Retain),
            "clear" => Ok(ClosePolicy::Clear),
            _ => Err(ConfigError::InvalidValue {
                var: CLOSE_POLICY_VAR,
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for DuplicateIdPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(DuplicateIdPolicy::Allow),
            "warn" => Ok(DuplicateIdPolicy::Warn),
            "reject" => Ok(DuplicateIdPolicy::Reject),
            _ => Err(ConfigError::InvalidValue {
                var: DUPLICATE_IDS_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub close_policy: ClosePolicy,
    pub duplicate_ids: DuplicateIdPolicy,
}

impl StackConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SCREENSTACK_CLOSE_POLICY`: `retain` (default) or `clear`
    /// - `SCREENSTACK_DUPLICATE_IDS`: `allow`, `warn` (default) or `reject`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply any environment variables that are set on top of `self`.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(value) = std::env::var(CLOSE_POLICY_VAR) {
            self.close_policy = value.parse()?;
        }
        if let Ok(value) = std::env::var(DUPLICATE_IDS_VAR) {
            self.duplicate_ids = value.parse()?;
        }
        Ok(self)
    }
}
