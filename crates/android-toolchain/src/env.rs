//! Environment
//!
//! Resolves the SDK root and AVD home from environment variables and user
//! settings. The variable lookup is injected so callers and tests control it.

use std::path::PathBuf;

use tracing::debug;

use avd_wizard_core::{Result, WizardError, WizardSettings};

/// Optional override for the AVD home directory
pub const AVD_HOME_ENV_VAR: &str = "ANDROID_AVD_HOME";

/// Resolved environment for one wizard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// ANDROID_HOME (or the variable named in settings)
    pub android_home: PathBuf,
    /// Directory holding `<name>.ini` and `<name>.avd/`
    pub avd_home: PathBuf,
}

impl EnvironmentConfig {
    /// Resolve from the process environment
    pub fn from_env(settings: &WizardSettings) -> Result<Self> {
        Self::from_lookup(settings, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for environment variables.
    ///
    /// The SDK root variable is required; an empty value counts as unset.
    pub fn from_lookup<F>(settings: &WizardSettings, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let android_home = lookup(settings.sdk_env_var.as_str())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| WizardError::MissingEnv(settings.sdk_env_var.clone()))?;

        let avd_home = settings
            .avd_home
            .clone()
            .or_else(|| lookup(AVD_HOME_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_avd_home);

        debug!("SDK root {:?}, AVD home {:?}", android_home, avd_home);

        Ok(Self {
            android_home,
            avd_home,
        })
    }
}

/// `~/.android/avd`
fn default_avd_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".android")
        .join("avd")
}
