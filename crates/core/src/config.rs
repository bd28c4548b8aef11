//! Wizard Settings
//!
//! Optional user settings read from a TOML file:
//! - default emulator name offered by the name prompt
//! - AVD home override
//! - name of the environment variable holding the SDK root

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, WizardError};

/// Default emulator name
pub const DEFAULT_EMULATOR_NAME: &str = "Tablet_Emulator";

/// Default environment variable for the SDK root
pub const DEFAULT_SDK_ENV_VAR: &str = "ANDROID_HOME";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    /// Name offered when the user just presses enter
    pub default_name: String,
    /// Directory holding `<name>.avd` folders
    pub avd_home: Option<PathBuf>,
    /// Environment variable that points at the SDK root
    pub sdk_env_var: String,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_EMULATOR_NAME.to_string(),
            avd_home: None,
            sdk_env_var: DEFAULT_SDK_ENV_VAR.to_string(),
        }
    }
}

impl WizardSettings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "avd-wizard").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the default settings file path
    pub fn settings_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(SETTINGS_FILE))
    }

    /// Load settings from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to built-in defaults.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(WizardError::Settings(format!(
                        "settings file {} not found",
                        path.display()
                    )));
                }
                Self::load_from(path).await
            }
            None => match Self::settings_file() {
                Some(file) if file.exists() => Self::load_from(&file).await,
                _ => {
                    info!("Settings file not found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    async fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading settings from {:?}", path);
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&contents)
    }

    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: WizardSettings = toml::from_str(contents)?;
        if settings.default_name.trim().is_empty() {
            return Err(WizardError::Settings("default_name must not be empty".into()));
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = WizardSettings::default();
        assert_eq!(settings.default_name, "Tablet_Emulator");
        assert_eq!(settings.sdk_env_var, "ANDROID_HOME");
        assert!(settings.avd_home.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = WizardSettings::from_toml("avd_home = \"/tmp/avds\"\n").unwrap();
        assert_eq!(settings.avd_home, Some(PathBuf::from("/tmp/avds")));
        assert_eq!(settings.default_name, DEFAULT_EMULATOR_NAME);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            WizardSettings::from_toml("default_name = ["),
            Err(WizardError::TomlParse(_))
        ));
        assert!(matches!(
            WizardSettings::from_toml("default_name = \"  \""),
            Err(WizardError::Settings(_))
        ));
    }

    #[tokio::test]
    async fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        tokio::fs::write(&path, "default_name = \"Phone\"\n").await.unwrap();

        let settings = WizardSettings::load(Some(&path)).await.unwrap();
        assert_eq!(settings.default_name, "Phone");

        let missing = dir.path().join("missing.toml");
        assert!(WizardSettings::load(Some(&missing)).await.is_err());
    }
}
