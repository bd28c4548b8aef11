//! AVD (Android Virtual Device) Manager
//!
//! Creates AVDs through avdmanager and edits their `config.ini`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use configparser::ini::Ini;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use avd_wizard_core::{cmdline_tool_path, AVDMANAGER};

/// AVD Manager errors
#[derive(Debug, thiserror::Error)]
pub enum AvdError {
    #[error("AVD Manager not found. Is Android SDK installed?")]
    ManagerNotFound,
    #[error("Failed to create AVD: {0}")]
    CreateFailed(String),
    #[error("Failed to open config file {path}: {source}")]
    ConfigOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write config: {0}")]
    ConfigWrite(std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// AVD configuration for creation
#[derive(Debug, Clone)]
pub struct AvdConfig {
    pub name: String,
    pub package: String, // system image package
    pub device: Option<String>, // device profile
    pub force: bool,
}

impl AvdConfig {
    /// Create a config that replaces any AVD of the same name
    pub fn new(name: &str, package: &str, device: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            package: package.to_string(),
            device: device.map(str::to_string),
            force: true,
        }
    }

    /// avdmanager arguments, passed without a shell
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "create".to_string(),
            "avd".to_string(),
            "--name".to_string(),
            self.name.clone(),
            "--package".to_string(),
            self.package.clone(),
        ];

        if let Some(ref device) = self.device {
            args.push("--device".to_string());
            args.push(device.clone());
        }

        if self.force {
            args.push("--force".to_string());
        }

        args
    }
}

/// AVD Manager
pub struct AvdManager {
    sdk_path: PathBuf,
    avd_home: PathBuf,
}

impl AvdManager {
    /// Create a new AVD manager
    pub fn new(sdk_path: PathBuf, avd_home: PathBuf) -> Self {
        Self { sdk_path, avd_home }
    }

    /// Get avdmanager path, located like sdkmanager
    pub fn avdmanager_path(&self) -> PathBuf {
        cmdline_tool_path(&self.sdk_path, AVDMANAGER)
    }

    pub fn avd_home(&self) -> &Path {
        &self.avd_home
    }

    /// Path of the AVD's `config.ini`
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.avd_home.join(format!("{}.avd", name)).join("config.ini")
    }

    /// Command line that boots the AVD
    pub fn launch_hint(&self, name: &str) -> String {
        format!("{}/emulator/emulator -avd {}", self.sdk_path.display(), name)
    }

    /// Create a new AVD
    pub async fn create_avd(&self, config: &AvdConfig) -> Result<(), AvdError> {
        let avdmanager = self.avdmanager_path();

        if !avdmanager.exists() {
            return Err(AvdError::ManagerNotFound);
        }

        info!("Creating AVD: {}", config.name);
        debug!("Running command: {:?} {}", avdmanager, config.args().join(" "));

        let mut child = Command::new(&avdmanager)
            .args(config.args())
            .env("ANDROID_AVD_HOME", &self.avd_home)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        // Answer "no" to the custom hardware profile question
        if let Some(mut stdin) = child.stdin.take() {
            // The tool may exit without reading its input
            if let Err(e) = stdin.write_all(b"no\n").await {
                debug!("avdmanager closed stdin early: {}", e);
            }
        }

        let status = child.wait().await?;

        if !status.success() {
            return Err(AvdError::CreateFailed(format!(
                "avdmanager exited with code {:?}",
                status.code()
            )));
        }

        info!("AVD created successfully: {}", config.name);
        Ok(())
    }

    /// Append `key=value` lines to the AVD's existing `config.ini`.
    ///
    /// Lines already written stay in place if a later write fails.
    pub async fn append_config(&self, name: &str, lines: &[String]) -> Result<(), AvdError> {
        let path = self.config_path(name);

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .await
            .map_err(|source| AvdError::ConfigOpen {
                path: path.clone(),
                source,
            })?;

        for line in lines {
            debug!("config.ini += {}", line);
            file.write_all(format!("{}\n", line).as_bytes())
                .await
                .map_err(AvdError::ConfigWrite)?;
        }
        file.flush().await.map_err(AvdError::ConfigWrite)?;

        info!("Wrote {} lines to {:?}", lines.len(), path);
        Ok(())
    }

    /// Read the AVD's `config.ini`; for repeated keys the last value wins
    pub async fn read_config(&self, name: &str) -> Result<HashMap<String, String>, AvdError> {
        let content = tokio::fs::read_to_string(self.config_path(name)).await?;
        let mut ini = Ini::new_cs();
        let sections = ini.read(content).map_err(AvdError::Parse)?;

        Ok(sections
            .get("default")
            .map(|section| {
                section
                    .iter()
                    .filter_map(|(k, v)| v.clone().map(|v| (k.clone(), v)))
                    .collect()
            })
            .unwrap_or_default())
    }
}
