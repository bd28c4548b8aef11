//! SDK Manager
//!
//! Wraps the Android SDK manager to check for and install system images.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use avd_wizard_core::{find_cmdline_tool, SDKMANAGER};

/// SDK Manager errors
#[derive(Debug, thiserror::Error)]
pub enum SdkManagerError {
    #[error("SDK not found at {0}")]
    SdkNotFound(PathBuf),
    #[error("sdkmanager not found")]
    SdkManagerNotFound,
    #[error("Command failed: {0}")]
    CommandFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives sdkmanager output lines as they arrive
pub type SdkProgressCallback<'a> = &'a mut dyn FnMut(&str);

/// Result of [`SdkManager::ensure_installed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    AlreadyInstalled,
    Installed,
}

/// Android SDK Manager wrapper
pub struct SdkManager {
    sdk_root: PathBuf,
    sdkmanager_path: PathBuf,
}

impl SdkManager {
    /// Create a new SDK manager
    pub fn new(sdk_root: PathBuf) -> Result<Self, SdkManagerError> {
        if !sdk_root.exists() {
            return Err(SdkManagerError::SdkNotFound(sdk_root));
        }

        let sdkmanager_path = Self::find_sdkmanager(&sdk_root)?;

        Ok(Self {
            sdk_root,
            sdkmanager_path,
        })
    }

    /// Find the sdkmanager executable
    fn find_sdkmanager(sdk_root: &Path) -> Result<PathBuf, SdkManagerError> {
        find_cmdline_tool(sdk_root, SDKMANAGER).ok_or(SdkManagerError::SdkManagerNotFound)
    }

    /// Create the base command with environment variables
    fn create_command(&self) -> Command {
        let mut cmd = Command::new(&self.sdkmanager_path);
        cmd.env("ANDROID_SDK_ROOT", &self.sdk_root);
        cmd.env("ANDROID_HOME", &self.sdk_root);
        cmd
    }

    /// Raw output of `sdkmanager --list_installed`
    pub async fn list_installed(&self) -> Result<String, SdkManagerError> {
        debug!("Listing installed SDK packages...");

        let output = self.create_command()
            .arg("--list_installed")
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            return Err(SdkManagerError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).to_string()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Check if a package is installed.
    ///
    /// A listing that cannot be obtained counts as "not installed".
    pub async fn is_installed(&self, package: &str) -> bool {
        match self.list_installed().await {
            Ok(listing) => listing.contains(package),
            Err(e) => {
                warn!("Could not list installed packages: {}", e);
                false
            }
        }
    }

    /// Install a single package
    pub async fn install(
        &self,
        package: &str,
        mut progress: Option<SdkProgressCallback<'_>>,
    ) -> Result<(), SdkManagerError> {
        info!("Installing SDK package: {}", package);

        let mut child = self.create_command()
            .arg("--install")
            .arg(package)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // Read output for progress
        if let Some(stdout) = child.stdout.take() {
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                debug!("sdkmanager: {}", line);
                if let Some(callback) = progress.as_deref_mut() {
                    callback(line.as_str());
                }
            }
        }

        let status = child.wait().await?;

        if !status.success() {
            return Err(SdkManagerError::CommandFailed(
                format!("Installation failed with exit code: {:?}", status.code())
            ));
        }

        info!("SDK package installed: {}", package);
        Ok(())
    }

    /// Install `package` unless it is already present
    pub async fn ensure_installed(
        &self,
        package: &str,
        progress: Option<SdkProgressCallback<'_>>,
    ) -> Result<EnsureOutcome, SdkManagerError> {
        if self.is_installed(package).await {
            info!("System image {} is already installed", package);
            return Ok(EnsureOutcome::AlreadyInstalled);
        }

        self.install(package, progress).await?;
        Ok(EnsureOutcome::Installed)
    }

    /// Get the SDK root path
    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    /// Get the sdkmanager executable path
    pub fn sdkmanager_path(&self) -> &Path {
        &self.sdkmanager_path
    }
}
