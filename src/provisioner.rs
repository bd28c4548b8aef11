//! Provisioner
//!
//! Turns an [`EmulatorConfig`] into an AVD on disk in three ordered steps:
//! make sure the system image is installed, create the AVD, then append the
//! hardware lines to its `config.ini`. The first failing step stops the run
//! and nothing written before it is rolled back.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use avd_wizard_android_toolchain::{
    EnsureOutcome, EnvironmentConfig, SdkManager, SdkManagerError, SdkProgressCallback,
};
use avd_wizard_core::{cmdline_tool_path, EmulatorConfig, WizardError, SDKMANAGER};
use avd_wizard_emulator_bridge::{hardware_config_lines, AvdConfig, AvdError, AvdManager};

/// Provisioning progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionStage {
    Idle,
    ImageInstalling,
    DeviceCreating,
    ConfigWriting,
    Done,
    Failed(String),
}

/// Provisioning failure, tagged with the step that failed
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("failed to install system image: {0}")]
    ImageInstall(#[source] SdkManagerError),
    #[error("failed to create AVD: {0}")]
    DeviceCreate(#[source] AvdError),
    #[error("failed to write config: {0}")]
    ConfigWrite(#[source] AvdError),
}

impl From<ProvisionError> for WizardError {
    fn from(err: ProvisionError) -> Self {
        WizardError::Provision(err.to_string())
    }
}

/// What a successful run did
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    pub image: EnsureOutcome,
    pub config_path: PathBuf,
    pub lines_written: usize,
    pub launch_hint: String,
}

/// Commands and file edits a run would perform
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionPlan<'a> {
    pub config: &'a EmulatorConfig,
    pub install_command: Vec<String>,
    pub create_command: Vec<String>,
    pub config_path: PathBuf,
    pub config_lines: Vec<String>,
}

/// Runs the provisioning steps for one configuration
pub struct Provisioner {
    sdk_root: PathBuf,
    avd: AvdManager,
    stage: ProvisionStage,
}

impl Provisioner {
    pub fn new(env: &EnvironmentConfig) -> Self {
        Self {
            sdk_root: env.android_home.clone(),
            avd: AvdManager::new(env.android_home.clone(), env.avd_home.clone()),
            stage: ProvisionStage::Idle,
        }
    }

    pub fn stage(&self) -> &ProvisionStage {
        &self.stage
    }

    fn enter(&mut self, stage: ProvisionStage) {
        debug!("Provisioning stage {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    fn fail(&mut self, err: ProvisionError) -> ProvisionError {
        debug!("Provisioning failed: {}", err);
        self.enter(ProvisionStage::Failed(err.to_string()));
        err
    }

    fn avd_config(config: &EmulatorConfig) -> AvdConfig {
        AvdConfig::new(config.name(), config.system_image(), config.device().profile())
    }

    /// Describe the run without executing anything
    pub fn plan<'a>(&self, config: &'a EmulatorConfig) -> ProvisionPlan<'a> {
        let mut create_command = vec![self.avd.avdmanager_path().display().to_string()];
        create_command.extend(Self::avd_config(config).args());

        let sdkmanager = cmdline_tool_path(&self.sdk_root, SDKMANAGER);

        ProvisionPlan {
            config,
            install_command: vec![
                sdkmanager.display().to_string(),
                "--install".to_string(),
                config.system_image().to_string(),
            ],
            create_command,
            config_path: self.avd.config_path(config.name()),
            config_lines: hardware_config_lines(config),
        }
    }

    /// Run all steps
    pub async fn run(&mut self, config: &EmulatorConfig) -> Result<ProvisionReport, ProvisionError> {
        self.run_with_progress(config, None).await
    }

    /// Run all steps, handing sdkmanager output lines to `progress`
    pub async fn run_with_progress(
        &mut self,
        config: &EmulatorConfig,
        progress: Option<SdkProgressCallback<'_>>,
    ) -> Result<ProvisionReport, ProvisionError> {
        self.enter(ProvisionStage::ImageInstalling);
        let ensured = self.ensure_image(config, progress).await;
        let image = match ensured {
            Ok(outcome) => outcome,
            Err(e) => return Err(self.fail(ProvisionError::ImageInstall(e))),
        };

        self.enter(ProvisionStage::DeviceCreating);
        let created = self.avd.create_avd(&Self::avd_config(config)).await;
        if let Err(e) = created {
            return Err(self.fail(ProvisionError::DeviceCreate(e)));
        }

        self.enter(ProvisionStage::ConfigWriting);
        let lines = hardware_config_lines(config);
        let written = self.avd.append_config(config.name(), &lines).await;
        if let Err(e) = written {
            return Err(self.fail(ProvisionError::ConfigWrite(e)));
        }

        if let Ok(values) = self.avd.read_config(config.name()).await {
            let mut hw: Vec<_> = values.iter().filter(|(k, _)| k.starts_with("hw.")).collect();
            hw.sort();
            debug!("Effective hardware settings: {:?}", hw);
        }

        self.enter(ProvisionStage::Done);
        info!("Emulator {} provisioned", config.name());

        Ok(ProvisionReport {
            image,
            config_path: self.avd.config_path(config.name()),
            lines_written: lines.len(),
            launch_hint: self.avd.launch_hint(config.name()),
        })
    }

    async fn ensure_image(
        &self,
        config: &EmulatorConfig,
        progress: Option<SdkProgressCallback<'_>>,
    ) -> Result<EnsureOutcome, SdkManagerError> {
        let sdk = SdkManager::new(self.sdk_root.clone())?;
        sdk.ensure_installed(config.system_image(), progress).await
    }
}
