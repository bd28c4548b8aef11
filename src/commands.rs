//! Wizard command
//!
//! Glues the selection and provisioning phases together for the CLI.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use avd_wizard_android_toolchain::{EnvironmentConfig, SdkProgressCallback};
use avd_wizard_core::{HostPlatform, WizardError, WizardSettings};

use crate::prompt::Prompter;
use crate::provisioner::{ProvisionReport, Provisioner};
use crate::selector::Selector;

/// Banner printed before the first prompt
pub const BANNER: &str = "=== Android Emulator Creation Wizard ===";

/// How a wizard run ended
#[derive(Debug)]
pub enum WizardOutcome {
    /// Nothing executed; holds the JSON plan
    DryRun(String),
    Provisioned(ProvisionReport),
}

/// Create-emulator command options
pub struct WizardCommand {
    pub settings_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl WizardCommand {
    /// Execute against the real terminal, environment and host
    pub async fn execute(&self) -> Result<WizardOutcome> {
        let settings = WizardSettings::load(self.settings_path.as_deref())
            .await
            .context("Failed to load settings")?;

        let mut prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout());
        prompter.say(BANNER)?;

        let env = EnvironmentConfig::from_env(&settings)?;
        let host = HostPlatform::current();
        info!("Host platform: {:?}", host);

        let outcome = run_wizard(&settings, &env, host, &mut prompter, self.dry_run).await?;
        Ok(outcome)
    }
}

/// The single line shown to the user when the wizard fails.
///
/// A bare [`WizardError`] uses its friendly message; anything wrapped in
/// context keeps the whole chain.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WizardError>() {
        Some(wizard_err) if err.to_string() == wizard_err.to_string() => wizard_err.user_message(),
        _ => format!("{:#}", err),
    }
}

/// Run selection then provisioning with explicit inputs
pub async fn run_wizard<R: BufRead, W: Write>(
    settings: &WizardSettings,
    env: &EnvironmentConfig,
    host: HostPlatform,
    prompter: &mut Prompter<R, W>,
    dry_run: bool,
) -> std::result::Result<WizardOutcome, WizardError> {
    let config = Selector::new(host, settings).run(prompter)?;

    prompter.say(&config.summary())?;

    let mut provisioner = Provisioner::new(env);

    if dry_run {
        let plan = serde_json::to_string_pretty(&provisioner.plan(&config))
            .map_err(|e| WizardError::InvalidConfig(e.to_string()))?;
        prompter.say("\nDry run, nothing will be executed:")?;
        prompter.say(&plan)?;
        return Ok(WizardOutcome::DryRun(plan));
    }

    prompter.say("\nCreating emulator with selected configuration...")?;

    // sdkmanager output goes to the same writer as the prompts
    let mut write_error = None;
    let mut echo = |line: &str| {
        if let Err(e) = prompter.say(line) {
            write_error.get_or_insert(e);
        }
    };
    let progress: SdkProgressCallback<'_> = &mut echo;
    let provisioned = provisioner.run_with_progress(&config, Some(progress)).await;
    if let Some(e) = write_error {
        return Err(e);
    }
    let report = provisioned?;

    prompter.say("\nEmulator created successfully!")?;
    prompter.say(&format!("To start the emulator, run: {}", report.launch_hint))?;

    Ok(WizardOutcome::Provisioned(report))
}
