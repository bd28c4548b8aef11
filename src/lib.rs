//! AVD Wizard
//!
//! Interactive creation of Android Virtual Devices.
//!
//! ## Flow
//!
//! 1. **Selection**: numbered menus collect the device type, API level,
//!    image flavor, RAM, display and keyboard into an `EmulatorConfig`.
//! 2. **Provisioning**: `sdkmanager` installs the system image if needed,
//!    `avdmanager` creates the AVD, and hardware lines are appended to its
//!    `config.ini`.
//!
//! ## Architecture
//!
//! - `avd-wizard-core`: configuration record, host platform, settings, errors
//! - `avd-wizard-android-toolchain`: environment, sdkmanager, system images
//! - `avd-wizard-emulator-bridge`: avdmanager and `config.ini` handling

#![warn(clippy::all)]

pub mod commands;
pub mod prompt;
pub mod provisioner;
pub mod selector;

// Re-export main components for library usage
pub use avd_wizard_android_toolchain as toolchain;
pub use avd_wizard_core as wizard_core;
pub use avd_wizard_emulator_bridge as emulator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::{run_wizard, WizardCommand, WizardOutcome};
    pub use crate::prompt::Prompter;
    pub use crate::provisioner::{ProvisionError, ProvisionStage, Provisioner};
    pub use crate::selector::Selector;
    pub use avd_wizard_android_toolchain::{EnvironmentConfig, SdkManager};
    pub use avd_wizard_core::{EmulatorConfig, HostPlatform, WizardSettings};
    pub use avd_wizard_emulator_bridge::AvdManager;
}
