//! AVD Wizard Core - shared types
//!
//! Holds the emulator configuration record, host platform description,
//! user settings and the common error type.

pub mod config;
pub mod emulator;
pub mod error;
pub mod host;
pub mod sdk_tools;

pub use config::WizardSettings;
pub use emulator::{
    CustomDisplay, DeviceKind, EmulatorConfig, EmulatorConfigBuilder, Resolution, MAX_RAM_MB,
    MIN_RAM_MB, RECOMMENDED_RAM_MB,
};
pub use error::{Result, WizardError};
pub use host::{Abi, HostOs, HostPlatform};
pub use sdk_tools::{cmdline_tool_path, find_cmdline_tool, AVDMANAGER, SDKMANAGER};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "AVD Wizard";
