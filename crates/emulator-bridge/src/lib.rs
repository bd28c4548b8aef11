//! Android Emulator Bridge
//!
//! Creates Android Virtual Devices and derives their hardware configuration.

pub mod avd;
pub mod hardware;

pub use avd::{AvdConfig, AvdError, AvdManager};
pub use hardware::{
    hardware_config_lines, platform_extra_config, APPLE_SILICON_EXTRA_CONFIG, CPU_CORES,
};
