//! Hardware Configuration
//!
//! Derives the `config.ini` lines appended to a freshly created AVD.

use avd_wizard_core::{EmulatorConfig, HostPlatform};

/// CPU core hint written for every AVD
pub const CPU_CORES: u32 = 4;

/// Extra lines for ARM64 macOS hosts, enabling the Hypervisor.framework backend
pub const APPLE_SILICON_EXTRA_CONFIG: [&str; 10] = [
    "hw.cpu.ncore=4",
    "hw.ramSize=4096",
    "hw.lcd.density=320",
    "hw.gpu.enabled=yes",
    "hw.gpu.mode=auto",
    "hw.keyboard=yes",
    "hw.cpu.arch=arm64",
    "hw.cpu.model=cortex-a57",
    "hw.hypervisorDriver=hvf",
    "hw.useextension=on",
];

/// Platform-specific lines for `host`; empty unless ARM64 macOS
pub fn platform_extra_config(host: &HostPlatform) -> Vec<String> {
    if host.is_apple_silicon() {
        APPLE_SILICON_EXTRA_CONFIG.iter().map(|l| l.to_string()).collect()
    } else {
        Vec::new()
    }
}

/// All lines to append for `config`, in write order
pub fn hardware_config_lines(config: &EmulatorConfig) -> Vec<String> {
    let mut lines = vec![
        format!("hw.ramSize={}", config.ram_mb()),
        format!("hw.cpu.ncore={}", CPU_CORES),
        format!("hw.keyboard={}", config.has_keyboard()),
        "hw.gpu.enabled=yes".to_string(),
        "hw.gpu.mode=auto".to_string(),
    ];

    if let Some(display) = config.device().custom_display() {
        lines.push(format!("hw.lcd.width={}", display.resolution.width));
        lines.push(format!("hw.lcd.height={}", display.resolution.height));
        lines.push(format!("hw.lcd.density={}", display.density));
    }

    lines.extend(config.extra_config().iter().cloned());
    lines
}
