//! Emulator Configuration
//!
//! The record produced by the wizard's selection phase. It is built once
//! through [`EmulatorConfigBuilder`] and is read-only afterwards.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, WizardError};

/// Smallest RAM size accepted, in MB
pub const MIN_RAM_MB: u32 = 1024;

/// Largest RAM size accepted, in MB
pub const MAX_RAM_MB: u32 = 8192;

/// Recommended RAM size shown in the prompt, in MB
pub const RECOMMENDED_RAM_MB: u32 = 4096;

/// Device type value used for hand-specified displays
pub const CUSTOM_DEVICE: &str = "custom";

/// Image flavor tags that may appear in a system image identifier
pub const FLAVOR_TAGS: &[&str] = &["google_apis", "google_apis_playstore", "default"];

/// ABI tags that may appear in a system image identifier
pub const ABI_TAGS: &[&str] = &["arm64-v8a", "x86_64"];

/// Screen resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Resolution {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = s
            .split_once('x')
            .ok_or_else(|| WizardError::InvalidConfig(format!("resolution '{}' is not WxH", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| WizardError::InvalidConfig(format!("resolution '{}' is not WxH", s)))
        };
        Ok(Self {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Display settings for a custom device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomDisplay {
    pub resolution: Resolution,
    /// Density in dpi
    pub density: u32,
}

/// Device type: a named hardware profile or a custom display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Profile(String),
    Custom(CustomDisplay),
}

impl DeviceKind {
    /// The device type as passed to the tools, or "custom"
    pub fn device_type(&self) -> &str {
        match self {
            DeviceKind::Profile(id) => id,
            DeviceKind::Custom(_) => CUSTOM_DEVICE,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, DeviceKind::Custom(_))
    }

    /// avdmanager hardware profile, if any
    pub fn profile(&self) -> Option<&str> {
        match self {
            DeviceKind::Profile(id) => Some(id),
            DeviceKind::Custom(_) => None,
        }
    }

    pub fn custom_display(&self) -> Option<&CustomDisplay> {
        match self {
            DeviceKind::Profile(_) => None,
            DeviceKind::Custom(display) => Some(display),
        }
    }
}

/// Fully resolved emulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmulatorConfig {
    name: String,
    device: DeviceKind,
    api_level: String,
    system_image: String,
    ram_mb: u32,
    has_keyboard: bool,
    extra_config: Vec<String>,
}

impl EmulatorConfig {
    pub fn builder() -> EmulatorConfigBuilder {
        EmulatorConfigBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device(&self) -> &DeviceKind {
        &self.device
    }

    pub fn device_type(&self) -> &str {
        self.device.device_type()
    }

    pub fn api_level(&self) -> &str {
        &self.api_level
    }

    /// SDK package identifier of the system image
    pub fn system_image(&self) -> &str {
        &self.system_image
    }

    pub fn ram_mb(&self) -> u32 {
        self.ram_mb
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.device.custom_display().map(|d| d.resolution)
    }

    pub fn density(&self) -> Option<u32> {
        self.device.custom_display().map(|d| d.density)
    }

    pub fn has_keyboard(&self) -> bool {
        self.has_keyboard
    }

    /// Platform-specific lines appended after the derived hardware lines
    pub fn extra_config(&self) -> &[String] {
        &self.extra_config
    }

    /// Human-readable summary, one field per line
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("========== CONFIG ==========\n");
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Device Type: {}\n", self.device_type()));
        out.push_str(&format!("API Level: {}\n", self.api_level));
        out.push_str(&format!("System Image: {}\n", self.system_image));
        out.push_str(&format!("RAM: {} MB\n", self.ram_mb));
        if let Some(display) = self.device.custom_display() {
            out.push_str(&format!("Resolution: {}\n", display.resolution));
            out.push_str(&format!("Density: {} dpi\n", display.density));
        }
        out.push_str(&format!("Has Keyboard: {}\n", self.has_keyboard));
        out.push_str("============================");
        out
    }
}

/// Builder for [`EmulatorConfig`]
#[derive(Debug, Default)]
pub struct EmulatorConfigBuilder {
    name: Option<String>,
    device: Option<DeviceKind>,
    api_level: Option<String>,
    system_image: Option<String>,
    ram_mb: Option<u32>,
    has_keyboard: bool,
    extra_config: Vec<String>,
}

impl EmulatorConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn device(mut self, device: DeviceKind) -> Self {
        self.device = Some(device);
        self
    }

    pub fn api_level(mut self, api_level: impl Into<String>) -> Self {
        self.api_level = Some(api_level.into());
        self
    }

    pub fn system_image(mut self, system_image: impl Into<String>) -> Self {
        self.system_image = Some(system_image.into());
        self
    }

    pub fn ram_mb(mut self, ram_mb: u32) -> Self {
        self.ram_mb = Some(ram_mb);
        self
    }

    pub fn has_keyboard(mut self, has_keyboard: bool) -> Self {
        self.has_keyboard = has_keyboard;
        self
    }

    pub fn extra_config(mut self, lines: Vec<String>) -> Self {
        self.extra_config = lines;
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<EmulatorConfig> {
        let missing = |field: &str| WizardError::InvalidConfig(format!("{} is required", field));

        let name = self.name.ok_or_else(|| missing("name"))?;
        if name.trim().is_empty() {
            return Err(WizardError::InvalidConfig("name must not be empty".into()));
        }
        let device = self.device.ok_or_else(|| missing("device type"))?;
        let api_level = self.api_level.ok_or_else(|| missing("API level"))?;
        if api_level.parse::<u32>().is_err() {
            return Err(WizardError::InvalidConfig(format!(
                "API level '{}' is not an integer",
                api_level
            )));
        }
        let system_image = self.system_image.ok_or_else(|| missing("system image"))?;
        validate_system_image(&system_image, &api_level)?;

        let ram_mb = self.ram_mb.ok_or_else(|| missing("RAM size"))?;
        if !(MIN_RAM_MB..=MAX_RAM_MB).contains(&ram_mb) {
            return Err(WizardError::InvalidConfig(format!(
                "RAM size {} MB outside {}-{}",
                ram_mb, MIN_RAM_MB, MAX_RAM_MB
            )));
        }

        Ok(EmulatorConfig {
            name,
            device,
            api_level,
            system_image,
            ram_mb,
            has_keyboard: self.has_keyboard,
            extra_config: self.extra_config,
        })
    }
}

/// Check `system-images;android-{api};{flavor};{abi}`
fn validate_system_image(image: &str, api_level: &str) -> Result<()> {
    let invalid = || WizardError::InvalidConfig(format!("malformed system image '{}'", image));

    let parts: Vec<&str> = image.split(';').collect();
    if parts.len() != 4 || parts[0] != "system-images" {
        return Err(invalid());
    }
    if parts[1].strip_prefix("android-") != Some(api_level) {
        return Err(invalid());
    }
    if !FLAVOR_TAGS.contains(&parts[2]) || !ABI_TAGS.contains(&parts[3]) {
        return Err(invalid());
    }
    Ok(())
}
