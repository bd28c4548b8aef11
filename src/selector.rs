//! Selector
//!
//! Walks the wizard menus in order and produces an [`EmulatorConfig`]:
//! name, device type, API level, image flavor, RAM, display (custom
//! devices only) and keyboard.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use avd_wizard_android_toolchain::{resolve_system_image, ImageFlavor, SUPPORTED_API_LEVELS};
use avd_wizard_core::{
    CustomDisplay, DeviceKind, EmulatorConfig, HostPlatform, Resolution, Result, WizardError,
    WizardSettings, MAX_RAM_MB, MIN_RAM_MB, RECOMMENDED_RAM_MB,
};
use avd_wizard_emulator_bridge::platform_extra_config;

use crate::prompt::Prompter;

/// Device type menu; the last entry is the custom device
pub const DEVICE_MENU: &[&str] = &[
    "pixel_c (Pixel C Tablet)",
    "pixel_tablet (Pixel Tablet)",
    "nexus_9 (Nexus 9)",
    "custom",
];

/// Resolution menu for custom devices
pub const RESOLUTION_MENU: &[&str] = &[
    "1800x2560 (Pixel C)",
    "2560x1600 (Nexus 10)",
    "2048x1536 (iPad-like)",
    "1280x800 (Typical tablet)",
];

/// Density menu for custom devices
pub const DENSITY_MENU: &[&str] = &["320 (xhdpi)", "240 (hdpi)", "160 (mdpi)"];

/// The value part of a menu label such as `"34 (Android 14)"`
fn label_value(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}

/// Interactive selection of an emulator configuration
pub struct Selector {
    host: HostPlatform,
    default_name: String,
}

impl Selector {
    pub fn new(host: HostPlatform, settings: &WizardSettings) -> Self {
        Self {
            host,
            default_name: settings.default_name.clone(),
        }
    }

    /// Run every menu and build the configuration
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<EmulatorConfig> {
        let name = prompter.string_or_default("Enter emulator name", &self.default_name)?;

        let device_index = prompter.choose("Select device type", DEVICE_MENU)?;
        let is_custom = device_index == DEVICE_MENU.len() - 1;

        let api_labels: Vec<String> = SUPPORTED_API_LEVELS
            .iter()
            .map(|(level, release)| format!("{} ({})", level, release))
            .collect();
        let api_refs: Vec<&str> = api_labels.iter().map(String::as_str).collect();
        let api_index = prompter.choose("Select API Level", &api_refs)?;
        let api_level = SUPPORTED_API_LEVELS[api_index].0.to_string();

        let flavor_labels: Vec<&str> = ImageFlavor::all().iter().map(|f| f.label()).collect();
        let flavor_index = prompter.choose("Select system image", &flavor_labels)?;
        let flavor = ImageFlavor::from_index(flavor_index)
            .ok_or_else(|| WizardError::InvalidConfig(format!("no image flavor {}", flavor_index)))?;

        let resolved = resolve_system_image(&api_level, flavor, self.host.abi);
        if let Some(notice) = resolved.notice() {
            prompter.say(&format!("\n{}", notice))?;
        }
        let system_image = resolved.package_name();
        prompter.say(&format!("\nSelected system image: {}", system_image))?;

        let extra_config = platform_extra_config(&self.host);
        if !extra_config.is_empty() {
            prompter.say("\nConfiguring hardware acceleration for Apple Silicon...")?;
        }

        let ram_mb = prompter.int_in_range(
            &format!("\nEnter RAM size in MB (recommended: {})", RECOMMENDED_RAM_MB),
            MIN_RAM_MB,
            MAX_RAM_MB,
        )?;

        let device = if is_custom {
            DeviceKind::Custom(self.select_display(prompter)?)
        } else {
            DeviceKind::Profile(label_value(DEVICE_MENU[device_index]).to_string())
        };

        let has_keyboard = prompter.yes_no("\nEmulate hardware keyboard?")?;

        let config = EmulatorConfig::builder()
            .name(name)
            .device(device)
            .api_level(api_level)
            .system_image(system_image)
            .ram_mb(ram_mb)
            .has_keyboard(has_keyboard)
            .extra_config(extra_config)
            .build()?;

        info!("Selected {} on {}", config.name(), config.system_image());
        Ok(config)
    }

    fn select_display<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CustomDisplay> {
        let res_index = prompter.choose("Select screen resolution", RESOLUTION_MENU)?;
        let resolution: Resolution = label_value(RESOLUTION_MENU[res_index]).parse()?;

        let den_index = prompter.choose("Select screen density", DENSITY_MENU)?;
        let density = label_value(DENSITY_MENU[den_index])
            .parse::<u32>()
            .map_err(|e| WizardError::InvalidConfig(format!("density: {}", e)))?;

        debug!("Custom display {} at {} dpi", resolution, density);
        Ok(CustomDisplay {
            resolution,
            density,
        })
    }
}
