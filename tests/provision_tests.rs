//! Provisioning against fake SDK tools

#![cfg(unix)]

mod common;

use avd_wizard::prelude::*;
use avd_wizard::provisioner::ProvisionReport;
use avd_wizard::toolchain::EnsureOutcome;
use avd_wizard::wizard_core::{CustomDisplay, DeviceKind, Resolution};

use common::{FakeSdk, FakeTools};

const IMAGE: &str = "system-images;android-34;google_apis;x86_64";

fn profile_config() -> EmulatorConfig {
    EmulatorConfig::builder()
        .name("Tablet_Emulator")
        .device(DeviceKind::Profile("pixel_c".into()))
        .api_level("34")
        .system_image(IMAGE)
        .ram_mb(4096)
        .has_keyboard(true)
        .build()
        .unwrap()
}

fn custom_config() -> EmulatorConfig {
    EmulatorConfig::builder()
        .name("Custom_Tab")
        .device(DeviceKind::Custom(CustomDisplay {
            resolution: Resolution { width: 1280, height: 800 },
            density: 160,
        }))
        .api_level("34")
        .system_image(IMAGE)
        .ram_mb(2048)
        .build()
        .unwrap()
}

async fn provision(sdk: &FakeSdk, config: &EmulatorConfig) -> (Provisioner, Result<ProvisionReport, ProvisionError>) {
    let mut provisioner = Provisioner::new(&sdk.env());
    let result = provisioner.run(config).await;
    (provisioner, result)
}

#[tokio::test]
async fn installs_missing_image_then_creates_avd() {
    let sdk = FakeSdk::new(FakeTools::default());
    let (provisioner, result) = provision(&sdk, &profile_config()).await;

    let report = result.unwrap();
    assert_eq!(report.image, EnsureOutcome::Installed);
    assert_eq!(provisioner.stage(), &ProvisionStage::Done);
    assert_eq!(report.lines_written, 5);
    assert!(report.launch_hint.ends_with("/emulator/emulator -avd Tablet_Emulator"));

    let calls = sdk.sdk_calls();
    assert!(calls.contains("list"));
    assert!(calls.contains(&format!("install {}", IMAGE)));

    let avd_calls = sdk.avd_calls();
    assert!(avd_calls.contains("create avd --name Tablet_Emulator"));
    assert!(avd_calls.contains(&format!("--package {}", IMAGE)));
    assert!(avd_calls.contains("--device pixel_c"));
    assert!(avd_calls.contains("--force"));
    assert_eq!(sdk.avd_answer().trim(), "no");

    let ini = sdk.config_ini("Tablet_Emulator");
    assert!(ini.starts_with("avd.ini.encoding=UTF-8\nhw.ramSize=1536\n"));
    assert!(ini.ends_with(
        "hw.ramSize=4096\nhw.cpu.ncore=4\nhw.keyboard=true\nhw.gpu.enabled=yes\nhw.gpu.mode=auto\n"
    ));
}

#[tokio::test]
async fn skips_install_when_image_present() {
    let sdk = FakeSdk::new(FakeTools::default());
    sdk.mark_installed(IMAGE);

    let (_, result) = provision(&sdk, &profile_config()).await;

    assert_eq!(result.unwrap().image, EnsureOutcome::AlreadyInstalled);
    assert!(!sdk.sdk_calls().contains("install"));
}

#[tokio::test]
async fn custom_device_gets_display_lines_and_no_profile() {
    let sdk = FakeSdk::new(FakeTools::default());
    let (_, result) = provision(&sdk, &custom_config()).await;
    result.unwrap();

    assert!(!sdk.avd_calls().contains("--device"));
    let ini = sdk.config_ini("Custom_Tab");
    assert!(ini.contains("hw.lcd.width=1280\n"));
    assert!(ini.contains("hw.lcd.height=800\n"));
    assert!(ini.contains("hw.lcd.density=160\n"));
    assert!(ini.contains("hw.keyboard=false\n"));
}

#[tokio::test]
async fn install_failure_stops_before_creation() {
    let sdk = FakeSdk::new(FakeTools {
        install_fails: true,
        ..Default::default()
    });
    let (provisioner, result) = provision(&sdk, &profile_config()).await;

    assert!(matches!(result, Err(ProvisionError::ImageInstall(_))));
    assert!(matches!(provisioner.stage(), ProvisionStage::Failed(_)));
    assert!(sdk.avd_calls().is_empty());
}

#[tokio::test]
async fn create_failure_is_reported() {
    let sdk = FakeSdk::new(FakeTools {
        create_fails: true,
        ..Default::default()
    });
    let (provisioner, result) = provision(&sdk, &profile_config()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ProvisionError::DeviceCreate(_)));
    assert!(err.to_string().starts_with("failed to create AVD"));
    assert!(matches!(provisioner.stage(), ProvisionStage::Failed(_)));
    assert!(sdk.config_ini("Tablet_Emulator").is_empty());
}

#[tokio::test]
async fn missing_config_file_is_a_write_failure() {
    let sdk = FakeSdk::new(FakeTools {
        skip_config_file: true,
        ..Default::default()
    });
    let (provisioner, result) = provision(&sdk, &profile_config()).await;

    assert!(matches!(result, Err(ProvisionError::ConfigWrite(_))));
    assert!(matches!(provisioner.stage(), ProvisionStage::Failed(_)));
    // No file is created in append mode
    assert!(!sdk.avd_home().join("Tablet_Emulator.avd").join("config.ini").exists());
}

#[tokio::test]
async fn versioned_cmdline_tools_are_used_for_both_tools() {
    let sdk = FakeSdk::new(FakeTools {
        cmdline_tools_version: Some("12.0"),
        ..Default::default()
    });
    let (provisioner, result) = provision(&sdk, &profile_config()).await;

    assert_eq!(result.unwrap().image, EnsureOutcome::Installed);
    assert_eq!(provisioner.stage(), &ProvisionStage::Done);
    assert!(sdk.sdk_calls().contains(&format!("install {}", IMAGE)));
    assert!(sdk.avd_calls().contains("create avd --name Tablet_Emulator"));

    let plan_config = profile_config();
    let plan = provisioner.plan(&plan_config);
    let versioned_bin = sdk.root().join("cmdline-tools").join("12.0").join("bin");
    assert_eq!(plan.install_command[0], versioned_bin.join("sdkmanager").display().to_string());
    assert_eq!(plan.create_command[0], versioned_bin.join("avdmanager").display().to_string());
}
