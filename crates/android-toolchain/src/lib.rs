//! Android Toolchain
//!
//! Handles the SDK side of provisioning:
//! - SDK root and AVD home discovery
//! - sdkmanager package checks and installation
//! - System image identifier resolution

pub mod env;
pub mod sdk_manager;
pub mod system_image;

pub use env::EnvironmentConfig;
pub use sdk_manager::{EnsureOutcome, SdkManager, SdkManagerError, SdkProgressCallback};
pub use system_image::{resolve_system_image, ImageFlavor, ImageResolution, SystemImage};

/// API levels offered by the wizard, newest first
pub const SUPPORTED_API_LEVELS: &[(u32, &str)] = &[
    (34, "Android 14"),
    (33, "Android 13"),
    (32, "Android 12L"),
    (31, "Android 12"),
    (30, "Android 11"),
];
