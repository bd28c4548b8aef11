//! System Image Resolution
//!
//! Maps the chosen API level, image flavor and host ABI to an SDK package
//! identifier of the form `system-images;android-{api};{flavor};{abi}`.

use tracing::warn;

use avd_wizard_core::Abi;

/// Advisory shown when Google Play is requested on ARM64
pub const PLAY_FALLBACK_NOTICE: &str =
    "Note: Google Play system images might not be available for ARM64. Falling back to Google APIs...";

/// System image flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFlavor {
    GoogleApis,
    GooglePlay,
    Aosp,
}

impl ImageFlavor {
    /// Menu order
    pub fn all() -> &'static [ImageFlavor] {
        &[ImageFlavor::GoogleApis, ImageFlavor::GooglePlay, ImageFlavor::Aosp]
    }

    /// Flavor for a 0-based menu index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Tag used in the package identifier
    pub fn tag(&self) -> &'static str {
        match self {
            ImageFlavor::GoogleApis => "google_apis",
            ImageFlavor::GooglePlay => "google_apis_playstore",
            ImageFlavor::Aosp => "default",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            ImageFlavor::GoogleApis => "Google APIs",
            ImageFlavor::GooglePlay => "Google Play",
            ImageFlavor::Aosp => "AOSP",
        }
    }
}

/// A concrete system image package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemImage {
    pub api_level: String,
    pub flavor: ImageFlavor,
    pub abi: Abi,
}

impl SystemImage {
    /// Get the SDK manager package name
    pub fn package_name(&self) -> String {
        format!(
            "system-images;android-{};{};{}",
            self.api_level,
            self.flavor.tag(),
            self.abi.tag()
        )
    }

    /// Check if this has Google Play
    pub fn has_play_store(&self) -> bool {
        self.flavor == ImageFlavor::GooglePlay
    }
}

/// Outcome of resolving a requested flavor on a given ABI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolution {
    pub image: SystemImage,
    /// Set when the requested flavor was replaced by Google APIs
    pub fell_back: bool,
}

impl ImageResolution {
    pub fn package_name(&self) -> String {
        self.image.package_name()
    }

    /// Advisory to show the user, if any
    pub fn notice(&self) -> Option<&'static str> {
        self.fell_back.then_some(PLAY_FALLBACK_NOTICE)
    }
}

/// Resolve the image for `api_level`, `flavor` and `abi`.
///
/// Google Play images are treated as unavailable on ARM64 and silently
/// replaced by Google APIs.
pub fn resolve_system_image(api_level: &str, flavor: ImageFlavor, abi: Abi) -> ImageResolution {
    let (flavor, fell_back) = match (flavor, abi) {
        (ImageFlavor::GooglePlay, Abi::Arm64V8a) => {
            warn!("Google Play image requested on ARM64, using Google APIs");
            (ImageFlavor::GoogleApis, true)
        }
        (flavor, _) => (flavor, false),
    };

    ImageResolution {
        image: SystemImage {
            api_level: api_level.to_string(),
            flavor,
            abi,
        },
        fell_back,
    }
}
