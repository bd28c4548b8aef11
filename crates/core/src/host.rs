//! Host Platform
//!
//! Describes the machine the wizard runs on. Detection happens once at
//! startup and the result is passed around explicitly.

use serde::{Deserialize, Serialize};

/// System image ABI supported by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Abi {
    Arm64V8a,
    X86_64,
}

impl Abi {
    /// Get the ABI tag as used in system image identifiers
    pub fn tag(&self) -> &'static str {
        match self {
            Abi::Arm64V8a => "arm64-v8a",
            Abi::X86_64 => "x86_64",
        }
    }

    /// Reduce a Rust target architecture name to a supported ABI.
    ///
    /// Anything that is not 64-bit ARM falls through to `x86_64`.
    pub fn from_target_arch(arch: &str) -> Self {
        match arch {
            "aarch64" => Abi::Arm64V8a,
            _ => Abi::X86_64,
        }
    }

    /// Get all supported ABIs
    pub fn all() -> &'static [Abi] {
        &[Abi::Arm64V8a, Abi::X86_64]
    }
}

impl std::fmt::Display for Abi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostOs {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl HostOs {
    /// Parse from a `std::env::consts::OS` value
    pub fn from_target_os(os: &str) -> Self {
        match os {
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            "windows" => HostOs::Windows,
            _ => HostOs::Other,
        }
    }
}

/// Host architecture and operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostPlatform {
    pub abi: Abi,
    pub os: HostOs,
}

impl HostPlatform {
    pub fn new(abi: Abi, os: HostOs) -> Self {
        Self { abi, os }
    }

    /// Detect the platform this binary was built for
    pub fn current() -> Self {
        Self {
            abi: Abi::from_target_arch(std::env::consts::ARCH),
            os: HostOs::from_target_os(std::env::consts::OS),
        }
    }

    /// ARM64 macOS, where the emulator runs on the Hypervisor framework
    pub fn is_apple_silicon(&self) -> bool {
        self.abi == Abi::Arm64V8a && self.os == HostOs::MacOs
    }
}
