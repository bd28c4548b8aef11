//! Error types for the AVD wizard
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the wizard
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} environment variable not set")]
    MissingEnv(String),

    #[error("Input closed before a response was given")]
    InputClosed,

    #[error("Invalid emulator configuration: {0}")]
    InvalidConfig(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Provisioning error: {0}")]
    Provision(String),
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

impl WizardError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WizardError::Io(e) => format!("File operation failed: {}", e),
            WizardError::MissingEnv(var) => format!("{} environment variable not set", var),
            WizardError::InputClosed => "Input ended before the wizard finished".to_string(),
            WizardError::Provision(msg) => format!("Error creating emulator: {}", msg),
            _ => self.to_string(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}
