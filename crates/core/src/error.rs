use thiserror::Error;

/// Core error type for the modkit scaffolder
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Module '{name}' already exists")]
    ModuleExists { name: String },

    #[error("Module '{name}' does not exist")]
    ModuleNotFound { name: String },
}

impl ScaffoldError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Pre-condition failures the CLI reports without a failing exit status
    pub fn is_soft_stop(&self) -> bool {
        matches!(
            self,
            Self::ModuleExists { .. } | Self::ModuleNotFound { .. }
        )
    }
}
