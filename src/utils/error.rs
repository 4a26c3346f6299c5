use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SampleError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SampleError::IoError(e) => format!("Could not read or write: {}", e),
            SampleError::ConfigParseError(e) => format!("Configuration file is not valid: {}", e),
            SampleError::ConfigError { message } => format!("Configuration problem: {}", message),
            SampleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SampleError::IoError(_) => {
                "Check that the config file exists and that stdout is writable"
            }
            SampleError::ConfigParseError(_) => {
                "Use a [run] table with `calls` set to \"direct\" or \"indirect\" entries"
            }
            SampleError::ConfigError { .. } => "Provide at least one call to run",
            SampleError::InvalidConfigValueError { .. } => {
                "Adjust the value to the allowed range and retry"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        !matches!(self, SampleError::IoError(_))
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
