use crate::utils::error::{Result, SampleError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects paths that can never name a config file; existence is left to the read.
pub fn validate_config_path(path: &Path) -> Result<()> {
    let bytes = path.as_os_str().as_encoded_bytes();
    let reason = if bytes.is_empty() {
        "Config file path is empty"
    } else if bytes.contains(&0) {
        "Config file path contains a NUL byte"
    } else if bytes.ends_with(b"/") {
        "Config file path names a directory"
    } else {
        return Ok(());
    };

    Err(SampleError::InvalidConfigValueError {
        field: "config".to_string(),
        value: path.display().to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(SampleError::ConfigError {
            message: format!("'{}' must list at least one entry", field_name),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
