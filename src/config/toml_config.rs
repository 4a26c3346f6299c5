use crate::domain::model::{CallMode, CallPlan};
use crate::utils::error::Result;
use crate::utils::validation::{validate_config_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub calls: Option<Vec<CallMode>>,
    pub repeat: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_config_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Fills unset fields from the default plan.
    pub fn to_plan(&self) -> CallPlan {
        let defaults = CallPlan::default();
        CallPlan {
            calls: self.run.calls.clone().unwrap_or(defaults.calls),
            repeat: self.run.repeat.unwrap_or(defaults.repeat),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_plan().validate()
    }
}
