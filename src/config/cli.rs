use super::toml_config::TomlConfig;
use crate::domain::model::{CallMode, CallPlan};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "delegating-sample")]
#[command(about = "Prints the same sequence through a direct and a delegated call")]
pub struct CliConfig {
    /// Path to a TOML file with a [run] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Calls to make, in order (overrides the config file)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub calls: Vec<CallMode>,

    /// How many times to run the call list (overrides the config file)
    #[arg(long)]
    pub repeat: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Config file first, then command-line overrides.
    pub fn resolve_plan(&self) -> Result<CallPlan> {
        let mut plan = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.to_plan(),
            None => CallPlan::default(),
        };

        if !self.calls.is_empty() {
            plan.calls = self.calls.clone();
        }
        if let Some(repeat) = self.repeat {
            plan.repeat = repeat;
        }

        Ok(plan)
    }
}
