pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{driver::Driver, leaf::LeafPrinter, relay::Relay, runner::CallRunner};
pub use domain::model::{CallMode, CallPlan, RunSummary};
pub use utils::error::{Result, SampleError};
