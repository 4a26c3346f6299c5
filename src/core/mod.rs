pub mod driver;
pub mod leaf;
pub mod relay;
pub mod runner;

pub use crate::domain::model::{CallMode, CallPlan, RunSummary};
pub use crate::utils::error::Result;
