use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_REPEAT: usize = 10_000;

/// Which path a `Driver` takes to reach its leaf printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CallMode {
    Direct,
    Indirect,
}

impl fmt::Display for CallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallMode::Direct => write!(f, "direct"),
            CallMode::Indirect => write!(f, "indirect"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPlan {
    pub calls: Vec<CallMode>,
    pub repeat: usize,
}

impl Default for CallPlan {
    fn default() -> Self {
        Self {
            calls: vec![CallMode::Direct, CallMode::Indirect],
            repeat: 1,
        }
    }
}

impl Validate for CallPlan {
    fn validate(&self) -> Result<()> {
        validate_non_empty("calls", &self.calls)?;
        validate_range("repeat", self.repeat, 1, MAX_REPEAT)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub direct_calls: usize,
    pub indirect_calls: usize,
    /// Lines handed to the sink (six per call). A sink that drops writes
    /// without an error, such as a closed stdout, still counts.
    pub lines_written: usize,
}

impl RunSummary {
    pub fn total_calls(&self) -> usize {
        self.direct_calls + self.indirect_calls
    }
}
