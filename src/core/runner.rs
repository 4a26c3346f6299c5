use crate::core::driver::Driver;
use crate::domain::model::{CallMode, CallPlan, RunSummary};
use crate::utils::error::Result;
use std::io::{self, Write};

const LINES_PER_CALL: usize = 6;

pub struct CallRunner {
    driver: Driver,
    plan: CallPlan,
}

impl CallRunner {
    pub fn new(driver: Driver, plan: CallPlan) -> Self {
        Self { driver, plan }
    }

    pub fn plan(&self) -> &CallPlan {
        &self.plan
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut out = io::stdout().lock();
        self.run_to(&mut out)
    }

    /// Runs every call in the plan, in order, `repeat` times against the same driver.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::info!(
            "Running {} call(s) x {} round(s)",
            self.plan.calls.len(),
            self.plan.repeat
        );

        let mut summary = RunSummary::default();

        for round in 1..=self.plan.repeat {
            tracing::debug!("Round {}/{}", round, self.plan.repeat);
            for &mode in &self.plan.calls {
                self.driver.call_to(mode, out)?;
                match mode {
                    CallMode::Direct => summary.direct_calls += 1,
                    CallMode::Indirect => summary.indirect_calls += 1,
                }
                summary.lines_written += LINES_PER_CALL;
            }
        }

        out.flush()?;

        tracing::info!(
            "Finished: {} direct, {} indirect, {} lines",
            summary.direct_calls,
            summary.indirect_calls,
            summary.lines_written
        );

        Ok(summary)
    }
}
