use anyhow::Context;
use clap::Parser;
use delegating_sample::utils::{logger, validation::Validate};
use delegating_sample::{CallRunner, CliConfig, Driver};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting delegating-sample");
    tracing::debug!("CLI config: {:?}", config);

    let plan = match config.resolve_plan().and_then(|plan| {
        plan.validate()?;
        Ok(plan)
    }) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(if e.is_config_error() { 1 } else { 2 });
        }
    };

    let runner = CallRunner::new(Driver::new(), plan);
    tracing::debug!("Resolved plan: {:?}", runner.plan());
    let summary = runner
        .run()
        .context("failed to write call output to stdout")?;

    tracing::info!(
        "✅ {} call(s) completed ({} direct, {} indirect), {} lines handed to stdout",
        summary.total_calls(),
        summary.direct_calls,
        summary.indirect_calls,
        summary.lines_written
    );

    Ok(())
}
