use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "delegating_sample";

fn default_directives(verbose: bool) -> String {
    if verbose {
        format!("{}=debug,info", CRATE_TARGET)
    } else {
        format!("{}=info", CRATE_TARGET)
    }
}

/// `RUST_LOG` wins over the verbosity flag.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Stdout is reserved for the call sequences, so every event goes to stderr.
pub fn init_cli_logger(verbose: bool) {
    let stderr = std::io::stderr();
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(stderr.is_terminal())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(layer)
        .init();
}
