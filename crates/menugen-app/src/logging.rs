use std::io;

use menugen_config::log::LogConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the menu on stdout stays readable.
/// `RUST_LOG` takes precedence over both the config and `-v`.
pub fn init_logging(config: &LogConfig, verbose: u8) {
    let level = match verbose {
        0 => config.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    tracing::debug!("menugen started with verbosity level: {}", verbose);
}
