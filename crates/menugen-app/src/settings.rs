use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use menugen_config::Config;

use crate::cli::Cli;

/// Load a JSON config file. Missing fields take their defaults.
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

/// Defaults, then the config file, then environment, then command-line flags
pub fn resolve(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?.with_env_overrides(),
        None => Config::new(),
    };
    cli.apply(&mut config);
    Ok(config)
}
