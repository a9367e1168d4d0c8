use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use menugen_config::Config;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod cli;
pub mod command;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::command::LineCommands;
use self::session::Session;
use self::state::AppState;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match settings::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.log, cli.verbose);

    let status = run(
        config,
        io::stdin().lock(),
        io::stdout().lock(),
        &mut io::stderr(),
    );
    ExitCode::from(status)
}

/// Load the catalog and drive the session. Returns the process exit status:
/// 0 when the user quits, 1 when the catalog cannot be loaded or the console fails.
pub fn run<I, O, E>(config: Config, input: I, output: O, errors: &mut E) -> u8
where
    I: BufRead,
    O: Write,
    E: Write,
{
    let state = match AppState::load(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::debug!("catalog load failed: {e:?}");
            let _ = writeln!(errors, "Error: {e}");
            return 1;
        }
    };

    let rng = match state.config.menu.seed {
        Some(seed) => {
            tracing::info!("Using fixed menu seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let session = Session::new(&state, LineCommands::new(input), rng, output);

    match session.run() {
        Ok(summary) => {
            tracing::info!(
                "Session finished: {} menu(s), {} failed request(s), {} invalid input(s)",
                summary.menus_generated,
                summary.sampling_failures,
                summary.invalid_inputs
            );
            0
        }
        Err(e) => {
            let _ = writeln!(errors, "Error: {e:#}");
            1
        }
    }
}
