use std::path::PathBuf;

use clap::{ArgAction, Parser};
use menugen_config::Config;

/// Random multi-day menus and shopping lists from a CSV of dishes
#[derive(Debug, Parser)]
#[command(name = "menugen", version)]
pub struct Cli {
    /// CSV file with a header row, then `dish,ingredient,ingredient,...` rows
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Days per generated menu
    #[arg(short, long, value_name = "N")]
    pub days: Option<usize>,

    /// Seed for reproducible menus
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// JSON config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags win over everything else
    pub fn apply(&self, config: &mut Config) {
        if let Some(file) = &self.file {
            config.catalog.path = file.clone();
        }
        if let Some(days) = self.days {
            config.menu.days_per_menu = days;
        }
        if let Some(seed) = self.seed {
            config.menu.seed = Some(seed);
        }
    }
}
