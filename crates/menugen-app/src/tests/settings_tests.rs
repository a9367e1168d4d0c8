use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tempfile::NamedTempFile;

use crate::cli::Cli;
use crate::settings::load_config_file;

#[test]
fn test_config_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "catalog": {{ "path": "meals.csv" }} }}"#).unwrap();

    let config = load_config_file(file.path()).unwrap();
    assert_eq!(config.catalog.path, PathBuf::from("meals.csv"));
    assert_eq!(config.menu.days_per_menu, 5);
}

#[test]
fn test_bad_config_file_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = load_config_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config file"));
}

#[test]
fn test_missing_config_file_is_error() {
    let err = load_config_file(&PathBuf::from("/nonexistent/menugen.json")).unwrap_err();
    assert!(format!("{err}").contains("failed to open config file"));
}

#[test]
fn test_flags_override_config() {
    let cli = Cli::parse_from(["menugen", "food.csv", "--days", "7", "--seed", "3", "-vv"]);
    let mut config = menugen_config::Config::default();
    cli.apply(&mut config);

    assert_eq!(config.catalog.path, PathBuf::from("food.csv"));
    assert_eq!(config.menu.days_per_menu, 7);
    assert_eq!(config.menu.seed, Some(3));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_no_flags_leave_config_alone() {
    let cli = Cli::parse_from(["menugen"]);
    let mut config = menugen_config::Config::default();
    cli.apply(&mut config);

    assert_eq!(config, menugen_config::Config::default());
}

#[test]
fn test_resolve_without_config_file_applies_flags() {
    let cli = Cli::parse_from(["menugen", "week.csv", "--days", "4", "--seed", "9"]);
    let config = crate::settings::resolve(&cli).unwrap();

    assert_eq!(config.catalog.path, PathBuf::from("week.csv"));
    assert_eq!(config.menu.days_per_menu, 4);
    assert_eq!(config.menu.seed, Some(9));
}
