use std::env;

use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::log::LogConfig;
use self::menu::MenuConfig;

pub mod catalog;
pub mod log;
pub mod menu;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub menu: MenuConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment variables applied
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `DISHES_PATH`, `DAYS_PER_MENU`, `MENU_SEED` and `MENUGEN_LOG`.
    /// Numbers that fail to parse are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("DISHES_PATH").filter(|v| !v.is_empty()) {
            self.catalog.path = path.into();
        }

        if let Some(days) = lookup("DAYS_PER_MENU").and_then(|v| v.parse().ok()) {
            self.menu.days_per_menu = days;
        }

        if let Some(seed) = lookup("MENU_SEED").and_then(|v| v.parse().ok()) {
            self.menu.seed = Some(seed);
        }

        if let Some(level) = lookup("MENUGEN_LOG").filter(|v| !v.is_empty()) {
            self.log.level = level;
        }

        self
    }
}
