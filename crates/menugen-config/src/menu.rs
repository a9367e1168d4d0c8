use serde::{Deserialize, Serialize};

fn default_days_per_menu() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    #[serde(default = "default_days_per_menu")]
    pub days_per_menu: usize,
    /// Fixed rng seed, random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            days_per_menu: default_days_per_menu(),
            seed: None,
        }
    }
}
