use menugen_config::Config;
use menugen_core::{CatalogLoader, LoadError};
use menugen_types::DishCatalog;

/// Everything the session reads. Fixed after startup.
pub struct AppState {
    pub config: Config,
    pub catalog: DishCatalog,
}

impl AppState {
    pub fn new(config: Config, catalog: DishCatalog) -> Self {
        Self { config, catalog }
    }

    /// Read the catalog named by the config
    pub fn load(config: Config) -> Result<Self, LoadError> {
        let loaded = CatalogLoader::load_from_file(&config.catalog.path)?;
        if !loaded.warnings.is_empty() {
            tracing::warn!(
                "{} row(s) skipped in {}",
                loaded.warnings.len(),
                config.catalog.path.display()
            );
        }

        Ok(Self::new(config, loaded.catalog))
    }
}
