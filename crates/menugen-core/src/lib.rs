pub mod error;
pub mod loader;
pub mod sampler;
pub mod shopping;

pub use error::{LoadError, SampleError};
pub use loader::{CatalogLoader, LoadedCatalog, SkipReason, SkippedRow};
pub use sampler::sample_menu;
pub use shopping::aggregate;
