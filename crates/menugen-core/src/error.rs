use std::path::PathBuf;

/// Failures while reading the dish catalog. All of them end the run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Error reading CSV file: {0}")]
    ReadError(#[from] csv::Error),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::ReadError(err.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error(
        "Not enough unique dishes available to generate a menu for {requested} days ({available} available)."
    )]
    InsufficientDishes { requested: usize, available: usize },
}
