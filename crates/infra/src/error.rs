use std::path::PathBuf;

use thiserror::Error;

use stockcast_core::PlanningError;

/// Failure while loading the historical dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} line {line}: {source}")]
    Parse {
        file: &'static str,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("{file}: {message}")]
    Invalid { file: &'static str, message: String },
}

impl From<LoadError> for PlanningError {
    fn from(err: LoadError) -> Self {
        PlanningError::data_source(err.to_string())
    }
}
