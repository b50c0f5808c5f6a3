//! Infrastructure layer: file-backed data sources.

pub mod csv_source;
pub mod error;

pub use csv_source::CsvDemandSource;
pub use error::LoadError;
