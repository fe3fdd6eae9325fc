//! Pipeline errors, aggregating subsystem errors via `From` conversions.
//!
//! Cancellation is deliberately not represented here: a cancelled scan is a
//! successful scan with a partial result.

use super::{CatalogError, ConfigError, RegistryError, ScanError};

/// Errors that can abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}
