//! Error handling for Basecheck.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod pipeline_error;
pub mod registry_error;
pub mod scan_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use pipeline_error::PipelineError;
pub use registry_error::RegistryError;
pub use scan_error::ScanError;
