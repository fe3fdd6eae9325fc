//! basecheck-core: types, traits, errors, config, and tracing for the
//! Basecheck baseline engine.
//!
//! This crate holds everything the analysis crate depends on but that carries
//! no scanning logic of its own:
//! - Model: features, support tables, targets, verdicts, findings, documents
//! - Errors: one `thiserror` enum per subsystem, aggregated in `PipelineError`
//! - Config: TOML-based with layered resolution (CLI > env > project > defaults)
//! - Traits: document provider seam and cooperative cancellation

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod traits;

pub use config::{BasecheckConfig, BaselineConfig, CliOverrides, ScanConfig};
pub use errors::{CatalogError, ConfigError, PipelineError, RegistryError, ScanError};
pub use model::{
    BaselineStatus, BrowserVersion, Feature, Finding, Position, SourceDocument, SupportTable,
    Target, TextRange, Verdict, VersionFloors,
};
pub use traits::{CancellationToken, DocumentProvider};
