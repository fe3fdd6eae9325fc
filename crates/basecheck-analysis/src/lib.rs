//! basecheck-analysis: the baseline detection and verdict-scoring engine.
//!
//! Pipeline: file discovery → document open → token scan → catalog lookup →
//! verdict scoring → fingerprint dedup → deterministic sort. The result is an
//! ordered list of [`Finding`](basecheck_core::model::Finding)s for the
//! presentation layer to consume.

pub mod catalog;
pub mod pipeline;
pub mod scanner;
pub mod tokens;
pub mod verdict;

pub use catalog::FeatureCatalog;
pub use pipeline::{Basecheck, ScanOptions, ScanProgress, ScanReport, ScanStats, WorkspaceScanner};
pub use scanner::{
    DocumentScanner, Family, FileWalker, FsDocumentProvider, MemoryDocumentProvider, TokenMatch,
};
pub use tokens::{Boundary, ScannerToken, TokenRegistry};
pub use verdict::score;
