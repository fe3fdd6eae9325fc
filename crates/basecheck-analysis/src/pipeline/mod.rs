//! End-to-end scan orchestration.

pub mod engine;
pub mod options;
pub mod report;
pub mod workspace_scanner;

pub use engine::Basecheck;
pub use options::{ScanOptions, ScanProgress};
pub use report::{ScanReport, ScanStats};
pub use workspace_scanner::WorkspaceScanner;
