//! Configuration system for Basecheck.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod basecheck_config;
pub mod baseline_config;
pub mod scan_config;

pub use basecheck_config::{BasecheckConfig, CliOverrides};
pub use baseline_config::BaselineConfig;
pub use scan_config::ScanConfig;
