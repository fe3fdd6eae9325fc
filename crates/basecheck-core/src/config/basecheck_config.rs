//! Top-level Basecheck configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BaselineConfig, ScanConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BASECHECK_*`)
/// 3. Project config (`basecheck.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasecheckConfig {
    pub scan: ScanConfig,
    pub baseline: BaselineConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_file_size: Option<u64>,
    pub target: Option<String>,
}

impl BasecheckConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("basecheck.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BasecheckConfig) -> Result<(), ConfigError> {
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        // Resolving the target validates the cohort name and floor strings.
        config.baseline.effective_target()?;
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BasecheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: BasecheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut BasecheckConfig, other: &BasecheckConfig) {
        // Scan
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.include_js.is_some() {
            base.scan.include_js = other.scan.include_js;
        }
        if other.scan.include_css.is_some() {
            base.scan.include_css = other.scan.include_css;
        }

        // Baseline
        if other.baseline.target.is_some() {
            base.baseline.target = other.baseline.target.clone();
        }
        if other.baseline.chrome_floor.is_some() {
            base.baseline.chrome_floor = other.baseline.chrome_floor.clone();
        }
        if other.baseline.edge_floor.is_some() {
            base.baseline.edge_floor = other.baseline.edge_floor.clone();
        }
        if other.baseline.firefox_floor.is_some() {
            base.baseline.firefox_floor = other.baseline.firefox_floor.clone();
        }
        if other.baseline.safari_floor.is_some() {
            base.baseline.safari_floor = other.baseline.safari_floor.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASECHECK_SCAN_MAX_FILE_SIZE`, `BASECHECK_TARGET`, etc.
    fn apply_env_overrides(config: &mut BasecheckConfig) {
        if let Ok(val) = std::env::var("BASECHECK_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASECHECK_TARGET") {
            config.baseline.target = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BasecheckConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(ref v) = cli.target {
            config.baseline.target = Some(v.clone());
        }
    }
}
