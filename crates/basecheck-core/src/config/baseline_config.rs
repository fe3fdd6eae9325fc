//! Baseline target configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::{BrowserVersion, Target};

/// Configuration for the baseline comparison.
///
/// A named cohort supplies the version floors; individual floors can then be
/// overridden per engine for audiences that do not fit either shipped cohort.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaselineConfig {
    /// Target cohort name: `modern` or `enterprise`. Default: `modern`.
    pub target: Option<String>,
    /// Per-engine floor overrides, as version strings.
    pub chrome_floor: Option<String>,
    pub edge_floor: Option<String>,
    pub firefox_floor: Option<String>,
    pub safari_floor: Option<String>,
}

impl BaselineConfig {
    /// Resolve the effective target: named cohort plus any floor overrides.
    pub fn effective_target(&self) -> Result<Target, ConfigError> {
        let name = self.target.as_deref().unwrap_or("modern");
        let mut target = Target::from_name(name)?;

        if let Some(v) = Self::parse_floor("baseline.chrome_floor", &self.chrome_floor)? {
            target.floors.chrome = v;
        }
        if let Some(v) = Self::parse_floor("baseline.edge_floor", &self.edge_floor)? {
            target.floors.edge = v;
        }
        if let Some(v) = Self::parse_floor("baseline.firefox_floor", &self.firefox_floor)? {
            target.floors.firefox = v;
        }
        if let Some(v) = Self::parse_floor("baseline.safari_floor", &self.safari_floor)? {
            target.floors.safari = v;
        }

        Ok(target)
    }

    fn parse_floor(
        field: &str,
        value: &Option<String>,
    ) -> Result<Option<BrowserVersion>, ConfigError> {
        match value {
            None => Ok(None),
            Some(s) => s.parse().map(Some).map_err(|_| ConfigError::InvalidVersion {
                field: field.to_string(),
                value: s.clone(),
            }),
        }
    }
}
