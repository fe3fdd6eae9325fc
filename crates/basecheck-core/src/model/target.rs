//! Target cohorts: which browser versions the audience is assumed to run.

use serde::{Deserialize, Serialize};

use super::version::BrowserVersion;
use crate::errors::ConfigError;

/// Per-engine version floors for a cohort.
///
/// An engine floor is the oldest version the audience is assumed to run. A
/// feature whose minimum supporting version is at or below the floor is fully
/// available to that audience on that engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFloors {
    pub chrome: BrowserVersion,
    pub edge: BrowserVersion,
    pub firefox: BrowserVersion,
    pub safari: BrowserVersion,
}

/// A scan target: a named audience cohort with its version floors.
///
/// Supplied once per scan and fixed for its duration. Thresholds are
/// configuration data; the named constructors carry the shipped defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub floors: VersionFloors,
}

impl Target {
    /// Evergreen-browser audience: roughly the trailing year of releases.
    pub fn modern() -> Self {
        Self {
            name: "modern".to_string(),
            floors: VersionFloors {
                chrome: BrowserVersion::new(121, 0),
                edge: BrowserVersion::new(121, 0),
                firefox: BrowserVersion::new(121, 0),
                safari: BrowserVersion::new(17, 4),
            },
        }
    }

    /// Conservative audience: managed fleets pinned to ESR-class releases.
    pub fn enterprise() -> Self {
        Self {
            name: "enterprise".to_string(),
            floors: VersionFloors {
                chrome: BrowserVersion::new(100, 0),
                edge: BrowserVersion::new(100, 0),
                firefox: BrowserVersion::new(102, 0),
                safari: BrowserVersion::new(15, 4),
            },
        }
    }

    /// Resolve a cohort by name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "modern" => Ok(Self::modern()),
            "enterprise" => Ok(Self::enterprise()),
            other => Err(ConfigError::UnknownTarget {
                name: other.to_string(),
            }),
        }
    }
}
