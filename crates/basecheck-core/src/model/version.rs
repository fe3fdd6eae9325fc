//! Browser version numbers, ordered by (major, minor).

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A browser version such as `103` or `16.4`.
///
/// Support datasets express versions as strings; patch-level components are
/// never present, so two numeric fields are enough for a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrowserVersion {
    pub major: u32,
    pub minor: u32,
}

impl BrowserVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

/// Error returned when a version string cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid browser version: {0:?}")]
pub struct ParseVersionError(pub String);

impl FromStr for BrowserVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(err)?;
        let minor = match parts.next() {
            Some(p) => p.parse::<u32>().map_err(|_| err())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self { major, minor })
    }
}

impl fmt::Display for BrowserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

impl Serialize for BrowserVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BrowserVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_only() {
        let v: BrowserVersion = "103".parse().unwrap();
        assert_eq!(v, BrowserVersion::new(103, 0));
    }

    #[test]
    fn parses_major_minor() {
        let v: BrowserVersion = "16.4".parse().unwrap();
        assert_eq!(v, BrowserVersion::new(16, 4));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<BrowserVersion>().is_err());
        assert!("sixteen".parse::<BrowserVersion>().is_err());
        assert!("1.2.3".parse::<BrowserVersion>().is_err());
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        let a: BrowserVersion = "9".parse().unwrap();
        let b: BrowserVersion = "16.4".parse().unwrap();
        let c: BrowserVersion = "103".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display_round_trips() {
        for s in ["66", "13.1", "121"] {
            let v: BrowserVersion = s.parse().unwrap();
            assert_eq!(v.to_string(), s);
        }
    }
}
