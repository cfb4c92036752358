//! Format versions for editor snapshots and action logs.
//!
//! Both documents carry a `"major.minor"` string. A reader accepts any
//! document with its own major number; minor bumps only add optional fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Version stamp written into persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaVersion {
    /// Bumped when older readers can no longer load the document
    pub major: u16,
    /// Bumped for additive changes
    pub minor: u16,
}

/// A version string that is not `"<major>.<minor>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version string {0:?}, expected \"<major>.<minor>\"")]
pub struct ParseVersionError(String);

impl SchemaVersion {
    /// Builds a version stamp.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Version written into editor snapshots.
    pub const EDITOR_SNAPSHOT: Self = Self::new(1, 0);

    /// Version written into action logs.
    pub const ACTION_LOG: Self = Self::new(1, 0);

    /// Whether a reader at this version can load a document stamped `written`.
    #[must_use]
    pub const fn can_read(&self, written: &Self) -> bool {
        self.major == written.major
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for SchemaVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self::new(
            major.parse().map_err(|_| invalid())?,
            minor.parse().map_err(|_| invalid())?,
        ))
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_serializes_as_string() {
        let json = serde_json::to_string(&SchemaVersion::EDITOR_SNAPSHOT).expect("serialize");
        assert_eq!(json, r#""1.0""#);

        let parsed: SchemaVersion = serde_json::from_str(r#""1.7""#).expect("deserialize");
        assert_eq!(parsed, SchemaVersion::new(1, 7));
    }

    #[test]
    fn test_malformed_version_strings() {
        assert!("1".parse::<SchemaVersion>().is_err());
        assert!("1.x".parse::<SchemaVersion>().is_err());
        assert!(serde_json::from_str::<SchemaVersion>(r#"{"major":1}"#).is_err());
    }

    #[test]
    fn test_readers_accept_minor_bumps_only() {
        let snapshot = SchemaVersion::EDITOR_SNAPSHOT;
        assert!(snapshot.can_read(&SchemaVersion::new(1, 4)));
        assert!(!snapshot.can_read(&SchemaVersion::new(2, 0)));
        assert!(SchemaVersion::ACTION_LOG.can_read(&SchemaVersion::new(1, 0)));
    }
}
