//! Engine version numbers and the ranges they are matched against.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// A `major.minor.patch` version
///
/// Ordering is lexicographic over the three parts. The zero version means
/// "unspecified".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const ZERO: Version = Version::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

/// Compare two versions part by part
pub fn compare_versions(a: Version, b: Version) -> Ordering {
    a.cmp(&b)
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("Version is empty")]
    Empty,

    #[error("Invalid version component '{component}' in '{input}'")]
    InvalidComponent { input: String, component: String },

    #[error("Too many version components in '{input}' (at most 3)")]
    TooManyComponents { input: String },
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parse `N`, `N.N` or `N.N.N`; missing parts are zero
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut parts = [0u32; 3];
        for (index, component) in input.split('.').enumerate() {
            if index >= parts.len() {
                return Err(VersionParseError::TooManyComponents {
                    input: input.to_string(),
                });
            }
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::InvalidComponent {
                    input: input.to_string(),
                    component: component.to_string(),
                });
            }
            parts[index] = component
                .parse()
                .map_err(|_| VersionParseError::InvalidComponent {
                    input: input.to_string(),
                    component: component.to_string(),
                })?;
        }

        Ok(Version::new(parts[0], parts[1], parts[2]))
    }
}

/// Start of a span of versions over which an engine supports something
///
/// A range covers `start` up to (not including) the start of the next range
/// in the same list, or everything from `start` onward if it is the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub start: Version,
}

impl VersionRange {
    pub const fn starting_at(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            start: Version::new(major, minor, patch),
        }
    }
}

/// Whether `version` falls inside any of the ordered `ranges`
pub fn is_version_supported(ranges: &[VersionRange], version: Version) -> bool {
    ranges.iter().enumerate().any(|(index, range)| {
        range.start <= version
            && ranges
                .get(index + 1)
                .map_or(true, |next| version < next.start)
    })
}
