//! IDE build range a plugin is compatible with.

use serde::{Deserialize, Serialize};

/// Sentinel build number meaning "not set".
pub const UNSET_BUILD: i32 = -1;

fn unset_build() -> i32 {
    UNSET_BUILD
}

/// Inclusive range of IDE build numbers.
///
/// Either bound may be [`UNSET_BUILD`]. The range is only meaningful when
/// both bounds are set; a half-specified range is treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConstraint {
    #[serde(default = "unset_build")]
    pub since_build: i32,

    #[serde(default = "unset_build")]
    pub until_build: i32,
}

impl Default for VersionConstraint {
    fn default() -> Self {
        Self {
            since_build: UNSET_BUILD,
            until_build: UNSET_BUILD,
        }
    }
}

impl VersionConstraint {
    pub fn new(since_build: i32, until_build: i32) -> Self {
        Self {
            since_build,
            until_build,
        }
    }

    /// Both bounds are set.
    pub fn is_complete(&self) -> bool {
        self.since_build != UNSET_BUILD && self.until_build != UNSET_BUILD
    }

    /// Exactly one bound is set.
    pub fn is_partial(&self) -> bool {
        (self.since_build == UNSET_BUILD) != (self.until_build == UNSET_BUILD)
    }
}
