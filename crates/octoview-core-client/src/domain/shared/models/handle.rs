// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// The username an account carries at the remote profile source. Primary
/// business key for profiles; case-preserving, never empty, never padded
/// with whitespace.
pub struct Handle(String);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum HandleError {
    #[error("A handle must contain at least one non-whitespace character.")]
    Empty,
}

impl Handle {
    /// Trims surrounding whitespace and rejects handles that are empty
    /// afterwards. All lookups run through this, so `" octocat "` and
    /// `"octocat"` address the same profile.
    pub fn new(value: impl AsRef<str>) -> Result<Self, HandleError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(HandleError::Empty);
        }
        Ok(Handle(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Debug for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handle({})", self.0)
    }
}

impl Display for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Handle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::new(s)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
