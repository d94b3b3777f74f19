// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Failure talking to the remote profile source. Never retried by the core;
/// callers decide how to surface it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("The requested account does not exist at the profile source.")]
    NotFound,
    #[error("The profile source did not respond in time.")]
    Timeout,
    #[error("The profile source responded with status {0}.")]
    Status(u16),
    #[error("The profile source returned an unusable payload. {0}")]
    Malformed(String),
    #[error("Failed to reach the profile source. {0}")]
    Transport(String),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
