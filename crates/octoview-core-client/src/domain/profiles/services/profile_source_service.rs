// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::profiles::models::{ProfileDraft, Repository};
use crate::domain::shared::models::{Handle, SourceError};

/// Read-only view onto the remote profile source for a single account.
#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait ProfileSourceService: Send + Sync {
    /// The account's public profile, already mapped into draft shape.
    /// `None` when the account does not exist at the source; absence is a
    /// normal outcome for the populate path, not an error.
    async fn load_profile(&self, handle: &Handle) -> Result<Option<ProfileDraft>, SourceError>;

    /// Every repository the account owns, in source order.
    async fn load_repositories(&self, handle: &Handle) -> Result<Vec<Repository>, SourceError>;
}
