// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::shared::models::{Handle, SourceError};
use crate::domain::social::models::SourceAccount;

/// Read-only view onto the follower graph at the remote profile source.
///
/// Implementations return the full set visible at call time; the source
/// paginates at a fixed page size, so they walk every page. A handle that
/// does not exist at the source fails with [`SourceError::NotFound`].
#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait SocialGraphService: Send + Sync {
    async fn load_followers(&self, handle: &Handle) -> Result<Vec<SourceAccount>, SourceError>;
    async fn load_following(&self, handle: &Handle) -> Result<Vec<SourceAccount>, SourceError>;
}
