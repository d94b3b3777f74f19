// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::profiles::models::{
    Profile, ProfileChanges, ProfileDraft, ProfileFilter, ProfileSortField,
};
use crate::domain::shared::models::Handle;

/// The durable keyed store of previously-seen profiles. Rows are only ever
/// soft-deleted; the read operations exclude deleted rows.
#[cfg_attr(feature = "test", mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The non-deleted profile stored under `handle`.
    async fn get(&self, handle: &Handle) -> Result<Option<Profile>>;

    /// Find-or-create keyed by the draft's handle. When a row with that
    /// handle already exists (deleted or not) it is returned untouched;
    /// nothing from the draft is merged into it.
    async fn put(&self, draft: ProfileDraft) -> Result<Profile>;

    /// Merges the set fields of `changes` into the non-deleted row under
    /// `handle` and refreshes `updated_at`. `None` when no such row exists.
    async fn update(&self, handle: &Handle, changes: ProfileChanges) -> Result<Option<Profile>>;

    /// Marks the non-deleted row under `handle` as deleted. `false` when no
    /// such row exists. The row itself is retained.
    async fn soft_delete(&self, handle: &Handle) -> Result<bool>;

    /// All non-deleted rows matching `filter`, ordered descending by `sort`
    /// when given and in insertion order otherwise.
    async fn search(
        &self,
        filter: &ProfileFilter,
        sort: Option<ProfileSortField>,
    ) -> Result<Vec<Profile>>;
}
