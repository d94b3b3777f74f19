// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::app::deps::{AppDependencies, DynProfileRepository, DynProfileSourceService};
use crate::domain::profiles::models::{
    Profile, ProfileChanges, ProfileDraft, ProfileError, ProfileFilter, ProfileSortField,
    Repository,
};
use crate::domain::shared::models::Handle;
use crate::util::ExpiringCache;

/// Reconciles requested handles against the local profile store and adapts
/// remote-source data into profile shape when a handle is seen for the
/// first time.
pub struct ProfilesService {
    profile_repo: DynProfileRepository,
    profile_source_service: DynProfileSourceService,
    repos_cache: ExpiringCache<Handle, Vec<Repository>>,
}

impl From<&AppDependencies> for ProfilesService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            profile_repo: deps.profile_repo.clone(),
            profile_source_service: deps.profile_source_service.clone(),
            repos_cache: ExpiringCache::new(
                deps.config.repos_cache_ttl,
                deps.time_provider.clone(),
            ),
        }
    }
}

impl ProfilesService {
    /// The locally stored profile for `handle`. Never talks to the remote
    /// source and has no side effects; absence is a normal outcome.
    pub async fn lookup(&self, handle: &Handle) -> Result<Option<Profile>, ProfileError> {
        Ok(self.profile_repo.get(handle).await?)
    }

    /// The locally stored profile for `handle`, populated from the remote
    /// source on first sight. One remote round trip on a miss, no retries;
    /// a handle unknown to the source resolves to `None`. Once a local row
    /// exists the source is never asked again.
    pub async fn load_or_populate(&self, handle: &Handle) -> Result<Option<Profile>, ProfileError> {
        if let Some(profile) = self.profile_repo.get(handle).await? {
            return Ok(Some(profile));
        }

        debug!("No stored profile for {handle}. Asking the profile source…");
        let Some(draft) = self.profile_source_service.load_profile(handle).await? else {
            return Ok(None);
        };
        Ok(Some(self.profile_repo.put(draft).await?))
    }

    /// Stores `draft` under its handle, unless a row with that handle
    /// already exists, in which case the existing row is returned with none
    /// of its fields overwritten. Local edits always win over stale remote
    /// data.
    pub async fn create_or_replace(&self, draft: ProfileDraft) -> Result<Profile, ProfileError> {
        Ok(self.profile_repo.put(draft).await?)
    }

    /// Merges the set fields of `changes` into the stored profile. `None`
    /// when no non-deleted row exists for `handle`.
    pub async fn update(
        &self,
        handle: &Handle,
        changes: ProfileChanges,
    ) -> Result<Option<Profile>, ProfileError> {
        Ok(self.profile_repo.update(handle, changes).await?)
    }

    /// Marks the stored profile deleted. Reads stop returning it; the row
    /// itself is retained.
    pub async fn delete(&self, handle: &Handle) -> Result<bool, ProfileError> {
        Ok(self.profile_repo.soft_delete(handle).await?)
    }

    pub async fn search(
        &self,
        filter: &ProfileFilter,
        sort: Option<ProfileSortField>,
    ) -> Result<Vec<Profile>, ProfileError> {
        Ok(self.profile_repo.search(filter, sort).await?)
    }

    pub async fn list_all(
        &self,
        sort: Option<ProfileSortField>,
    ) -> Result<Vec<Profile>, ProfileError> {
        self.search(&ProfileFilter::default(), sort).await
    }

    /// The account's repositories straight from the remote source, memoized
    /// for the configured TTL so browsing back and forth does not hammer
    /// the source.
    pub async fn load_repositories(
        &self,
        handle: &Handle,
    ) -> Result<Vec<Repository>, ProfileError> {
        self.repos_cache
            .get_or_fetch(handle, || async {
                self.profile_source_service.load_repositories(handle).await
            })
            .await
            .map_err(ProfileError::from)
    }
}
