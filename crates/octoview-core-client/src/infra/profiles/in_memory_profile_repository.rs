// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::profiles::models::{
    Profile, ProfileChanges, ProfileDraft, ProfileFilter, ProfileSortField,
};
use crate::domain::profiles::repos::ProfileRepository;
use crate::domain::shared::models::Handle;
use crate::util::TimeProvider;

/// Insertion-ordered in-memory store. Backs unit and service tests; the
/// durable store is [`super::SqliteProfileRepository`].
pub struct InMemoryProfileRepository {
    profiles: RwLock<IndexMap<Handle, Profile>>,
    time_provider: Arc<dyn TimeProvider>,
}

impl InMemoryProfileRepository {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            profiles: RwLock::new(IndexMap::new()),
            time_provider,
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, handle: &Handle) -> Result<Option<Profile>> {
        Ok(self
            .profiles
            .read()
            .get(handle)
            .filter(|profile| !profile.is_deleted)
            .cloned())
    }

    async fn put(&self, draft: ProfileDraft) -> Result<Profile> {
        let mut profiles = self.profiles.write();
        if let Some(existing) = profiles.get(&draft.handle) {
            return Ok(existing.clone());
        }
        let profile = Profile::from_draft(draft, self.time_provider.now());
        profiles.insert(profile.handle.clone(), profile.clone());
        Ok(profile)
    }

    async fn update(&self, handle: &Handle, changes: ProfileChanges) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.write();
        let Some(profile) = profiles
            .get_mut(handle)
            .filter(|profile| !profile.is_deleted)
        else {
            return Ok(None);
        };
        profile.apply(changes, self.time_provider.now());
        Ok(Some(profile.clone()))
    }

    async fn soft_delete(&self, handle: &Handle) -> Result<bool> {
        let mut profiles = self.profiles.write();
        let Some(profile) = profiles
            .get_mut(handle)
            .filter(|profile| !profile.is_deleted)
        else {
            return Ok(false);
        };
        profile.is_deleted = true;
        profile.updated_at = self.time_provider.now();
        Ok(true)
    }

    async fn search(
        &self,
        filter: &ProfileFilter,
        sort: Option<ProfileSortField>,
    ) -> Result<Vec<Profile>> {
        let profiles = self.profiles.read();
        let mut matches = profiles
            .values()
            .filter(|profile| !profile.is_deleted && filter.matches(profile))
            .cloned()
            .collect::<Vec<_>>();
        if let Some(sort) = sort {
            matches.sort_by(|lhs, rhs| sort.compare(rhs, lhs));
        }
        Ok(matches)
    }
}
