// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{Handle, ProfileId};

/// The locally stored mirror of an account's public data at the remote
/// profile source.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub handle: Handle,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub public_repos: u32,
    pub public_gists: u32,
    pub follower_count: u32,
    pub following_count: u32,
    pub avatar_url: Option<Url>,
    pub followers_url: Option<Url>,
    pub following_url: Option<Url>,
    pub repos_url: Option<Url>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything a caller may supply when creating a profile. The store fills in
/// the identifier, the deletion flag and both timestamps.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub handle: Handle,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub public_repos: u32,
    pub public_gists: u32,
    pub follower_count: u32,
    pub following_count: u32,
    pub avatar_url: Option<Url>,
    pub followers_url: Option<Url>,
    pub following_url: Option<Url>,
    pub repos_url: Option<Url>,
}

/// A partial edit. Fields left at `None` are not touched.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ProfileChanges {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub public_repos: Option<u32>,
    pub public_gists: Option<u32>,
    pub follower_count: Option<u32>,
    pub following_count: Option<u32>,
    pub avatar_url: Option<Url>,
    pub followers_url: Option<Url>,
    pub following_url: Option<Url>,
    pub repos_url: Option<Url>,
}

impl ProfileDraft {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            bio: None,
            location: None,
            blog: None,
            public_repos: 0,
            public_gists: 0,
            follower_count: 0,
            following_count: 0,
            avatar_url: None,
            followers_url: None,
            following_url: None,
            repos_url: None,
        }
    }
}

impl Profile {
    /// Materializes a draft into a fresh row. Used by stores when a
    /// find-or-create misses.
    pub fn from_draft(draft: ProfileDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: ProfileId::new(),
            handle: draft.handle,
            bio: draft.bio,
            location: draft.location,
            blog: draft.blog,
            public_repos: draft.public_repos,
            public_gists: draft.public_gists,
            follower_count: draft.follower_count,
            following_count: draft.following_count,
            avatar_url: draft.avatar_url,
            followers_url: draft.followers_url,
            following_url: draft.following_url,
            repos_url: draft.repos_url,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the set fields of `changes` into the profile and refreshes
    /// `updated_at`.
    pub fn apply(&mut self, changes: ProfileChanges, now: DateTime<Utc>) {
        if let Some(bio) = changes.bio {
            self.bio = Some(bio);
        }
        if let Some(location) = changes.location {
            self.location = Some(location);
        }
        if let Some(blog) = changes.blog {
            self.blog = Some(blog);
        }
        if let Some(public_repos) = changes.public_repos {
            self.public_repos = public_repos;
        }
        if let Some(public_gists) = changes.public_gists {
            self.public_gists = public_gists;
        }
        if let Some(follower_count) = changes.follower_count {
            self.follower_count = follower_count;
        }
        if let Some(following_count) = changes.following_count {
            self.following_count = following_count;
        }
        if let Some(avatar_url) = changes.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(followers_url) = changes.followers_url {
            self.followers_url = Some(followers_url);
        }
        if let Some(following_url) = changes.following_url {
            self.following_url = Some(following_url);
        }
        if let Some(repos_url) = changes.repos_url {
            self.repos_url = Some(repos_url);
        }
        self.updated_at = now;
    }
}
