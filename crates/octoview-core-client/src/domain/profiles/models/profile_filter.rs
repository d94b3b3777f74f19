// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::profiles::models::Profile;
use crate::domain::shared::models::Handle;

/// Exact-match filter over stored profiles. Every set field must match;
/// an empty filter matches everything.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFilter {
    pub handle: Option<Handle>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub public_repos: Option<u32>,
    pub public_gists: Option<u32>,
    pub follower_count: Option<u32>,
    pub following_count: Option<u32>,
}

impl ProfileFilter {
    pub fn matches(&self, profile: &Profile) -> bool {
        fn field_matches<T: PartialEq>(filter: &Option<T>, value: &T) -> bool {
            filter.as_ref().map(|f| f == value).unwrap_or(true)
        }

        fn optional_field_matches<T: PartialEq>(filter: &Option<T>, value: &Option<T>) -> bool {
            filter
                .as_ref()
                .map(|f| value.as_ref() == Some(f))
                .unwrap_or(true)
        }

        field_matches(&self.handle, &profile.handle)
            && optional_field_matches(&self.bio, &profile.bio)
            && optional_field_matches(&self.location, &profile.location)
            && optional_field_matches(&self.blog, &profile.blog)
            && field_matches(&self.public_repos, &profile.public_repos)
            && field_matches(&self.public_gists, &profile.public_gists)
            && field_matches(&self.follower_count, &profile.follower_count)
            && field_matches(&self.following_count, &profile.following_count)
    }
}

/// A single field search results can be ordered by (always descending,
/// matching the search surface's `sortBy` parameter).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ProfileSortField {
    Handle,
    PublicRepos,
    PublicGists,
    FollowerCount,
    FollowingCount,
    CreatedAt,
    UpdatedAt,
}

impl ProfileSortField {
    /// Column name in the SQL store.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Handle => "handle",
            Self::PublicRepos => "public_repos",
            Self::PublicGists => "public_gists",
            Self::FollowerCount => "follower_count",
            Self::FollowingCount => "following_count",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// Ascending comparison of two profiles by this field. Callers flip the
    /// operands for the descending order the search surface uses.
    pub fn compare(&self, lhs: &Profile, rhs: &Profile) -> Ordering {
        match self {
            Self::Handle => lhs.handle.cmp(&rhs.handle),
            Self::PublicRepos => lhs.public_repos.cmp(&rhs.public_repos),
            Self::PublicGists => lhs.public_gists.cmp(&rhs.public_gists),
            Self::FollowerCount => lhs.follower_count.cmp(&rhs.follower_count),
            Self::FollowingCount => lhs.following_count.cmp(&rhs.following_count),
            Self::CreatedAt => lhs.created_at.cmp(&rhs.created_at),
            Self::UpdatedAt => lhs.updated_at.cmp(&rhs.updated_at),
        }
    }
}
