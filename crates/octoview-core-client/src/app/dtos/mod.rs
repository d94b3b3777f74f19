// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use crate::domain::{
    profiles::models::{
        Profile, ProfileChanges, ProfileDraft, ProfileError, ProfileFilter, ProfileSortField,
        Repository,
    },
    shared::models::{Handle, HandleError, ProfileId, SourceError},
    social::models::{MutualFriend, SocialError, SourceAccount},
};
