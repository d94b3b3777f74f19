// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;
use url::Url;

use crate::domain::profiles::models::{ProfileDraft, Repository};
use crate::domain::shared::models::HandleError;
use crate::domain::social::models::SourceAccount;

/// Wire shape of `GET /users/{handle}`. The canonical domain name for
/// `login` is `handle`; the mapping happens here and nowhere else.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub login: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub avatar_url: Option<Url>,
    pub followers_url: Option<Url>,
    pub following_url: Option<Url>,
    pub repos_url: Option<Url>,
}

/// Wire shape of one follower/following listing entry.
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub login: String,
    pub avatar_url: Option<Url>,
}

/// Wire shape of one repository listing entry.
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub html_url: Option<Url>,
    pub language: Option<String>,
}

/// GitHub sends `""` rather than null for blank free-text fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl TryFrom<UserResponse> for ProfileDraft {
    type Error = HandleError;

    fn try_from(response: UserResponse) -> Result<Self, Self::Error> {
        Ok(ProfileDraft {
            handle: response.login.parse()?,
            bio: non_empty(response.bio),
            location: non_empty(response.location),
            blog: non_empty(response.blog),
            public_repos: response.public_repos,
            public_gists: response.public_gists,
            follower_count: response.followers,
            following_count: response.following,
            avatar_url: response.avatar_url,
            followers_url: response.followers_url,
            following_url: response.following_url,
            repos_url: response.repos_url,
        })
    }
}

impl TryFrom<AccountResponse> for SourceAccount {
    type Error = HandleError;

    fn try_from(response: AccountResponse) -> Result<Self, Self::Error> {
        Ok(SourceAccount {
            handle: response.login.parse()?,
            avatar_url: response.avatar_url,
        })
    }
}

impl From<RepoResponse> for Repository {
    fn from(response: RepoResponse) -> Self {
        Repository {
            id: response.id,
            name: response.name,
            description: response.description,
            stargazers_count: response.stargazers_count,
            forks_count: response.forks_count,
            html_url: response.html_url,
            language: response.language,
        }
    }
}
