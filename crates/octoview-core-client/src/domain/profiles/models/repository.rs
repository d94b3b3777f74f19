// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

/// Summary of a repository owned by an account at the remote profile source.
/// Fetched for browsing, never persisted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub html_url: Option<Url>,
    pub language: Option<String>,
}
