// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::profiles::models::{ProfileDraft, Repository};
use crate::domain::profiles::services::ProfileSourceService;
use crate::domain::shared::models::{Handle, SourceError};
use crate::infra::github::type_conversions::{RepoResponse, UserResponse};
use crate::infra::github::GithubClient;

#[async_trait]
impl ProfileSourceService for GithubClient {
    async fn load_profile(&self, handle: &Handle) -> Result<Option<ProfileDraft>, SourceError> {
        let url = self.endpoint(&["users", handle.as_str()]);
        let response = match self.get_json::<UserResponse>(url).await {
            Ok(response) => response,
            Err(SourceError::NotFound) => return Ok(None),
            Err(error) => return Err(error),
        };
        let draft =
            ProfileDraft::try_from(response).map_err(|err| SourceError::Malformed(err.to_string()))?;
        Ok(Some(draft))
    }

    async fn load_repositories(&self, handle: &Handle) -> Result<Vec<Repository>, SourceError> {
        let responses = self
            .get_json_paginated::<RepoResponse>(&["users", handle.as_str(), "repos"])
            .await?;
        Ok(responses.into_iter().map(Repository::from).collect())
    }
}
