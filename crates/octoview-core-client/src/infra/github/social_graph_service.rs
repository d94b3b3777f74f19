// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::shared::models::{Handle, SourceError};
use crate::domain::social::models::SourceAccount;
use crate::domain::social::services::SocialGraphService;
use crate::infra::github::type_conversions::AccountResponse;
use crate::infra::github::GithubClient;

#[async_trait]
impl SocialGraphService for GithubClient {
    async fn load_followers(&self, handle: &Handle) -> Result<Vec<SourceAccount>, SourceError> {
        self.load_accounts(&["users", handle.as_str(), "followers"])
            .await
    }

    async fn load_following(&self, handle: &Handle) -> Result<Vec<SourceAccount>, SourceError> {
        self.load_accounts(&["users", handle.as_str(), "following"])
            .await
    }
}

impl GithubClient {
    async fn load_accounts(&self, segments: &[&str]) -> Result<Vec<SourceAccount>, SourceError> {
        let responses = self.get_json_paginated::<AccountResponse>(segments).await?;
        responses
            .into_iter()
            .map(|response| {
                SourceAccount::try_from(response)
                    .map_err(|err| SourceError::Malformed(err.to_string()))
            })
            .collect()
    }
}
