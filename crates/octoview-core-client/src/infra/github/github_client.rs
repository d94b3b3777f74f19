// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::app::deps::AppConfig;
use crate::domain::shared::models::SourceError;

/// GitHub requires a User-Agent on every API request.
const USER_AGENT: &str = concat!("octoview-core-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub REST API. Implements the remote-source
/// services; every request carries the bounded timeout from the config and
/// is attempted exactly once.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: Url,
    page_size: u32,
}

impl GithubClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        if config.source_base_url.cannot_be_a_base() {
            bail!(
                "'{}' cannot act as an API base URL.",
                config.source_base_url
            );
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.source_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.source_base_url.clone(),
            page_size: config.source_page_size,
        })
    }
}

impl GithubClient {
    pub(super) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("Base URL validated at construction")
            .pop_if_empty()
            .extend(segments);
        url
    }

    pub(super) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await.map_err(SourceError::from)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }
        if !status.is_success() {
            warn!("Profile source responded with status {status}");
            return Err(SourceError::Status(status.as_u16()));
        }
        response.json::<T>().await.map_err(SourceError::from)
    }

    /// Walks a paginated listing until the source hands back a short page and
    /// returns the concatenation, i.e. the full set visible at call time.
    pub(super) async fn get_json_paginated<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Vec<T>, SourceError> {
        let mut items = Vec::new();
        let mut page = 1u32;
        loop {
            let mut url = self.endpoint(segments);
            url.query_pairs_mut()
                .append_pair("per_page", &self.page_size.to_string())
                .append_pair("page", &page.to_string());

            let batch = self.get_json::<Vec<T>>(url).await?;
            let batch_len = batch.len();
            items.extend(batch);

            if (batch_len as u32) < self.page_size {
                break;
            }
            page += 1;
        }
        Ok(items)
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SourceError::Timeout
        } else if error.is_decode() {
            SourceError::Malformed(error.to_string())
        } else {
            SourceError::Transport(error.to_string())
        }
    }
}
