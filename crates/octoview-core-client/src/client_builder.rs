// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::app::deps::{
    AppConfig, AppDependencies, DynProfileRepository, DynProfileSourceService,
    DynSocialGraphService, DynTimeProvider,
};
use crate::app::services::{ProfilesService, SocialService};
use crate::infra::github::GithubClient;
use crate::util::SystemTimeProvider;
use crate::Client;

pub struct ClientBuilder {
    config: AppConfig,
    profile_repo: Option<DynProfileRepository>,
    profile_source_service: Option<DynProfileSourceService>,
    social_graph_service: Option<DynSocialGraphService>,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: AppConfig::default(),
            profile_repo: None,
            profile_source_service: None,
            social_graph_service: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_profile_repository(mut self, profile_repo: DynProfileRepository) -> Self {
        self.profile_repo = Some(profile_repo);
        self
    }

    pub fn set_profile_source_service(mut self, service: DynProfileSourceService) -> Self {
        self.profile_source_service = Some(service);
        self
    }

    pub fn set_social_graph_service(mut self, service: DynSocialGraphService) -> Self {
        self.social_graph_service = Some(service);
        self
    }

    pub fn set_time_provider(mut self, time_provider: DynTimeProvider) -> Self {
        self.time_provider = time_provider;
        self
    }

    /// Builds the client. A profile repository must have been set; the
    /// remote-source services default to a [`GithubClient`] configured from
    /// the builder's config.
    pub fn build(self) -> Result<Client> {
        let profile_repo = self.profile_repo.context(
            "Cannot build a Client without a profile repository. Call set_profile_repository.",
        )?;

        let (profile_source_service, social_graph_service) =
            match (self.profile_source_service, self.social_graph_service) {
                (Some(profile_source), Some(social_graph)) => (profile_source, social_graph),
                (profile_source, social_graph) => {
                    let github = Arc::new(GithubClient::new(&self.config)?);
                    (
                        profile_source
                            .unwrap_or_else(|| github.clone() as DynProfileSourceService),
                        social_graph.unwrap_or_else(|| github as DynSocialGraphService),
                    )
                }
            };

        let deps = AppDependencies {
            config: self.config,
            profile_repo,
            profile_source_service,
            social_graph_service,
            time_provider: self.time_provider,
        };

        Ok(Client {
            profiles: ProfilesService::from(&deps),
            social: SocialService::from(&deps),
        })
    }
}
