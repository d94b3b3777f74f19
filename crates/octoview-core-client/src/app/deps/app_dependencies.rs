// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::AppConfig;
use crate::domain::profiles::repos::ProfileRepository;
use crate::domain::profiles::services::ProfileSourceService;
use crate::domain::social::services::SocialGraphService;
use crate::util::TimeProvider;

pub type DynProfileRepository = Arc<dyn ProfileRepository>;
pub type DynProfileSourceService = Arc<dyn ProfileSourceService>;
pub type DynSocialGraphService = Arc<dyn SocialGraphService>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub config: AppConfig,
    pub profile_repo: DynProfileRepository,
    pub profile_source_service: DynProfileSourceService,
    pub social_graph_service: DynSocialGraphService,
    pub time_provider: DynTimeProvider,
}
