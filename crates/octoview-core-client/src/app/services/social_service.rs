// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use crate::app::deps::{AppDependencies, DynSocialGraphService};
use crate::domain::shared::models::Handle;
use crate::domain::social::models::{MutualFriend, SocialError, SourceAccount};

/// Follower-graph queries against the remote profile source. Nothing here
/// touches the local store; results are computed fresh on every call.
pub struct SocialService {
    social_graph_service: DynSocialGraphService,
}

impl From<&AppDependencies> for SocialService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            social_graph_service: deps.social_graph_service.clone(),
        }
    }
}

impl SocialService {
    pub async fn load_followers(&self, handle: &Handle) -> Result<Vec<SourceAccount>, SocialError> {
        Ok(self.social_graph_service.load_followers(handle).await?)
    }

    pub async fn load_following(&self, handle: &Handle) -> Result<Vec<SourceAccount>, SocialError> {
        Ok(self.social_graph_service.load_following(handle).await?)
    }

    /// The accounts that simultaneously follow and are followed by
    /// `handle`, in the order the followers list returns them. Intersection
    /// is keyed on the account handle, not on object identity. Empty lists
    /// on either side simply yield an empty result.
    pub async fn load_mutual_friends(
        &self,
        handle: &Handle,
    ) -> Result<Vec<MutualFriend>, SocialError> {
        let followers = self.social_graph_service.load_followers(handle).await?;
        let following = self.social_graph_service.load_following(handle).await?;

        let followed = following
            .iter()
            .map(|account| &account.handle)
            .collect::<HashSet<_>>();

        Ok(followers
            .into_iter()
            .filter(|account| followed.contains(&account.handle))
            .map(MutualFriend::from)
            .collect())
    }
}
