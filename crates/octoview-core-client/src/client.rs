// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::services::{ProfilesService, SocialService};
use crate::ClientBuilder;

/// Entry point of the core. An HTTP layer (or any other shell) holds one of
/// these and forwards each inbound operation to the matching service method.
pub struct Client {
    /// Lookup, populate-on-miss, edit, soft-delete and search of stored
    /// profiles, plus repository browsing.
    pub profiles: ProfilesService,
    /// Follower, following and mutual-friend queries.
    pub social: SocialService,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}
