// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::Handle;

/// One entry of a follower or following listing at the remote profile
/// source. The source exposes no display name at this stage, only the
/// handle and an avatar.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SourceAccount {
    pub handle: Handle,
    pub avatar_url: Option<Url>,
}
