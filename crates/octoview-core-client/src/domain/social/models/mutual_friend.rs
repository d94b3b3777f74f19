// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::Handle;
use crate::domain::social::models::SourceAccount;

/// An account that both follows and is followed by the queried handle.
/// Computed fresh on every request; never persisted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MutualFriend {
    pub handle: Handle,
    pub avatar_url: Option<Url>,
}

impl From<SourceAccount> for MutualFriend {
    fn from(account: SourceAccount) -> Self {
        MutualFriend {
            handle: account.handle,
            avatar_url: account.avatar_url,
        }
    }
}
