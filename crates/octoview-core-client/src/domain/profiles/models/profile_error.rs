// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
