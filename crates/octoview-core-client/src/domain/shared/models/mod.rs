// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use handle::{Handle, HandleError};
pub use profile_id::ProfileId;
pub use source_error::SourceError;

mod handle;
mod profile_id;
mod source_error;
