// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mutual_friend::MutualFriend;
pub use social_error::SocialError;
pub use source_account::SourceAccount;

mod mutual_friend;
mod social_error;
mod source_account;
