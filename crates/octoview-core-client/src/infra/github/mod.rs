// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use github_client::GithubClient;

mod github_client;
mod profile_source_service;
mod social_graph_service;
mod type_conversions;
