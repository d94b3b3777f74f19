// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::dtos;
pub use client::Client;
pub use client_builder::ClientBuilder;
pub use infra::github::GithubClient;
pub use infra::profiles::{InMemoryProfileRepository, SqliteProfileRepository};
pub use util::{SystemTimeProvider, TimeProvider};


pub mod app;
mod client;
mod client_builder;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

#[cfg(feature = "test")]
pub mod util;
#[cfg(not(feature = "test"))]
pub(crate) mod util;
