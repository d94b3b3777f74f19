// octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

use octoview_core_client::domain::profiles::services::ProfileSourceService;
use octoview_core_client::domain::social::services::SocialGraphService;
use octoview_core_client::dtos::{Handle, SourceError};
use octoview_core_client::handle;
use octoview_core_client::{AppConfig, GithubClient};

use crate::tests::async_test;
use crate::tests::helpers::github_stub::{self, json as json_body, StubResponse};

fn client(base_url: &str) -> Result<GithubClient> {
    let config = AppConfig {
        source_base_url: Url::parse(base_url)?,
        source_timeout: Duration::from_millis(250),
        source_page_size: 2,
        ..AppConfig::default()
    };
    Ok(GithubClient::new(&config)?)
}

#[async_test]
async fn test_loads_and_maps_profile() -> Result<()> {
    let base_url = github_stub::start(HashMap::from([(
        "/users/octocat".to_string(),
        json_body(json!({
            "login": "octocat",
            "bio": "There once was…",
            "location": "San Francisco",
            "blog": "",
            "public_repos": 8,
            "public_gists": 8,
            "followers": 5000,
            "following": 9,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "followers_url": "https://api.github.com/users/octocat/followers",
            "following_url": "https://api.github.com/users/octocat/following{/other_user}",
            "repos_url": "https://api.github.com/users/octocat/repos",
        })),
    )]));

    let draft = client(&base_url)?
        .load_profile(&handle!("octocat"))
        .await?
        .expect("Profile should exist");

    assert_eq!(draft.handle, handle!("octocat"));
    assert_eq!(draft.bio.as_deref(), Some("There once was…"));
    assert_eq!(draft.location.as_deref(), Some("San Francisco"));
    // GitHub sends "" for a blank blog; the draft should carry no value.
    assert_eq!(draft.blog, None);
    assert_eq!(draft.public_repos, 8);
    assert_eq!(draft.follower_count, 5000);
    assert_eq!(draft.following_count, 9);
    assert!(draft.avatar_url.is_some());
    assert!(draft.repos_url.is_some());
    Ok(())
}

#[async_test]
async fn test_unknown_account_resolves_to_none() -> Result<()> {
    let base_url = github_stub::start(HashMap::new());

    let profile = client(&base_url)?.load_profile(&handle!("ghost")).await?;
    assert_eq!(profile, None);
    Ok(())
}

#[async_test]
async fn test_walks_every_follower_page() -> Result<()> {
    let base_url = github_stub::start(HashMap::from([
        (
            "/users/u/followers?per_page=2&page=1".to_string(),
            json_body(json!([
                { "login": "a", "avatar_url": "https://avatars.example.com/a" },
                { "login": "b", "avatar_url": "https://avatars.example.com/b" },
            ])),
        ),
        (
            "/users/u/followers?per_page=2&page=2".to_string(),
            json_body(json!([
                { "login": "c", "avatar_url": "https://avatars.example.com/c" },
            ])),
        ),
    ]));

    let followers = client(&base_url)?.load_followers(&handle!("u")).await?;
    assert_eq!(
        followers
            .iter()
            .map(|account| account.handle.clone())
            .collect::<Vec<_>>(),
        vec![handle!("a"), handle!("b"), handle!("c")]
    );
    Ok(())
}

#[async_test]
async fn test_stops_after_a_trailing_empty_page() -> Result<()> {
    let base_url = github_stub::start(HashMap::from([
        (
            "/users/u/following?per_page=2&page=1".to_string(),
            json_body(json!([
                { "login": "a", "avatar_url": null },
                { "login": "b", "avatar_url": null },
            ])),
        ),
        (
            "/users/u/following?per_page=2&page=2".to_string(),
            json_body(json!([])),
        ),
    ]));

    let following = client(&base_url)?.load_following(&handle!("u")).await?;
    assert_eq!(following.len(), 2);
    Ok(())
}

#[async_test]
async fn test_follower_listing_of_unknown_account_fails() -> Result<()> {
    let base_url = github_stub::start(HashMap::new());

    let result = client(&base_url)?.load_followers(&handle!("ghost")).await;
    assert_eq!(result, Err(SourceError::NotFound));
    Ok(())
}

#[async_test]
async fn test_rate_limiting_surfaces_as_status_error() -> Result<()> {
    let base_url = github_stub::start(HashMap::from([(
        "/users/u/followers?per_page=2&page=1".to_string(),
        StubResponse::Status(403),
    )]));

    let result = client(&base_url)?.load_followers(&handle!("u")).await;
    assert_eq!(result, Err(SourceError::Status(403)));
    Ok(())
}

#[async_test]
async fn test_slow_source_surfaces_as_timeout() -> Result<()> {
    let base_url = github_stub::start(HashMap::from([(
        "/users/octocat".to_string(),
        StubResponse::SlowJson("{}".to_string(), Duration::from_secs(2)),
    )]));

    let result = client(&base_url)?.load_profile(&handle!("octocat")).await;
    assert_eq!(result, Err(SourceError::Timeout));
    Ok(())
}

#[async_test]
async fn test_loads_and_maps_repositories() -> Result<()> {
    let base_url = github_stub::start(HashMap::from([(
        "/users/octocat/repos?per_page=2&page=1".to_string(),
        json_body(json!([
            {
                "id": 1300192,
                "name": "Spoon-Knife",
                "description": "This repo is for demonstration purposes only.",
                "stargazers_count": 12000,
                "forks_count": 140000,
                "html_url": "https://github.com/octocat/Spoon-Knife",
                "language": "HTML",
            },
        ])),
    )]));

    let repos = client(&base_url)?.load_repositories(&handle!("octocat")).await?;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "Spoon-Knife");
    assert_eq!(repos[0].stargazers_count, 12000);
    assert_eq!(repos[0].language.as_deref(), Some("HTML"));
    Ok(())
}
