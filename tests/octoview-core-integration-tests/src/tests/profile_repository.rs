// octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use pretty_assertions::assert_eq;

use octoview_core_client::domain::profiles::repos::ProfileRepository;
use octoview_core_client::dtos::{
    Handle, ProfileChanges, ProfileDraft, ProfileFilter, ProfileSortField,
};
use octoview_core_client::handle;
use octoview_core_client::test::ConstantTimeProvider;
use octoview_core_client::{InMemoryProfileRepository, SqliteProfileRepository};

use crate::tests::async_test;

struct TestRepo<R> {
    repo: R,
    clock: Arc<ConstantTimeProvider>,
}

fn in_memory() -> TestRepo<InMemoryProfileRepository> {
    let clock = Arc::new(ConstantTimeProvider::ymd_hms(2024, 5, 1, 10, 0, 0));
    TestRepo {
        repo: InMemoryProfileRepository::new(clock.clone()),
        clock,
    }
}

async fn sqlite() -> Result<TestRepo<SqliteProfileRepository>> {
    let clock = Arc::new(ConstantTimeProvider::ymd_hms(2024, 5, 1, 10, 0, 0));
    Ok(TestRepo {
        repo: SqliteProfileRepository::open_in_memory(clock.clone()).await?,
        clock,
    })
}

fn draft(handle: &str) -> ProfileDraft {
    ProfileDraft::new(handle!(handle))
}

#[async_test]
async fn test_get_is_idempotent() -> Result<()> {
    check_get_is_idempotent(in_memory()).await?;
    check_get_is_idempotent(sqlite().await?).await?;
    Ok(())
}

async fn check_get_is_idempotent(t: TestRepo<impl ProfileRepository>) -> Result<()> {
    let mut new_profile = draft("octocat");
    new_profile.follower_count = 5;
    t.repo.put(new_profile).await?;

    let first = t.repo.get(&handle!("octocat")).await?;
    let second = t.repo.get(&handle!("octocat")).await?;
    assert_eq!(first, second);
    assert_eq!(first.map(|p| p.follower_count), Some(5));
    Ok(())
}

#[async_test]
async fn test_put_leaves_existing_rows_untouched() -> Result<()> {
    check_put_leaves_existing_rows_untouched(in_memory()).await?;
    check_put_leaves_existing_rows_untouched(sqlite().await?).await?;
    Ok(())
}

async fn check_put_leaves_existing_rows_untouched(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    let mut new_profile = draft("alice");
    new_profile.bio = Some("Original bio".to_string());
    new_profile.follower_count = 5;
    let stored = t.repo.put(new_profile).await?;

    let mut conflicting = draft("alice");
    conflicting.bio = Some("Stale remote bio".to_string());
    conflicting.follower_count = 99;
    let result = t.repo.put(conflicting).await?;

    assert_eq!(result, stored);
    assert_eq!(
        t.repo.get(&handle!("alice")).await?.as_ref(),
        Some(&stored)
    );
    Ok(())
}

#[async_test]
async fn test_update_merges_only_supplied_fields() -> Result<()> {
    check_update_merges_only_supplied_fields(in_memory()).await?;
    check_update_merges_only_supplied_fields(sqlite().await?).await?;
    Ok(())
}

async fn check_update_merges_only_supplied_fields(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    let mut new_profile = draft("alice");
    new_profile.bio = Some("old".to_string());
    new_profile.location = Some("Lisbon".to_string());
    new_profile.follower_count = 7;
    let stored = t.repo.put(new_profile).await?;

    t.clock.advance(Duration::minutes(5));

    let updated = t
        .repo
        .update(
            &handle!("alice"),
            ProfileChanges {
                bio: Some("new".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("Profile should exist");

    assert_eq!(updated.bio.as_deref(), Some("new"));
    assert_eq!(updated.location.as_deref(), Some("Lisbon"));
    assert_eq!(updated.follower_count, 7);
    assert_eq!(updated.created_at, stored.created_at);
    assert_eq!(updated.updated_at, stored.updated_at + Duration::minutes(5));

    assert_eq!(
        t.repo.get(&handle!("alice")).await?.as_ref(),
        Some(&updated)
    );
    Ok(())
}

#[async_test]
async fn test_update_of_unknown_handle_resolves_to_none() -> Result<()> {
    check_update_of_unknown_handle_resolves_to_none(in_memory()).await?;
    check_update_of_unknown_handle_resolves_to_none(sqlite().await?).await?;
    Ok(())
}

async fn check_update_of_unknown_handle_resolves_to_none(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    let updated = t
        .repo
        .update(&handle!("nobody"), ProfileChanges::default())
        .await?;
    assert_eq!(updated, None);
    Ok(())
}

#[async_test]
async fn test_soft_deleted_rows_are_invisible_but_keep_their_handle() -> Result<()> {
    check_soft_deleted_rows_are_invisible_but_keep_their_handle(in_memory()).await?;
    check_soft_deleted_rows_are_invisible_but_keep_their_handle(sqlite().await?).await?;
    Ok(())
}

async fn check_soft_deleted_rows_are_invisible_but_keep_their_handle(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    t.repo.put(draft("alice")).await?;
    t.repo.put(draft("bob")).await?;

    assert_eq!(t.repo.soft_delete(&handle!("alice")).await?, true);
    assert_eq!(t.repo.get(&handle!("alice")).await?, None);
    // A second delete sees no non-deleted row anymore.
    assert_eq!(t.repo.soft_delete(&handle!("alice")).await?, false);

    let all = t
        .repo
        .search(&ProfileFilter::default(), None)
        .await?
        .into_iter()
        .map(|p| p.handle)
        .collect::<Vec<_>>();
    assert_eq!(all, vec![handle!("bob")]);

    // The row still owns its handle: find-or-create hands it back instead
    // of creating a second row, and it stays invisible to reads.
    let returned = t.repo.put(draft("alice")).await?;
    assert_eq!(returned.is_deleted, true);
    assert_eq!(t.repo.get(&handle!("alice")).await?, None);
    Ok(())
}

#[async_test]
async fn test_padded_handles_resolve_to_the_same_profile() -> Result<()> {
    check_padded_handles_resolve_to_the_same_profile(in_memory()).await?;
    check_padded_handles_resolve_to_the_same_profile(sqlite().await?).await?;
    Ok(())
}

async fn check_padded_handles_resolve_to_the_same_profile(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    let stored = t.repo.put(draft("octocat")).await?;

    assert_eq!(
        t.repo.get(&handle!(" octocat ")).await?.as_ref(),
        Some(&stored)
    );
    assert_eq!(
        t.repo.get(&handle!("octocat")).await?.as_ref(),
        Some(&stored)
    );
    Ok(())
}

#[async_test]
async fn test_search_matches_exactly_on_set_fields() -> Result<()> {
    check_search_matches_exactly_on_set_fields(in_memory()).await?;
    check_search_matches_exactly_on_set_fields(sqlite().await?).await?;
    Ok(())
}

async fn check_search_matches_exactly_on_set_fields(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    let mut alice = draft("alice");
    alice.location = Some("Paris".to_string());
    alice.follower_count = 10;
    t.repo.put(alice).await?;

    let mut bob = draft("bob");
    bob.location = Some("Paris".to_string());
    bob.follower_count = 20;
    t.repo.put(bob).await?;

    let mut carol = draft("carol");
    carol.location = Some("Berlin".to_string());
    carol.follower_count = 10;
    t.repo.put(carol).await?;

    let parisians = t
        .repo
        .search(
            &ProfileFilter {
                location: Some("Paris".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(
        parisians.iter().map(|p| p.handle.clone()).collect::<Vec<_>>(),
        vec![handle!("alice"), handle!("bob")]
    );

    let ten_followers_in_paris = t
        .repo
        .search(
            &ProfileFilter {
                location: Some("Paris".to_string()),
                follower_count: Some(10),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(
        ten_followers_in_paris
            .iter()
            .map(|p| p.handle.clone())
            .collect::<Vec<_>>(),
        vec![handle!("alice")]
    );

    // An empty filter returns every non-deleted profile in insertion order.
    let all = t.repo.search(&ProfileFilter::default(), None).await?;
    assert_eq!(
        all.iter().map(|p| p.handle.clone()).collect::<Vec<_>>(),
        vec![handle!("alice"), handle!("bob"), handle!("carol")]
    );
    Ok(())
}

#[async_test]
async fn test_search_orders_descending_by_sort_field() -> Result<()> {
    check_search_orders_descending_by_sort_field(in_memory()).await?;
    check_search_orders_descending_by_sort_field(sqlite().await?).await?;
    Ok(())
}

async fn check_search_orders_descending_by_sort_field(
    t: TestRepo<impl ProfileRepository>,
) -> Result<()> {
    let mut alice = draft("alice");
    alice.follower_count = 1;
    t.repo.put(alice).await?;

    let mut bob = draft("bob");
    bob.follower_count = 3;
    t.repo.put(bob).await?;

    let mut carol = draft("carol");
    carol.follower_count = 2;
    t.repo.put(carol).await?;

    let by_followers = t
        .repo
        .search(
            &ProfileFilter::default(),
            Some(ProfileSortField::FollowerCount),
        )
        .await?;
    assert_eq!(
        by_followers
            .iter()
            .map(|p| p.handle.clone())
            .collect::<Vec<_>>(),
        vec![handle!("bob"), handle!("carol"), handle!("alice")]
    );

    let by_handle = t
        .repo
        .search(&ProfileFilter::default(), Some(ProfileSortField::Handle))
        .await?;
    assert_eq!(
        by_handle
            .iter()
            .map(|p| p.handle.clone())
            .collect::<Vec<_>>(),
        vec![handle!("carol"), handle!("bob"), handle!("alice")]
    );
    Ok(())
}

#[async_test]
async fn test_sqlite_rows_survive_reopening() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("profiles.sqlite");
    let clock = Arc::new(ConstantTimeProvider::ymd_hms(2024, 5, 1, 10, 0, 0));

    {
        let repo = SqliteProfileRepository::open_at(&db_path, clock.clone()).await?;
        let mut new_profile = draft("octocat");
        new_profile.bio = Some("There once was…".to_string());
        repo.put(new_profile).await?;
    }

    let repo = SqliteProfileRepository::open_at(&db_path, clock).await?;
    let stored = repo.get(&handle!("octocat")).await?.expect("Row should survive");
    assert_eq!(stored.bio.as_deref(), Some("There once was…"));
    Ok(())
}
