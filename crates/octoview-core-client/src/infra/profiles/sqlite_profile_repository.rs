// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, QueryBuilder, Row, Sqlite};
use url::Url;

use crate::domain::profiles::models::{
    Profile, ProfileChanges, ProfileDraft, ProfileFilter, ProfileSortField,
};
use crate::domain::profiles::repos::ProfileRepository;
use crate::domain::shared::models::Handle;
use crate::util::TimeProvider;

const PROFILE_COLUMNS: &str = "id, handle, bio, location, blog, public_repos, public_gists, \
     follower_count, following_count, avatar_url, followers_url, following_url, repos_url, \
     is_deleted, created_at, updated_at";

/// The durable profile store: one SQLite table keyed by a generated id with
/// a unique index on the handle.
pub struct SqliteProfileRepository {
    pool: Pool<Sqlite>,
    time_provider: Arc<dyn TimeProvider>,
}

/// Percent-encode a path for use in a sqlite:// URI so spaces and special
/// chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

impl SqliteProfileRepository {
    /// Open (or create) the database at `path` and run migrations. Creates
    /// parent directories if needed.
    pub async fn open_at(
        path: impl AsRef<Path>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let repo = SqliteProfileRepository {
            pool,
            time_provider,
        };
        repo.migrate().await?;
        Ok(repo)
    }

    /// Open an in-memory database (no disk I/O). A single connection, since
    /// every pooled connection would otherwise get its own empty database.
    pub async fn open_in_memory(time_provider: Arc<dyn TimeProvider>) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let repo = SqliteProfileRepository {
            pool,
            time_provider,
        };
        repo.migrate().await?;
        Ok(repo)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                handle TEXT NOT NULL,
                bio TEXT,
                location TEXT,
                blog TEXT,
                public_repos INTEGER NOT NULL DEFAULT 0,
                public_gists INTEGER NOT NULL DEFAULT 0,
                follower_count INTEGER NOT NULL DEFAULT 0,
                following_count INTEGER NOT NULL DEFAULT 0,
                avatar_url TEXT,
                followers_url TEXT,
                following_url TEXT,
                repos_url TEXT,
                is_deleted INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS profiles_handle_idx ON profiles (handle);",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The row stored under `handle` regardless of its deletion flag. The
    /// find-or-create path needs to see soft-deleted rows too, otherwise it
    /// would race the unique index.
    async fn get_any(&self, handle: &Handle) -> Result<Option<Profile>> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE handle = ?1"
        ))
        .bind(handle.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(profile_from_row).transpose()
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn get(&self, handle: &Handle) -> Result<Option<Profile>> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE handle = ?1 AND is_deleted = 0"
        ))
        .bind(handle.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(profile_from_row).transpose()
    }

    async fn put(&self, draft: ProfileDraft) -> Result<Profile> {
        if let Some(existing) = self.get_any(&draft.handle).await? {
            return Ok(existing);
        }

        let profile = Profile::from_draft(draft, self.time_provider.now());
        sqlx::query(&format!(
            "INSERT INTO profiles ({PROFILE_COLUMNS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16) \
             ON CONFLICT (handle) DO NOTHING"
        ))
        .bind(profile.id.to_string())
        .bind(profile.handle.as_str())
        .bind(&profile.bio)
        .bind(&profile.location)
        .bind(&profile.blog)
        .bind(i64::from(profile.public_repos))
        .bind(i64::from(profile.public_gists))
        .bind(i64::from(profile.follower_count))
        .bind(i64::from(profile.following_count))
        .bind(profile.avatar_url.as_ref().map(Url::as_str))
        .bind(profile.followers_url.as_ref().map(Url::as_str))
        .bind(profile.following_url.as_ref().map(Url::as_str))
        .bind(profile.repos_url.as_ref().map(Url::as_str))
        .bind(profile.is_deleted)
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        // Re-select so the loser of a concurrent insert observes the
        // winner's row.
        self.get_any(&profile.handle)
            .await?
            .context("Profile row disappeared right after insert")
    }

    async fn update(&self, handle: &Handle, changes: ProfileChanges) -> Result<Option<Profile>> {
        let Some(mut profile) = self.get(handle).await? else {
            return Ok(None);
        };
        profile.apply(changes, self.time_provider.now());

        sqlx::query(
            "UPDATE profiles SET bio = ?2, location = ?3, blog = ?4, public_repos = ?5, \
             public_gists = ?6, follower_count = ?7, following_count = ?8, avatar_url = ?9, \
             followers_url = ?10, following_url = ?11, repos_url = ?12, updated_at = ?13 \
             WHERE id = ?1",
        )
        .bind(profile.id.to_string())
        .bind(&profile.bio)
        .bind(&profile.location)
        .bind(&profile.blog)
        .bind(i64::from(profile.public_repos))
        .bind(i64::from(profile.public_gists))
        .bind(i64::from(profile.follower_count))
        .bind(i64::from(profile.following_count))
        .bind(profile.avatar_url.as_ref().map(Url::as_str))
        .bind(profile.followers_url.as_ref().map(Url::as_str))
        .bind(profile.following_url.as_ref().map(Url::as_str))
        .bind(profile.repos_url.as_ref().map(Url::as_str))
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Some(profile))
    }

    async fn soft_delete(&self, handle: &Handle) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE profiles SET is_deleted = 1, updated_at = ?2 \
             WHERE handle = ?1 AND is_deleted = 0",
        )
        .bind(handle.as_str())
        .bind(self.time_provider.now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &ProfileFilter,
        sort: Option<ProfileSortField>,
    ) -> Result<Vec<Profile>> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE is_deleted = 0"
        ));
        if let Some(handle) = &filter.handle {
            query.push(" AND handle = ").push_bind(handle.as_str());
        }
        if let Some(bio) = &filter.bio {
            query.push(" AND bio = ").push_bind(bio);
        }
        if let Some(location) = &filter.location {
            query.push(" AND location = ").push_bind(location);
        }
        if let Some(blog) = &filter.blog {
            query.push(" AND blog = ").push_bind(blog);
        }
        if let Some(public_repos) = filter.public_repos {
            query
                .push(" AND public_repos = ")
                .push_bind(i64::from(public_repos));
        }
        if let Some(public_gists) = filter.public_gists {
            query
                .push(" AND public_gists = ")
                .push_bind(i64::from(public_gists));
        }
        if let Some(follower_count) = filter.follower_count {
            query
                .push(" AND follower_count = ")
                .push_bind(i64::from(follower_count));
        }
        if let Some(following_count) = filter.following_count {
            query
                .push(" AND following_count = ")
                .push_bind(i64::from(following_count));
        }
        match sort {
            Some(field) => {
                query.push(" ORDER BY ");
                query.push(field.column());
                query.push(" DESC");
            }
            None => {
                query.push(" ORDER BY rowid");
            }
        }

        let rows = query.build().fetch_all(&self.pool).await?;
        rows.iter().map(profile_from_row).collect()
    }
}

fn profile_from_row(row: &SqliteRow) -> Result<Profile> {
    Ok(Profile {
        id: row.try_get::<String, _>("id")?.parse()?,
        handle: Handle::new(row.try_get::<String, _>("handle")?)?,
        bio: row.try_get("bio")?,
        location: row.try_get("location")?,
        blog: row.try_get("blog")?,
        public_repos: row.try_get::<i64, _>("public_repos")? as u32,
        public_gists: row.try_get::<i64, _>("public_gists")? as u32,
        follower_count: row.try_get::<i64, _>("follower_count")? as u32,
        following_count: row.try_get::<i64, _>("following_count")? as u32,
        avatar_url: parse_url(row.try_get("avatar_url")?)?,
        followers_url: parse_url(row.try_get("followers_url")?)?,
        following_url: parse_url(row.try_get("following_url")?)?,
        repos_url: parse_url(row.try_get("repos_url")?)?,
        is_deleted: row.try_get("is_deleted")?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}

fn parse_url(value: Option<String>) -> Result<Option<Url>> {
    Ok(value.as_deref().map(Url::parse).transpose()?)
}

fn parse_timestamp(value: String) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(&value)?.with_timezone(&Utc))
}
