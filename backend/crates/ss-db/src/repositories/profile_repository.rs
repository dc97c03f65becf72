use crate::Result as DbErrorResult;
use crate::repositories::row::{flag_at, optional_timestamp_at, uuid_at};

use ss_core::UserProfile;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TABLE: &str = "user_profiles";

/// Profiles are created on first write (upsert); reads treat absence as
/// `UserProfile::empty`.
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
              SELECT user_id, is_admin, skills_count, last_active
              FROM user_profiles
              WHERE user_id = ?
              "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_profile).transpose()
    }

    /// Profile for `user_id`, or the empty profile when none was written yet.
    pub async fn find_or_empty(&self, user_id: Uuid) -> DbErrorResult<UserProfile> {
        Ok(self
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| UserProfile::empty(user_id)))
    }

    pub async fn touch_last_active(&self, user_id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO user_profiles (user_id, last_active)
              VALUES (?, ?)
              ON CONFLICT(user_id) DO UPDATE SET last_active = excluded.last_active
              "#,
        )
        .bind(user_id.to_string())
        .bind(at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_admin(&self, user_id: Uuid, is_admin: bool) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO user_profiles (user_id, is_admin)
              VALUES (?, ?)
              ON CONFLICT(user_id) DO UPDATE SET is_admin = excluded.is_admin
              "#,
        )
        .bind(user_id.to_string())
        .bind(is_admin)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn map_profile(row: &SqliteRow) -> DbErrorResult<UserProfile> {
    Ok(UserProfile {
        user_id: uuid_at(row, TABLE, "user_id")?,
        is_admin: flag_at(row, "is_admin")?,
        skills_count: row.try_get("skills_count")?,
        last_active: optional_timestamp_at(row, TABLE, "last_active")?,
    })
}
