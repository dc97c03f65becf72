use crate::Result as DbErrorResult;
use crate::repositories::row::{flag_at, optional_timestamp_at, timestamp_at, uuid_at};

use ss_core::{LocalUser, UserProfile};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TABLE: &str = "users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Returns `DbError::Conflict` when the subject id or the
    /// email is already taken.
    pub async fn create(&self, user: &LocalUser) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, subject_id, email, display_name,
                  is_active, email_verified_at, suspended_at, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.subject_id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.is_active)
        .bind(user.email_verified_at.map(|dt| dt.timestamp()))
        .bind(user.suspended_at.map(|dt| dt.timestamp()))
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<LocalUser>> {
        let row = sqlx::query(
            r#"
              SELECT id, subject_id, email, display_name,
                     is_active, email_verified_at, suspended_at, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn find_by_subject(&self, subject_id: &str) -> DbErrorResult<Option<LocalUser>> {
        let row = sqlx::query(
            r#"
              SELECT id, subject_id, email, display_name,
                     is_active, email_verified_at, suspended_at, created_at
              FROM users
              WHERE subject_id = ?
              "#,
        )
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Case-insensitive lookup (the column is `COLLATE NOCASE`).
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<LocalUser>> {
        let row = sqlx::query(
            r#"
              SELECT id, subject_id, email, display_name,
                     is_active, email_verified_at, suspended_at, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// User joined with its profile; a missing profile reads as `UserProfile::empty`.
    pub async fn find_with_profile(
        &self,
        id: Uuid,
    ) -> DbErrorResult<Option<(LocalUser, UserProfile)>> {
        let row = sqlx::query(
            r#"
              SELECT u.id, u.subject_id, u.email, u.display_name,
                     u.is_active, u.email_verified_at, u.suspended_at, u.created_at,
                     COALESCE(p.is_admin, 0) AS is_admin,
                     COALESCE(p.skills_count, 0) AS skills_count,
                     p.last_active AS last_active
              FROM users u
              LEFT JOIN user_profiles p ON p.user_id = u.id
              WHERE u.id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user_with_profile).transpose()
    }

    /// All users, newest first.
    pub async fn find_all_with_profiles(&self) -> DbErrorResult<Vec<(LocalUser, UserProfile)>> {
        let rows = sqlx::query(
            r#"
              SELECT u.id, u.subject_id, u.email, u.display_name,
                     u.is_active, u.email_verified_at, u.suspended_at, u.created_at,
                     COALESCE(p.is_admin, 0) AS is_admin,
                     COALESCE(p.skills_count, 0) AS skills_count,
                     p.last_active AS last_active
              FROM users u
              LEFT JOIN user_profiles p ON p.user_id = u.id
              ORDER BY u.created_at DESC, u.email ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_user_with_profile).collect()
    }

    /// Copy provider-side attributes onto the local record. The email update can
    /// fail with `DbError::Conflict` when another account already holds it.
    pub async fn sync_identity(
        &self,
        id: Uuid,
        email: &str,
        display_name: Option<&str>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE users
              SET email = ?, display_name = COALESCE(?, display_name)
              WHERE id = ?
              "#,
        )
        .bind(email)
        .bind(display_name)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record the first verified email and activate the account unless it is
    /// suspended. Returns false when the email was already recorded as verified.
    pub async fn mark_email_verified(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET email_verified_at = ?,
                  is_active = CASE WHEN suspended_at IS NULL THEN 1 ELSE is_active END
              WHERE id = ? AND email_verified_at IS NULL
              "#,
        )
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn suspend(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET is_active = 0, suspended_at = ?
              WHERE id = ?
              "#,
        )
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lift a suspension. Only an account with a verified email comes back active.
    pub async fn reinstate(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET is_active = CASE WHEN email_verified_at IS NULL THEN 0 ELSE 1 END,
                  suspended_at = NULL
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Profile and skills cascade; replies keep their text with the
    /// admin reference cleared.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_active(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_user(row: &SqliteRow) -> DbErrorResult<LocalUser> {
    Ok(LocalUser {
        id: uuid_at(row, TABLE, "id")?,
        subject_id: row.try_get("subject_id")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        is_active: flag_at(row, "is_active")?,
        email_verified_at: optional_timestamp_at(row, TABLE, "email_verified_at")?,
        suspended_at: optional_timestamp_at(row, TABLE, "suspended_at")?,
        created_at: timestamp_at(row, TABLE, "created_at")?,
    })
}

fn map_user_with_profile(row: &SqliteRow) -> DbErrorResult<(LocalUser, UserProfile)> {
    let user = map_user(row)?;
    let profile = UserProfile {
        user_id: user.id,
        is_admin: flag_at(row, "is_admin")?,
        skills_count: row.try_get("skills_count")?,
        last_active: optional_timestamp_at(row, "user_profiles", "last_active")?,
    };

    Ok((user, profile))
}
