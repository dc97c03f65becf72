use crate::Result as DbErrorResult;
use crate::repositories::row::{parsed_at, timestamp_at, uuid_at};

use ss_core::{Skill, SkillStatus};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TABLE: &str = "skills";

/// Skill joined with its author's display name (or email).
#[derive(Debug, Clone)]
pub struct SkillWithAuthor {
    pub skill: Skill,
    pub author_name: String,
}

pub struct SkillRepository {
    pool: SqlitePool,
}

impl SkillRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a skill and bump the author's `skills_count` in one transaction.
    pub async fn create(&self, skill: &Skill) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
              INSERT INTO skills (
                  id, title, author_id, category, status, created_at, last_modified
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(skill.id.to_string())
        .bind(&skill.title)
        .bind(skill.author_id.to_string())
        .bind(&skill.category)
        .bind(skill.status.as_str())
        .bind(skill.created_at.timestamp())
        .bind(skill.last_modified.timestamp())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
              INSERT INTO user_profiles (user_id, skills_count)
              VALUES (?, 1)
              ON CONFLICT(user_id) DO UPDATE SET skills_count = skills_count + 1
              "#,
        )
        .bind(skill.author_id.to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<SkillWithAuthor>> {
        let row = sqlx::query(
            r#"
              SELECT s.id, s.title, s.author_id, s.category, s.status,
                     s.created_at, s.last_modified,
                     COALESCE(u.display_name, u.email) AS author_name
              FROM skills s
              JOIN users u ON u.id = s.author_id
              WHERE s.id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_skill_with_author).transpose()
    }

    /// All skills, newest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<SkillWithAuthor>> {
        let rows = sqlx::query(
            r#"
              SELECT s.id, s.title, s.author_id, s.category, s.status,
                     s.created_at, s.last_modified,
                     COALESCE(u.display_name, u.email) AS author_name
              FROM skills s
              JOIN users u ON u.id = s.author_id
              ORDER BY s.created_at DESC, s.title ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_skill_with_author).collect()
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: SkillStatus,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE skills
              SET status = ?, last_modified = ?
              WHERE id = ?
              "#,
        )
        .bind(status.as_str())
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a skill and decrement the author's `skills_count` in one transaction.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        let author_id: Option<String> =
            sqlx::query_scalar("DELETE FROM skills WHERE id = ? RETURNING author_id")
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await?;

        let Some(author_id) = author_id else {
            tx.rollback().await?;
            return Ok(false);
        };

        sqlx::query(
            r#"
              UPDATE user_profiles
              SET skills_count = MAX(skills_count - 1, 0)
              WHERE user_id = ?
              "#,
        )
        .bind(author_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(true)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_by_status(&self, status: SkillStatus) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_skill_with_author(row: &SqliteRow) -> DbErrorResult<SkillWithAuthor> {
    Ok(SkillWithAuthor {
        skill: Skill {
            id: uuid_at(row, TABLE, "id")?,
            title: row.try_get("title")?,
            author_id: uuid_at(row, TABLE, "author_id")?,
            category: row.try_get("category")?,
            status: parsed_at(row, TABLE, "status")?,
            created_at: timestamp_at(row, TABLE, "created_at")?,
            last_modified: timestamp_at(row, TABLE, "last_modified")?,
        },
        author_name: row.try_get("author_name")?,
    })
}
