use crate::repositories::row::{flag_at, timestamp_at};
use crate::{DbError, Result as DbErrorResult};

use ss_core::{ErrorLocation, SystemSettings};

use std::panic::Location;

use sqlx::Row;
use sqlx::SqlitePool;

const TABLE: &str = "system_settings";

/// Access to the singleton settings row (id = 1), seeded by the initial migration.
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> DbErrorResult<SystemSettings> {
        let row = sqlx::query(
            r#"
              SELECT maintenance_mode, allow_new_registrations, skill_approval_required,
                     max_skills_per_user, last_updated
              FROM system_settings
              WHERE id = 1
              "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Err(DbError::Initialization {
                message: "system_settings row is missing; migrations were not applied".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        Ok(SystemSettings {
            maintenance_mode: flag_at(&row, "maintenance_mode")?,
            allow_new_registrations: flag_at(&row, "allow_new_registrations")?,
            skill_approval_required: flag_at(&row, "skill_approval_required")?,
            max_skills_per_user: row.try_get("max_skills_per_user")?,
            last_updated: timestamp_at(&row, TABLE, "last_updated")?,
        })
    }

    pub async fn update(&self, settings: &SystemSettings) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE system_settings
              SET maintenance_mode = ?, allow_new_registrations = ?,
                  skill_approval_required = ?, max_skills_per_user = ?, last_updated = ?
              WHERE id = 1
              "#,
        )
        .bind(settings.maintenance_mode)
        .bind(settings.allow_new_registrations)
        .bind(settings.skill_approval_required)
        .bind(settings.max_skills_per_user)
        .bind(settings.last_updated.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
