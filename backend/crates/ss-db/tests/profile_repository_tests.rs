mod common;

use common::{create_test_pool, create_test_user};

use ss_db::ProfileRepository;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_no_profile_when_find_or_empty_then_returns_defaults() {
    // Given: A user without a profile row
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "alice@example.com").await;
    let repo = ProfileRepository::new(pool);

    // When: Reading
    let stored = repo.find_by_user(user.id).await.unwrap();
    let profile = repo.find_or_empty(user.id).await.unwrap();

    // Then: Nothing is stored yet, the empty profile is returned
    assert_that!(stored, none());
    assert_that!(profile.user_id, eq(user.id));
    assert_that!(profile.is_admin, eq(false));
    assert_that!(profile.skills_count, eq(0));
}

#[tokio::test]
async fn given_no_profile_when_last_active_touched_then_profile_created() {
    // Given: A user without a profile row
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "bob@example.com").await;
    let repo = ProfileRepository::new(pool);
    let at = Utc.timestamp_opt(1_790_000_000, 0).unwrap();

    // When: Touching last active
    repo.touch_last_active(user.id, at).await.unwrap();

    // Then: The upsert created the row
    let profile = repo.find_by_user(user.id).await.unwrap().unwrap();
    assert_that!(profile.last_active, some(eq(at)));
    assert_that!(profile.is_admin, eq(false));
}

#[tokio::test]
async fn given_existing_profile_when_admin_toggled_then_other_fields_kept() {
    // Given: A profile with a last-active timestamp
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "carol@example.com").await;
    let repo = ProfileRepository::new(pool);
    let at = Utc.timestamp_opt(1_790_000_000, 0).unwrap();
    repo.touch_last_active(user.id, at).await.unwrap();

    // When: Granting then revoking admin
    repo.set_admin(user.id, true).await.unwrap();
    let granted = repo.find_or_empty(user.id).await.unwrap();
    repo.set_admin(user.id, false).await.unwrap();
    let revoked = repo.find_or_empty(user.id).await.unwrap();

    // Then: Only the flag changed
    assert_that!(granted.is_admin, eq(true));
    assert_that!(revoked.is_admin, eq(false));
    assert_that!(revoked.last_active, some(eq(at)));
}

#[tokio::test]
async fn given_unknown_user_when_profile_written_then_foreign_key_rejects() {
    let pool = create_test_pool().await;
    let repo = ProfileRepository::new(pool);

    let result = repo.set_admin(Uuid::new_v4(), true).await;

    assert_that!(result.is_err(), eq(true));
}
