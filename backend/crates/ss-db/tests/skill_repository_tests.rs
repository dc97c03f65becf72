mod common;

use common::{create_test_pool, create_test_skill, create_test_user};

use ss_core::SkillStatus;
use ss_db::{ProfileRepository, SkillRepository, UserRepository};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_new_skill_when_created_then_author_count_incremented() {
    // Given: A user
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "alice@example.com").await;
    let repo = SkillRepository::new(pool.clone());

    // When: Creating two skills
    repo.create(&create_test_skill(user.id)).await.unwrap();
    repo.create(&create_test_skill(user.id)).await.unwrap();

    // Then: The profile counts both
    let profile = ProfileRepository::new(pool)
        .find_or_empty(user.id)
        .await
        .unwrap();
    assert_that!(profile.skills_count, eq(2));
}

#[tokio::test]
async fn given_skill_when_found_by_id_then_author_name_joined() {
    // Given: A skill by a user with a display name
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "bob@example.com").await;
    let repo = SkillRepository::new(pool);
    let skill = create_test_skill(user.id);
    repo.create(&skill).await.unwrap();

    // When: Loading it
    let found = repo.find_by_id(skill.id).await.unwrap().unwrap();

    // Then: The author name comes from the user record
    assert_that!(found.skill.id, eq(skill.id));
    assert_that!(found.skill.title, eq(&skill.title));
    assert_that!(found.skill.author_id, eq(user.id));
    assert_that!(found.author_name, eq("Test User"));
    assert_that!(found.skill.status, eq(SkillStatus::Pending));
}

#[tokio::test]
async fn given_skill_when_status_updated_then_persisted_and_counted() {
    // Given: Two pending skills
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "carol@example.com").await;
    let repo = SkillRepository::new(pool);
    let first = create_test_skill(user.id);
    let second = create_test_skill(user.id);
    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();

    // When: Approving one of them
    let changed = repo
        .update_status(first.id, SkillStatus::Active, Utc::now())
        .await
        .unwrap();

    // Then: Counts per status follow
    assert_that!(changed, eq(true));
    assert_that!(repo.count().await.unwrap(), eq(2));
    assert_that!(repo.count_by_status(SkillStatus::Pending).await.unwrap(), eq(1));
    assert_that!(repo.count_by_status(SkillStatus::Active).await.unwrap(), eq(1));
}

#[tokio::test]
async fn given_skill_when_deleted_then_author_count_decremented() {
    // Given: One skill
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "dave@example.com").await;
    let repo = SkillRepository::new(pool.clone());
    let skill = create_test_skill(user.id);
    repo.create(&skill).await.unwrap();

    // When: Deleting it
    let deleted = repo.delete(skill.id).await.unwrap();

    // Then: Gone, and the count is back to zero
    assert_that!(deleted, eq(true));
    assert_that!(repo.find_by_id(skill.id).await.unwrap(), none());
    let profile = ProfileRepository::new(pool)
        .find_or_empty(user.id)
        .await
        .unwrap();
    assert_that!(profile.skills_count, eq(0));
}

#[tokio::test]
async fn given_missing_skill_when_deleted_then_returns_false() {
    let pool = create_test_pool().await;
    let repo = SkillRepository::new(pool);

    assert_that!(repo.delete(Uuid::new_v4()).await.unwrap(), eq(false));
    assert_that!(
        repo.update_status(Uuid::new_v4(), SkillStatus::Rejected, Utc::now())
            .await
            .unwrap(),
        eq(false)
    );
}

#[tokio::test]
async fn given_author_deleted_when_listing_then_skills_cascade() {
    // Given: A user with a skill
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "erin@example.com").await;
    let repo = SkillRepository::new(pool.clone());
    repo.create(&create_test_skill(user.id)).await.unwrap();

    // When: Deleting the author
    UserRepository::new(pool).delete(user.id).await.unwrap();

    // Then: No skills remain
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}
