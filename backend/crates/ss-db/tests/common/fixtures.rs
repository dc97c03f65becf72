use ss_core::{LocalUser, Message, MessageReply, Skill, VerifiedIdentity};
use ss_db::UserRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Identity as the external verifier would return it
pub fn create_test_identity(email: &str) -> VerifiedIdentity {
    VerifiedIdentity {
        subject_id: format!("subject-{}", Uuid::new_v4()),
        email: email.to_string(),
        email_verified: false,
        display_name: Some("Test User".to_string()),
        photo_url: None,
        roles: Vec::new(),
    }
}

/// Inserts a registered (inactive) user
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> LocalUser {
    let user = LocalUser::registered(&create_test_identity(email));
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

pub fn create_test_skill(author_id: Uuid) -> Skill {
    Skill::new(author_id, "Sourdough baking".to_string(), "cooking".to_string())
}

pub fn create_test_message() -> Message {
    Message::new("Jamie Doe", "jamie@example.com", "I cannot find my listing.")
        .expect("Failed to build test message")
}

pub fn create_test_reply(message_id: Uuid, admin_id: Uuid) -> MessageReply {
    MessageReply::new(message_id, admin_id, "Support", "It is back online now.")
        .expect("Failed to build test reply")
}
