use crate::{CoreError, Message, MessageReply, MessageStatus};

use uuid::Uuid;

#[test]
fn given_valid_contact_form_when_created_then_fields_are_trimmed_and_status_new() {
    let message = Message::new("  Ada ", "ada@example.com ", " Hello there ").unwrap();

    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "ada@example.com");
    assert_eq!(message.body, "Hello there");
    assert_eq!(message.status, MessageStatus::New);
}

#[test]
fn given_email_without_at_sign_when_created_then_validation_error_names_email() {
    let result = Message::new("Ada", "not-an-email", "Hello");

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_blank_body_when_created_then_validation_error_names_message() {
    let result = Message::new("Ada", "ada@example.com", "   ");

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("message"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_overlong_name_when_created_then_validation_error() {
    let name = "n".repeat(101);
    assert!(Message::new(&name, "ada@example.com", "Hello").is_err());
}

#[test]
fn given_empty_reply_content_when_created_then_validation_error() {
    let result = MessageReply::new(Uuid::new_v4(), Uuid::new_v4(), "Admin", "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
