use crate::{CoreError, Skill, SkillStatus};

use uuid::Uuid;

#[test]
fn given_new_skill_when_created_then_pending_with_equal_timestamps() {
    let skill = Skill::new(Uuid::new_v4(), "Guitar".to_string(), "Music".to_string());

    assert_eq!(skill.status, SkillStatus::Pending);
    assert_eq!(skill.created_at, skill.last_modified);
    assert!(skill.validate().is_ok());
}

#[test]
fn given_blank_title_when_validated_then_error_names_title() {
    let skill = Skill::new(Uuid::new_v4(), "   ".to_string(), "Music".to_string());

    match skill.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_overlong_category_when_validated_then_error_names_category() {
    let skill = Skill::new(Uuid::new_v4(), "Guitar".to_string(), "c".repeat(101));

    match skill.validate() {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("category"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
