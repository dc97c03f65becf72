use crate::{CoreError, SkillStatus};

use std::str::FromStr;

#[test]
fn test_skill_status_as_str() {
    assert_eq!(SkillStatus::Pending.as_str(), "pending");
    assert_eq!(SkillStatus::Active.as_str(), "active");
    assert_eq!(SkillStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_skill_status_from_str() {
    assert_eq!(SkillStatus::from_str("active").unwrap(), SkillStatus::Active);
    assert_eq!(
        SkillStatus::from_str("rejected").unwrap(),
        SkillStatus::Rejected
    );
    assert!(matches!(
        SkillStatus::from_str("approved"),
        Err(CoreError::InvalidSkillStatus { .. })
    ));
}

#[test]
fn test_skill_status_default_is_pending() {
    assert_eq!(SkillStatus::default(), SkillStatus::Pending);
}
