use crate::{LocalUser, Role, UserStatus, VerifiedIdentity};

use chrono::Utc;

fn identity(email_verified: bool) -> VerifiedIdentity {
    VerifiedIdentity {
        subject_id: "provider-uid-1".to_string(),
        email: "a@x.com".to_string(),
        email_verified,
        display_name: Some("Ada".to_string()),
        photo_url: None,
        roles: vec![Role::User],
    }
}

#[test]
fn given_verified_identity_when_registered_then_account_starts_pending() {
    let user = LocalUser::registered(&identity(true));

    assert!(!user.is_active);
    assert!(!user.is_email_confirmed());
    assert_eq!(user.status(), UserStatus::Pending);
    assert_eq!(user.subject_id, "provider-uid-1");
}

#[test]
fn given_verified_identity_when_provisioned_then_account_is_active() {
    let user = LocalUser::provisioned(&identity(true));

    assert!(user.is_active);
    assert!(user.is_email_confirmed());
    assert_eq!(user.status(), UserStatus::Active);
}

#[test]
fn given_unverified_identity_when_provisioned_then_account_is_pending() {
    let user = LocalUser::provisioned(&identity(false));

    assert!(!user.is_active);
    assert_eq!(user.status(), UserStatus::Pending);
}

#[test]
fn given_suspension_timestamp_then_status_is_suspended_regardless_of_flag() {
    let mut user = LocalUser::provisioned(&identity(true));
    user.suspended_at = Some(Utc::now());

    assert_eq!(user.status(), UserStatus::Suspended);
}

#[test]
fn given_no_display_name_then_name_falls_back_to_email() {
    let mut user = LocalUser::registered(&identity(false));
    assert_eq!(user.name(), "Ada");

    user.display_name = None;
    assert_eq!(user.name(), "a@x.com");
}
