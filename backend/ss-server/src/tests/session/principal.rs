use crate::session::Principal;

use ss_core::{LocalUser, Role, UserProfile, VerifiedIdentity};

fn identity(roles: Vec<Role>) -> VerifiedIdentity {
    VerifiedIdentity {
        subject_id: "sub-1".to_string(),
        email: "ada@example.com".to_string(),
        email_verified: true,
        display_name: Some("Ada".to_string()),
        photo_url: None,
        roles,
    }
}

#[test]
fn test_plain_user_has_only_user_role() {
    let identity = identity(vec![]);
    let user = LocalUser::provisioned(&identity);
    let profile = UserProfile::empty(user.id);

    let principal = Principal::new(user, profile, identity);

    assert_eq!(principal.roles, vec![Role::User]);
    assert!(!principal.is_admin());
}

#[test]
fn test_local_admin_flag_grants_admin_role() {
    let identity = identity(vec![]);
    let user = LocalUser::provisioned(&identity);
    let mut profile = UserProfile::empty(user.id);
    profile.is_admin = true;

    let principal = Principal::new(user, profile, identity);

    assert!(principal.is_admin());
    assert!(principal.has_role(Role::User));
}

#[test]
fn test_provider_admin_claim_is_not_duplicated() {
    let identity = identity(vec![Role::Admin, Role::User]);
    let user = LocalUser::provisioned(&identity);
    let mut profile = UserProfile::empty(user.id);
    profile.is_admin = true;
    let user_id = user.id;

    let principal = Principal::new(user, profile, identity);

    assert_eq!(principal.roles, vec![Role::User, Role::Admin]);
    assert_eq!(principal.user_id(), user_id);
}
