use crate::Role;

#[test]
fn test_role_from_claim_is_case_insensitive() {
    assert_eq!(Role::from_claim("admin"), Some(Role::Admin));
    assert_eq!(Role::from_claim(" ADMIN "), Some(Role::Admin));
    assert_eq!(Role::from_claim("user"), Some(Role::User));
}

#[test]
fn test_role_from_claim_ignores_unknown_roles() {
    assert_eq!(Role::from_claim("superuser"), None);
    assert_eq!(Role::from_claim(""), None);
}
