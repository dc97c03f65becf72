use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_round_trips_through_str() {
    for status in [UserStatus::Active, UserStatus::Suspended, UserStatus::Pending] {
        assert_eq!(UserStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_user_status_rejects_unknown() {
    assert!(UserStatus::from_str("banned").is_err());
    assert!(UserStatus::from_str("Active").is_err());
}
