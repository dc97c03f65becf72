use crate::SystemSettings;

#[test]
fn test_default_settings_match_first_boot_values() {
    let settings = SystemSettings::default();

    assert!(!settings.maintenance_mode);
    assert!(settings.allow_new_registrations);
    assert!(settings.skill_approval_required);
    assert_eq!(settings.max_skills_per_user, 10);
}

#[test]
fn test_validate_bounds_max_skills_per_user() {
    let mut settings = SystemSettings::default();
    assert!(settings.validate().is_ok());

    settings.max_skills_per_user = 0;
    assert!(settings.validate().is_ok());

    settings.max_skills_per_user = -1;
    assert!(settings.validate().is_err());

    settings.max_skills_per_user = 1001;
    assert!(settings.validate().is_err());
}
