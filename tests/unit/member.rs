use club_backend::db::enums::{MemberRole, MemberStatus};
use club_backend::validation::rules::{validate_password_strength, validate_person_name};

#[test]
fn playing_categories_are_active() {
    assert!(MemberStatus::Full.is_active());
    assert!(MemberStatus::Social.is_active());
    assert!(MemberStatus::Life.is_active());
    assert!(!MemberStatus::Pending.is_active());
    assert!(!MemberStatus::Lapsed.is_active());
}

#[test]
fn only_managers_and_admins_can_manage() {
    assert!(!MemberRole::Member.can_manage());
    assert!(MemberRole::Manager.can_manage());
    assert!(MemberRole::Admin.can_manage());
}

#[test]
fn password_strength_rules() {
    assert!(validate_password_strength("Secur3pass!").is_ok());
    assert!(validate_password_strength("short").is_err());
    assert!(validate_password_strength("alllowercase").is_err());
}

#[test]
fn person_name_rules() {
    assert!(validate_person_name("Mary O'Neill-Smith").is_ok());
    assert!(validate_person_name("").is_err());
    assert!(validate_person_name("robot_7").is_err());
}
