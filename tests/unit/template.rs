use club_backend::validation::template::validate_template_name;

#[test]
fn validate_template_name_rules() {
    assert!(validate_template_name("Team A").is_ok());
    assert!(validate_template_name("  ").is_err());
    assert!(validate_template_name(&"x".repeat(101)).is_err());
    assert!(validate_template_name(&"x".repeat(100)).is_ok());
}
