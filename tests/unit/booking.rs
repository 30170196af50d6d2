use club_backend::validation::booking::validate_booking_fields;

#[test]
fn validate_booking_rules() {
    assert!(validate_booking_fields(1, 4, "club night").is_ok());
    assert!(validate_booking_fields(0, 4, "club night").is_err());
    assert!(validate_booking_fields(5, 4, "club night").is_err());
    assert!(validate_booking_fields(2, 0, "club night").is_err());
    assert!(validate_booking_fields(2, 9, "club night").is_err());
    assert!(validate_booking_fields(2, 4, "  ").is_err());
}
