use club_backend::db::enums::Availability;

#[test]
fn only_pending_counts_as_unconfirmed() {
    assert!(!Availability::Pending.is_confirmed());
    assert!(Availability::Available.is_confirmed());
    assert!(Availability::Unavailable.is_confirmed());
}

#[test]
fn availability_round_trips_through_str() {
    for value in [
        Availability::Pending,
        Availability::Available,
        Availability::Unavailable,
    ] {
        assert_eq!(Availability::from_str(value.as_str()), Some(value));
    }
    assert_eq!(Availability::from_str("undecided"), None);
}
