use club_backend::db::enums::GameFormat;

#[test]
fn positions_match_format_sizes() {
    assert_eq!(GameFormat::Singles.positions(), &["Skip"]);
    assert_eq!(GameFormat::Pairs.positions(), &["Lead", "Skip"]);
    assert_eq!(GameFormat::Triples.positions(), &["Lead", "Second", "Skip"]);
    assert_eq!(
        GameFormat::Fours.positions(),
        &["Lead", "Second", "Third", "Skip"]
    );

    assert_eq!(GameFormat::Singles.team_size(), 1);
    assert_eq!(GameFormat::Fours.team_size(), 4);
}

#[test]
fn positions_are_ordered_lead_to_skip() {
    // The ordering drives position_order on slots and assignments.
    let fours = GameFormat::Fours.positions();
    assert_eq!(fours.first(), Some(&"Lead"));
    assert_eq!(fours.last(), Some(&"Skip"));
}

#[test]
fn has_position_rejects_foreign_names() {
    assert!(GameFormat::Fours.has_position("Third"));
    assert!(!GameFormat::Pairs.has_position("Third"));
    assert!(!GameFormat::Singles.has_position("Lead"));
    assert!(!GameFormat::Fours.has_position("skip")); // case matters
}

#[test]
fn format_round_trips_through_str() {
    for format in [
        GameFormat::Singles,
        GameFormat::Pairs,
        GameFormat::Triples,
        GameFormat::Fours,
    ] {
        assert_eq!(GameFormat::from_str(format.as_str()), Some(format));
    }
    assert_eq!(GameFormat::from_str("quintets"), None);
}
