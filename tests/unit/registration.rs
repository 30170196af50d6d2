use club_backend::db::enums::RegistrationStatus::{self, *};

#[test]
fn withdraw_is_reachable_from_any_status() {
    for status in [Registered, Available, Selected, Withdrawn] {
        assert!(status.can_transition_to(Withdrawn));
    }
}

#[test]
fn withdrawn_is_not_terminal() {
    assert!(Withdrawn.can_transition_to(Registered));
    // but a withdrawn member cannot skip straight to being picked
    assert!(!Withdrawn.can_transition_to(Available));
    assert!(!Withdrawn.can_transition_to(Selected));
}

#[test]
fn selection_requires_availability_first() {
    assert!(Registered.can_transition_to(Available));
    assert!(Available.can_transition_to(Selected));
    assert!(!Registered.can_transition_to(Selected));
}

#[test]
fn unselect_moves_back_to_available_without_loss() {
    assert!(Selected.can_transition_to(Available));
    assert!(!Selected.can_transition_to(Registered));
}

#[test]
fn status_round_trips_through_str() {
    for status in [Registered, Available, Selected, Withdrawn] {
        assert_eq!(RegistrationStatus::from_str(status.as_str()), Some(status));
    }
    assert_eq!(RegistrationStatus::from_str("maybe"), None);
}
