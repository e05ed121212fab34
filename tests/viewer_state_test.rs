/// Tests for the presentation state machine driving each viewer connection:
/// boundary-clamped navigation, snapshot reconciliation, and optimistic
/// theme selection.

use deckhand::viewer::state::{NavInput, ViewerState};
use deckhand::models::deck::types::Theme;

fn five_slide_state() -> ViewerState {
    let mut state = ViewerState::new();
    state.reconcile(5, "midnight");
    state
}

#[test]
fn repeated_next_stays_at_the_last_slide() {
    let mut state = five_slide_state();
    for _ in 0..10 {
        state.navigate(NavInput::Next);
    }
    assert_eq!(state.slide_index(), 4);
}

#[test]
fn repeated_prev_stays_at_the_first_slide() {
    let mut state = five_slide_state();
    for _ in 0..10 {
        state.navigate(NavInput::Prev);
    }
    assert_eq!(state.slide_index(), 0);
}

#[test]
fn goto_selects_a_slide_directly() {
    let mut state = five_slide_state();
    assert!(state.navigate(NavInput::Goto(3)));
    assert_eq!(state.slide_index(), 3);
    assert!(!state.navigate(NavInput::Goto(3)));
}

#[test]
fn new_snapshot_always_resets_to_the_first_slide() {
    let mut state = five_slide_state();
    state.navigate(NavInput::Goto(3));

    state.reconcile(5, "midnight");
    assert_eq!(state.slide_index(), 0);

    // Also when the slide count shrinks below the previous index.
    state.navigate(NavInput::Goto(4));
    state.reconcile(2, "midnight");
    assert_eq!(state.slide_index(), 0);
    assert_eq!(state.slide_count(), 2);
}

#[test]
fn snapshot_theme_is_adopted_only_when_recognized() {
    let mut state = five_slide_state();
    state.reconcile(5, "electric");
    assert_eq!(state.theme(), Theme::Electric);

    state.reconcile(5, "holographic");
    assert_eq!(state.theme(), Theme::Electric);
}

#[test]
fn selected_theme_applies_immediately_and_survives_reconcile_of_same_name() {
    let mut state = five_slide_state();
    state.select_theme(Theme::Sunset);
    assert_eq!(state.theme(), Theme::Sunset);

    // A later authoritative snapshot carrying the persisted choice is a no-op
    // for the theme and only resets the slide index.
    state.navigate(NavInput::Next);
    state.reconcile(5, "sunset");
    assert_eq!(state.theme(), Theme::Sunset);
    assert_eq!(state.slide_index(), 0);
}
