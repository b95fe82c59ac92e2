// Host-side tests for the mode cycle and its controller.

use tree_core::*;

#[test]
fn cycle_returns_to_tree_after_three_clicks() {
    assert_eq!(Mode::default(), Mode::Tree);
    assert_eq!(Mode::Tree.next(), Mode::Explode);
    assert_eq!(Mode::Explode.next(), Mode::Text);
    assert_eq!(Mode::Text.next(), Mode::Tree);
    for start in [Mode::Tree, Mode::Explode, Mode::Text] {
        assert_eq!(start.next().next().next(), start);
    }
}

#[test]
fn controller_advances_on_trigger() {
    let mut controller = ModeController::default();
    assert_eq!(controller.current(), Mode::Tree);
    assert_eq!(controller.trigger(), Mode::Explode);
    assert_eq!(controller.current(), Mode::Explode);
    assert_eq!(controller.trigger(), Mode::Text);
    assert_eq!(controller.trigger(), Mode::Tree);

    let mut from_text = ModeController::new(Mode::Text);
    assert_eq!(from_text.trigger(), Mode::Tree);
}

#[test]
fn only_the_tree_auto_rotates() {
    assert!(Mode::Tree.auto_rotate());
    assert!(!Mode::Explode.auto_rotate());
    assert!(!Mode::Text.auto_rotate());
    assert_eq!(Mode::Explode.label(), "explode");
}
