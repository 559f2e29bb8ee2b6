//! Unit tests for the Shortcut Manager: chord parsing and exact-modifier matching.

use rstest::rstest;
use thinkup::managers::shortcut_manager::{
    KeyChord, KeyEvent, ShortcutAction, ShortcutManager, ShortcutManagerTrait,
};
use thinkup::types::errors::ShortcutError;

fn event(key: &str, alt: bool, ctrl: bool, meta: bool, shift: bool) -> KeyEvent {
    KeyEvent { key: key.to_string(), alt, ctrl, meta, shift }
}

// ---------------------------------------------------------------------------
// Default bindings
// ---------------------------------------------------------------------------

#[rstest]
#[case(KeyEvent::alt("a"), Some(ShortcutAction::TogglePanel))]
#[case(KeyEvent::alt("A"), Some(ShortcutAction::TogglePanel))]
#[case(KeyEvent::alt("c"), Some(ShortcutAction::ToggleHighContrast))]
#[case(KeyEvent::alt("+"), Some(ShortcutAction::IncreaseFontSize))]
#[case(KeyEvent::alt("="), Some(ShortcutAction::IncreaseFontSize))]
#[case(KeyEvent::alt("-"), Some(ShortcutAction::DecreaseFontSize))]
#[case(KeyEvent::plain("Escape"), Some(ShortcutAction::CloseOverlays))]
#[case(KeyEvent::ctrl("Home"), Some(ShortcutAction::ScrollToTop))]
#[case(KeyEvent::ctrl("End"), Some(ShortcutAction::ScrollToBottom))]
fn test_default_bindings_resolve(#[case] key: KeyEvent, #[case] expected: Option<ShortcutAction>) {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve(&key), expected, "resolving {:?}", key);
}

#[rstest]
#[case(KeyEvent::plain("a"))]
#[case(KeyEvent::ctrl("a"))]
#[case(event("a", true, true, false, false))]
#[case(event("a", true, false, true, false))]
#[case(event("a", true, false, false, true))]
#[case(KeyEvent::alt("Escape"))]
#[case(KeyEvent::plain("Home"))]
#[case(event("Home", false, true, false, true))]
#[case(KeyEvent::plain("+"))]
fn test_inexact_modifiers_do_not_fire(#[case] key: KeyEvent) {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve(&key), None, "{:?} should not fire", key);
}

#[test]
fn test_shift_is_ignored_for_punctuation_keys() {
    let mgr = ShortcutManager::new();
    let plus_with_shift = event("+", true, false, false, true);
    assert_eq!(mgr.resolve(&plus_with_shift), Some(ShortcutAction::IncreaseFontSize));
}

#[test]
fn test_increase_has_two_chords() {
    let mgr = ShortcutManager::new();
    assert_eq!(
        mgr.get_shortcuts(ShortcutAction::IncreaseFontSize),
        vec!["Alt+Plus".to_string(), "Alt+Equal".to_string()]
    );
}

#[test]
fn test_list_covers_every_action() {
    let listed: Vec<ShortcutAction> = ShortcutManager::new()
        .list_shortcuts()
        .into_iter()
        .map(|(action, _)| action)
        .collect();
    for action in [
        ShortcutAction::TogglePanel,
        ShortcutAction::ToggleHighContrast,
        ShortcutAction::IncreaseFontSize,
        ShortcutAction::DecreaseFontSize,
        ShortcutAction::CloseOverlays,
        ShortcutAction::ScrollToTop,
        ShortcutAction::ScrollToBottom,
    ] {
        assert!(listed.contains(&action), "{} not bound", action.as_str());
    }
}

// ---------------------------------------------------------------------------
// Chord parsing
// ---------------------------------------------------------------------------

#[rstest]
#[case("Alt+A", "Alt+A")]
#[case("alt+a", "Alt+A")]
#[case("Control+Home", "Ctrl+Home")]
#[case("Alt+Plus", "Alt+Plus")]
#[case("Shift+Alt+Minus", "Alt+Shift+Minus")]
#[case("Cmd+K", "Meta+K")]
#[case("Escape", "Escape")]
fn test_chord_display_is_canonical(#[case] spec: &str, #[case] expected: &str) {
    let chord = KeyChord::parse(spec).expect("parse failed");
    assert_eq!(chord.to_string(), expected);
}

#[rstest]
#[case("")]
#[case("Alt+")]
#[case("Hyper+A")]
#[case("Ctrl+Alt")]
fn test_invalid_chords_are_rejected(#[case] spec: &str) {
    assert_eq!(
        KeyChord::parse(spec),
        Err(ShortcutError::InvalidChord(spec.to_string()))
    );
}

#[test]
fn test_key_event_deserializes_from_page_payload() {
    let event: KeyEvent =
        serde_json::from_str(r#"{"key":"c","altKey":true,"cmd":"key"}"#).expect("parse failed");
    assert_eq!(event, KeyEvent::alt("c"));
}
