//! Unit tests for the Accessibility Manager: mutators, announcements and page events.

use std::sync::Arc;

use thinkup::services::accessibility_manager::{
    AccessibilityManager, PreAnswered, SystemPreferences, KEYBOARD_MODALITY_MARKER,
};
use thinkup::services::preference_store::SETTINGS_KEY;
use thinkup::services::speech_controller::QueuedSpeechEngine;
use thinkup::services::storage::{KeyValueStore, MemoryStore};
use thinkup::types::document::{Document, Listener, MarkerTarget};
use thinkup::types::profile::ProfileName;
use thinkup::types::settings::{FontSize, SettingField, SettingsRecord};
use thinkup::types::speech::{SpeechCommand, SpeechEvent};

struct Fixture {
    mem: Arc<MemoryStore>,
    engine: QueuedSpeechEngine,
    a11y: AccessibilityManager,
    doc: Document,
}

fn setup_with(system: SystemPreferences, saved: Option<&str>) -> Fixture {
    let mem = Arc::new(MemoryStore::new());
    if let Some(raw) = saved {
        mem.set(SETTINGS_KEY, raw).expect("seed failed");
    }
    let engine = QueuedSpeechEngine::new();
    let mut a11y = AccessibilityManager::new(mem.clone(), Box::new(engine.clone()), "es-ES");
    let mut doc = Document::page();
    a11y.init(&mut doc, system);
    Fixture { mem, engine, a11y, doc }
}

fn setup() -> Fixture {
    setup_with(SystemPreferences::default(), None)
}

// ─── Initialisation ───

#[test]
fn test_init_applies_persisted_record() {
    let f = setup_with(
        SystemPreferences::default(),
        Some(r#"{"fontSize":"small","hideImages":true}"#),
    );
    assert_eq!(f.a11y.settings().font_size, FontSize::Small);
    assert!(f.doc.has_marker(MarkerTarget::Root, "font-small"));
    assert!(f.doc.has_marker(MarkerTarget::Body, "hide-images"));
}

#[test]
fn test_system_preferences_seed_first_run_only() {
    let system = SystemPreferences { reduced_motion: true, high_contrast: true };
    let f = setup_with(system, None);
    assert!(f.a11y.settings().reduced_motion);
    assert!(f.doc.has_marker(MarkerTarget::Root, "high-contrast"));
    assert_eq!(f.mem.write_count(), 0);

    let f = setup_with(system, Some("{}"));
    assert!(!f.a11y.settings().reduced_motion);
    assert!(!f.a11y.settings().high_contrast);
}

#[test]
fn test_system_preferences_deserialize_camel_case() {
    let prefs: SystemPreferences =
        serde_json::from_str(r#"{"reducedMotion":true}"#).expect("parse failed");
    assert!(prefs.reduced_motion);
    assert!(!prefs.high_contrast);
}

// ─── Mutators ───

#[test]
fn test_toggle_applies_persists_and_announces() {
    let mut f = setup();
    assert_eq!(f.a11y.toggle(&mut f.doc, SettingField::HighContrast), Some(true));
    assert!(f.doc.has_marker(MarkerTarget::Root, "high-contrast"));
    assert_eq!(f.mem.write_count(), 1);
    assert_eq!(f.doc.last_announcement(), Some("Modo alto contraste activado"));
}

#[test]
fn test_toggle_on_non_flag_is_refused() {
    let mut f = setup();
    assert_eq!(f.a11y.toggle(&mut f.doc, SettingField::FontSize), None);
    assert_eq!(f.mem.write_count(), 0);
}

#[test]
fn test_invalid_font_size_leaves_markers_unchanged() {
    let mut f = setup();
    let before = f.doc.markers(MarkerTarget::Root).clone();
    assert!(!f.a11y.set_font_size(&mut f.doc, "gigantic"));
    assert_eq!(f.doc.markers(MarkerTarget::Root), &before);
    assert_eq!(f.a11y.settings().font_size, FontSize::Normal);
    assert_eq!(f.mem.write_count(), 0);
}

#[test]
fn test_font_size_steps_and_saturates() {
    let mut f = setup();
    assert_eq!(f.a11y.decrease_font_size(&mut f.doc), Some(FontSize::Small));
    assert_eq!(f.a11y.decrease_font_size(&mut f.doc), None);
    assert_eq!(
        f.doc.last_announcement(),
        Some("Tamaño de fuente cambiado a pequeño")
    );
}

#[test]
fn test_set_choice_announces_color_blind_description() {
    let mut f = setup();
    assert!(f.a11y.set_choice(&mut f.doc, SettingField::ColorBlindMode, "tritanopia"));
    assert!(f.doc.has_marker(MarkerTarget::Root, "colorblind-tritanopia"));
    assert_eq!(
        f.doc.last_announcement(),
        Some("Modo de daltonismo: tritanopia (azul-amarillo)")
    );
    assert!(!f.a11y.set_choice(&mut f.doc, SettingField::ColorBlindMode, "sepia"));
    assert!(!f.a11y.set_choice(&mut f.doc, SettingField::ReadingMask, "true"));
}

#[test]
fn test_load_profile_and_unknown_profile() {
    let mut f = setup();
    assert_eq!(f.a11y.load_profile(&mut f.doc, "adhd"), Some(ProfileName::Adhd));
    assert!(f.doc.has_marker(MarkerTarget::Body, "reading-mask-active"));
    assert_eq!(f.doc.overlay_count(), 1);

    let before = f.a11y.settings().clone();
    assert_eq!(f.a11y.load_profile(&mut f.doc, "elderly"), None);
    assert_eq!(f.a11y.settings(), &before);
}

#[test]
fn test_reset_requires_confirmation() {
    let mut f = setup();
    f.a11y.load_profile(&mut f.doc, "low-vision");
    let modified = f.a11y.settings().clone();

    assert!(!f.a11y.reset(&mut f.doc, &PreAnswered(false)));
    assert_eq!(f.a11y.settings(), &modified);

    assert!(f.a11y.reset(&mut f.doc, &PreAnswered(true)));
    assert_eq!(f.a11y.settings(), &SettingsRecord::default());
    assert!(!f.doc.has_marker(MarkerTarget::Root, "high-contrast"));
}

// ─── Speech ───

#[test]
fn test_enabling_read_aloud_attaches_selection_triggers() {
    let mut f = setup();
    assert_eq!(f.a11y.read_selection("hola"), None);
    f.a11y.toggle(&mut f.doc, SettingField::TextToSpeech);
    assert!(f.doc.has_listener(Listener::SelectionOnPointerUp));
    assert!(f.a11y.read_selection("hola").is_some());

    f.a11y.toggle(&mut f.doc, SettingField::TextToSpeech);
    assert!(!f.doc.has_listener(Listener::SelectionOnKeyUp));
    assert!(!f.a11y.speech().is_speaking());
    assert_eq!(f.engine.take_commands().last(), Some(&SpeechCommand::Cancel));
}

#[test]
fn test_speak_uses_live_rate() {
    let mut f = setup();
    f.a11y.set_speech_rate(1.5);
    f.a11y.speak("hola");
    match f.engine.take_commands().as_slice() {
        [SpeechCommand::Speak(u)] => assert_eq!(u.rate, 1.5),
        other => panic!("unexpected commands {:?}", other),
    }
}

#[test]
fn test_speech_events_sender_feeds_poll() {
    let mut f = setup();
    let id = f.a11y.speak("hola").expect("should speak");
    f.a11y.speech_events().send(SpeechEvent::Ended { id }).expect("send failed");
    assert_eq!(f.a11y.poll_speech().len(), 1);
    assert!(!f.a11y.speech().is_speaking());
}

// ─── Page events ───

#[test]
fn test_keyboard_modality_marker() {
    let mut f = setup();
    f.a11y.on_key_down(&mut f.doc, "a");
    assert!(!f.doc.has_marker(MarkerTarget::Body, KEYBOARD_MODALITY_MARKER));
    f.a11y.on_key_down(&mut f.doc, "Tab");
    assert!(f.doc.has_marker(MarkerTarget::Body, KEYBOARD_MODALITY_MARKER));
    f.a11y.on_pointer_down(&mut f.doc);
    assert!(!f.doc.has_marker(MarkerTarget::Body, KEYBOARD_MODALITY_MARKER));
}

#[test]
fn test_live_reduced_motion_is_applied_not_persisted() {
    let mut f = setup();
    f.a11y.on_system_reduced_motion(&mut f.doc, true);
    assert!(f.a11y.settings().reduced_motion);
    assert!(f.doc.has_marker(MarkerTarget::Root, "reduced-motion"));
    assert_eq!(f.mem.write_count(), 0);

    f.a11y.on_system_reduced_motion(&mut f.doc, false);
    assert!(f.a11y.settings().reduced_motion);
}

#[test]
fn test_pointer_move_only_with_overlay() {
    let mut f = setup();
    assert_eq!(f.a11y.on_pointer_move(&mut f.doc, 200.0), 0);
    f.a11y.set_flag(&mut f.doc, SettingField::ReadingGuide, true);
    assert_eq!(f.a11y.on_pointer_move(&mut f.doc, 200.0), 1);
}
