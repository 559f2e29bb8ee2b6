//! Unit tests for the Panel Presenter.
//!
//! Covers lazy construction, control routing, re-synchronisation after bulk changes
//! and the confirmation step guarding reset.

use std::sync::Arc;

use thinkup::managers::panel_presenter::{action_for, build_controls, PanelPresenter, PanelPresenterTrait, PANEL_ID};
use thinkup::services::accessibility_manager::AccessibilityManager;
use thinkup::services::speech_controller::NullSpeechEngine;
use thinkup::services::storage::MemoryStore;
use thinkup::types::document::Document;
use thinkup::types::panel::{ControlInput, ControlKind, PanelAction};
use thinkup::types::settings::{CurrentProfile, FontSize, SettingField, SettingsRecord};

struct Fixture {
    a11y: AccessibilityManager,
    panel: PanelPresenter,
    doc: Document,
}

fn setup() -> Fixture {
    let mut a11y = AccessibilityManager::new(
        Arc::new(MemoryStore::new()),
        Box::new(NullSpeechEngine),
        "es-ES",
    );
    let mut doc = Document::page();
    a11y.init(&mut doc, Default::default());
    let panel = PanelPresenter::new(vec![("Alt+A".to_string(), "Abrir panel")]);
    Fixture { a11y, panel, doc }
}

fn input(f: &mut Fixture, control: &str, value: ControlInput, confirmed: bool) -> Option<PanelAction> {
    f.panel
        .handle_input(&mut f.a11y, &mut f.doc, control, value, &move |_: &str| confirmed)
}

// ─── Construction ───

#[test]
fn test_panel_is_built_lazily() {
    let mut f = setup();
    assert!(!f.panel.is_built());
    assert!(!f.doc.has_region(PANEL_ID));
    f.panel.open(&f.a11y, &mut f.doc);
    assert!(f.panel.is_built());
    assert!(f.panel.is_open());
    assert!(f.doc.region_html(PANEL_ID).is_some());
    assert_eq!(f.doc.element_attribute(PANEL_ID, "aria-hidden"), Some("false"));
}

#[test]
fn test_toggle_opens_then_closes() {
    let mut f = setup();
    assert!(f.panel.toggle(&f.a11y, &mut f.doc));
    assert!(!f.panel.toggle(&f.a11y, &mut f.doc));
    assert!(!f.doc.element_has_class(PANEL_ID, "open"));
    assert_eq!(f.doc.last_announcement(), Some("Panel de accesibilidad cerrado"));
    assert!(!f.panel.close(&mut f.doc));
}

#[test]
fn test_one_control_per_profile() {
    let controls = build_controls(&SettingsRecord::default());
    let profiles = controls
        .iter()
        .filter(|c| matches!(c.kind, ControlKind::ProfileButton { .. }))
        .count();
    assert_eq!(profiles, 5);
}

// ─── Routing ───

#[test]
fn test_each_control_maps_to_one_action() {
    assert_eq!(
        action_for("toggle-contrast", &ControlInput::Activate),
        Some(PanelAction::ToggleFlag(SettingField::HighContrast))
    );
    assert_eq!(
        action_for("line-spacing", &ControlInput::Select("relaxed".into())),
        Some(PanelAction::SetChoice(SettingField::LineSpacing, "relaxed".into()))
    );
    assert_eq!(action_for("font-size", &ControlInput::Increase), Some(PanelAction::IncreaseFontSize));
    assert_eq!(action_for("speech-volume", &ControlInput::Range(0.5)), Some(PanelAction::SetSpeechVolume(0.5)));
    assert_eq!(
        action_for("profile-adhd", &ControlInput::Activate),
        Some(PanelAction::LoadProfile("adhd".into()))
    );
}

#[test]
fn test_toggle_input_updates_record_and_control() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    input(&mut f, "toggle-contrast", ControlInput::Activate, false);
    assert!(f.a11y.settings().high_contrast);
    assert_eq!(f.doc.element_attribute("toggle-contrast", "checked"), Some("true"));
}

#[test]
fn test_mismatched_input_changes_nothing() {
    let mut f = setup();
    let before = f.a11y.settings().clone();
    assert_eq!(input(&mut f, "toggle-contrast", ControlInput::Range(2.0), true), None);
    assert_eq!(input(&mut f, "unknown-control", ControlInput::Activate, true), None);
    assert_eq!(f.a11y.settings(), &before);
}

#[test]
fn test_speech_rate_slider_is_clamped_and_displayed() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    input(&mut f, "speech-rate", ControlInput::Range(9.0), false);
    assert_eq!(f.a11y.settings().speech_rate, 2.0);
    assert_eq!(f.doc.element_attribute("speech-rate", "data-display"), Some("2.0"));
}

// ─── Bulk changes ───

#[test]
fn test_profile_load_resynchronises_every_control() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    input(&mut f, "profile-low-vision", ControlInput::Activate, false);

    assert_eq!(f.a11y.settings().current_profile, CurrentProfile::LowVision);
    assert_eq!(f.doc.element_attribute("toggle-contrast", "checked"), Some("true"));
    assert_eq!(f.doc.element_attribute("toggle-highlight-links", "checked"), Some("true"));
    assert_eq!(f.doc.element_attribute("cursor-size", "value"), Some("extra-large"));
    assert_eq!(f.doc.element_attribute("font-size", "data-display"), Some("Extra Grande"));
    assert!(f.doc.element_has_class("profile-low-vision", "active"));
    assert!(!f.doc.element_has_class("profile-dyslexia", "active"));
}

#[test]
fn test_sync_reflects_changes_made_elsewhere() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    f.a11y.increase_font_size(&mut f.doc);
    f.panel.sync(f.a11y.settings(), &mut f.doc);
    assert_eq!(f.doc.element_attribute("font-size", "data-display"), Some("Grande"));
}

#[test]
fn test_declined_reset_leaves_record_untouched() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    input(&mut f, "profile-dyslexia", ControlInput::Activate, false);
    let before = f.a11y.settings().clone();

    assert_eq!(
        input(&mut f, "reset-accessibility", ControlInput::Activate, false),
        Some(PanelAction::Reset)
    );
    assert_eq!(f.a11y.settings(), &before);
    assert!(f.doc.element_has_class("profile-dyslexia", "active"));
}

#[test]
fn test_confirmed_reset_restores_defaults_and_controls() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    input(&mut f, "profile-dyslexia", ControlInput::Activate, false);
    input(&mut f, "reset-accessibility", ControlInput::Activate, true);

    assert_eq!(f.a11y.settings(), &SettingsRecord::default());
    assert_eq!(f.a11y.settings().font_size, FontSize::Normal);
    assert_eq!(f.doc.element_attribute("toggle-dyslexia-font", "checked"), Some("false"));
    assert!(!f.doc.element_has_class("profile-dyslexia", "active"));
    assert!(f.panel.is_open());
}

#[test]
fn test_close_control_closes_panel() {
    let mut f = setup();
    f.panel.open(&f.a11y, &mut f.doc);
    input(&mut f, "panel-close", ControlInput::Activate, false);
    assert!(!f.panel.is_open());
}
