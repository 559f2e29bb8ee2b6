//! Preference Applicator: projects a Settings Record onto the document.
//!
//! Every field maps to markers through [`MARKER_TABLE`]. A field's domain is the set of all
//! markers listed for it; applying removes the whole domain and then adds the marker for the
//! current value, so switching values never leaves a stale marker behind.

use tracing::trace;

use crate::types::document::{Document, Listener, MarkerTarget, OverlayGeometry, OverlayKind};
use crate::types::settings::{SettingField, SettingsRecord};

/// Height of the clear band of the reading mask.
pub const MASK_FOCUS_HEIGHT: f64 = 100.0;

/// Quick controls in the page header mirrored after each apply.
pub const CONTRAST_TOGGLE_ID: &str = "contrast-toggle";
pub const FONT_SIZE_TOGGLE_ID: &str = "font-size-toggle";

/// Markers for one field: `(value token, marker)` pairs on one target element.
pub struct MarkerRule {
    pub field: SettingField,
    pub target: MarkerTarget,
    pub markers: &'static [(&'static str, &'static str)],
}

impl MarkerRule {
    /// Marker for a value token, if that value has one.
    pub fn marker_for(&self, token: &str) -> Option<&'static str> {
        self.markers
            .iter()
            .find(|(value, _)| *value == token)
            .map(|(_, marker)| *marker)
    }

    /// Every marker this field can produce.
    pub fn domain(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.markers.iter().map(|(_, marker)| *marker)
    }
}

const fn rule(field: SettingField, target: MarkerTarget, markers: &'static [(&'static str, &'static str)]) -> MarkerRule {
    MarkerRule { field, target, markers }
}

pub static MARKER_TABLE: &[MarkerRule] = &[
    rule(SettingField::HighContrast, MarkerTarget::Root, &[("true", "high-contrast")]),
    rule(
        SettingField::FontSize,
        MarkerTarget::Root,
        &[
            ("small", "font-small"),
            ("normal", "font-normal"),
            ("large", "font-large"),
            ("extra-large", "font-extra-large"),
        ],
    ),
    rule(SettingField::FocusIndicator, MarkerTarget::Root, &[("true", "focus-visible")]),
    rule(SettingField::ReducedMotion, MarkerTarget::Root, &[("true", "reduced-motion")]),
    rule(SettingField::KeyboardNavigation, MarkerTarget::Root, &[("true", "keyboard-navigation")]),
    rule(SettingField::TextToSpeech, MarkerTarget::Body, &[("true", "tts-active")]),
    // "none" has no marker.
    rule(
        SettingField::ColorBlindMode,
        MarkerTarget::Root,
        &[
            ("protanopia", "colorblind-protanopia"),
            ("deuteranopia", "colorblind-deuteranopia"),
            ("tritanopia", "colorblind-tritanopia"),
            ("grayscale", "colorblind-grayscale"),
            ("inverted", "colorblind-inverted"),
        ],
    ),
    rule(
        SettingField::LineSpacing,
        MarkerTarget::Root,
        &[
            ("compact", "line-spacing-compact"),
            ("normal", "line-spacing-normal"),
            ("relaxed", "line-spacing-relaxed"),
            ("extra-relaxed", "line-spacing-extra-relaxed"),
        ],
    ),
    rule(
        SettingField::LetterSpacing,
        MarkerTarget::Root,
        &[
            ("compact", "letter-spacing-compact"),
            ("normal", "letter-spacing-normal"),
            ("wide", "letter-spacing-wide"),
            ("extra-wide", "letter-spacing-extra-wide"),
        ],
    ),
    rule(
        SettingField::CursorSize,
        MarkerTarget::Root,
        &[
            ("normal", "cursor-normal"),
            ("large", "cursor-large"),
            ("extra-large", "cursor-extra-large"),
        ],
    ),
    rule(SettingField::ReadingMask, MarkerTarget::Body, &[("true", "reading-mask-active")]),
    rule(SettingField::HighlightLinks, MarkerTarget::Body, &[("true", "highlight-links")]),
    rule(SettingField::HideImages, MarkerTarget::Body, &[("true", "hide-images")]),
    rule(SettingField::SimplifiedMode, MarkerTarget::Body, &[("true", "simplified-mode")]),
    rule(SettingField::ReadingGuide, MarkerTarget::Body, &[("true", "reading-guide-active")]),
    rule(SettingField::DyslexiaFont, MarkerTarget::Body, &[("true", "dyslexia-font")]),
];

/// Flags that own a pointer-tracking overlay.
pub const OVERLAY_RULES: [(SettingField, OverlayKind); 2] = [
    (SettingField::ReadingMask, OverlayKind::ReadingMask),
    (SettingField::ReadingGuide, OverlayKind::ReadingGuide),
];

/// Rule for a field, if the field produces markers.
pub fn rule_for(field: SettingField) -> Option<&'static MarkerRule> {
    MARKER_TABLE.iter().find(|rule| rule.field == field)
}

/// Brings the document in line with `record`. Idempotent.
pub fn apply(doc: &mut Document, record: &SettingsRecord) {
    for rule in MARKER_TABLE {
        for marker in rule.domain() {
            doc.remove_marker(rule.target, marker);
        }
        if let Some(marker) = rule.marker_for(&record.token(rule.field)) {
            doc.add_marker(rule.target, marker);
        }
    }

    for (field, kind) in OVERLAY_RULES {
        if record.flag(field).unwrap_or(false) {
            doc.insert_overlay(kind);
            doc.attach_listener(Listener::PointerMove(kind));
        } else {
            doc.detach_listener(Listener::PointerMove(kind));
            doc.remove_overlay(kind);
        }
    }

    sync_quick_controls(doc, record);
    trace!("Accessibility settings applied");
}

/// Mirrors contrast and font size onto the header quick controls.
pub fn sync_quick_controls(doc: &mut Document, record: &SettingsRecord) {
    doc.set_element_class(CONTRAST_TOGGLE_ID, "active", record.high_contrast);
    doc.set_element_attribute(
        FONT_SIZE_TOGGLE_ID,
        "data-size",
        &record.font_size.indicator().to_string(),
    );
}

/// Moves every active overlay to pointer position `y`. Overlays whose flag is off are left
/// alone even if the element still exists. Returns how many overlays moved.
pub fn track_pointer(doc: &mut Document, record: &SettingsRecord, y: f64) -> usize {
    if !y.is_finite() {
        return 0;
    }
    let mut moved = 0;
    for (field, kind) in OVERLAY_RULES {
        if !record.flag(field).unwrap_or(false) || !doc.has_listener(Listener::PointerMove(kind)) {
            continue;
        }
        let Some(overlay) = doc.overlay_mut(kind) else {
            continue;
        };
        overlay.geometry = geometry_at(kind, y);
        moved += 1;
    }
    moved
}

fn geometry_at(kind: OverlayKind, y: f64) -> OverlayGeometry {
    match kind {
        OverlayKind::ReadingMask => {
            let top = y - MASK_FOCUS_HEIGHT / 2.0;
            OverlayGeometry::Mask {
                top_height: top.max(0.0),
                focus_top: top,
                bottom_top: top + MASK_FOCUS_HEIGHT,
            }
        }
        OverlayKind::ReadingGuide => OverlayGeometry::Guide { top: y },
    }
}
