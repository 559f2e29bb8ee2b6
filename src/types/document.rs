//! In-memory model of the rendered page.
//!
//! The WebView never owns state: every component mutates this model and the UI layer ships
//! [`DocumentPatch`]es to the page, where a small bridge script mirrors them onto the real DOM.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::errors::RenderError;

/// Regions present in the page skeleton, in render order.
pub const PAGE_REGIONS: [&str; 7] = [
    "header",
    "hero",
    "projects",
    "experience",
    "skills",
    "about",
    "footer",
];

/// Element a marker token is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerTarget {
    /// `<html>`
    Root,
    /// `<body>`
    Body,
}

/// Transient overlay elements created on demand by reading aids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayKind {
    ReadingMask,
    ReadingGuide,
}

impl OverlayKind {
    pub fn element_id(&self) -> &'static str {
        match self {
            OverlayKind::ReadingMask => "reading-mask",
            OverlayKind::ReadingGuide => "reading-guide",
        }
    }
}

/// Where an overlay currently sits, in CSS pixels from the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum OverlayGeometry {
    /// Created but no pointer position received yet.
    Unpositioned,
    Mask {
        top_height: f64,
        focus_top: f64,
        bottom_top: f64,
    },
    Guide {
        top: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub geometry: OverlayGeometry,
}

/// Document-level event listeners the bridge must forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {
    /// Pointer tracking for one overlay.
    PointerMove(OverlayKind),
    /// Read the current selection on pointer release.
    SelectionOnPointerUp,
    /// Read the current selection on key release.
    SelectionOnKeyUp,
}

impl Listener {
    /// `event:purpose` spelling used by the bridge script.
    pub fn name(&self) -> String {
        match self {
            Listener::PointerMove(kind) => format!("mousemove:{}", kind.element_id()),
            Listener::SelectionOnPointerUp => "mouseup:selection".to_string(),
            Listener::SelectionOnKeyUp => "keyup:selection".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    Polite,
}

/// A message for the `aria-live` region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollRequest {
    Top,
    Bottom,
}

/// Classes and attributes of a single element addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementState {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
struct Region {
    html: String,
    dirty: bool,
}

/// Delta shipped to the WebView. Markers, element states, overlays and listeners are sent
/// whole; regions only when re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    pub root_classes: Vec<String>,
    pub body_classes: Vec<String>,
    pub root_attributes: BTreeMap<String, String>,
    pub elements: BTreeMap<String, ElementState>,
    pub overlays: Vec<Overlay>,
    pub listeners: Vec<String>,
    pub regions: BTreeMap<String, String>,
    pub announcements: Vec<Announcement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    root_classes: BTreeSet<String>,
    body_classes: BTreeSet<String>,
    root_attributes: BTreeMap<String, String>,
    elements: BTreeMap<String, ElementState>,
    overlays: BTreeMap<OverlayKind, Overlay>,
    listeners: BTreeSet<Listener>,
    regions: BTreeMap<String, Region>,
    announcements: Vec<Announcement>,
    scroll: Option<ScrollRequest>,
}

impl Document {
    /// A document with no render regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document exposing exactly the given regions.
    pub fn with_regions<'a, I: IntoIterator<Item = &'a str>>(ids: I) -> Self {
        let mut doc = Self::new();
        for id in ids {
            doc.insert_region(id);
        }
        doc
    }

    /// The full page skeleton.
    pub fn page() -> Self {
        Self::with_regions(PAGE_REGIONS)
    }

    // ─── Markers ───

    fn marker_set(&self, target: MarkerTarget) -> &BTreeSet<String> {
        match target {
            MarkerTarget::Root => &self.root_classes,
            MarkerTarget::Body => &self.body_classes,
        }
    }

    fn marker_set_mut(&mut self, target: MarkerTarget) -> &mut BTreeSet<String> {
        match target {
            MarkerTarget::Root => &mut self.root_classes,
            MarkerTarget::Body => &mut self.body_classes,
        }
    }

    pub fn add_marker(&mut self, target: MarkerTarget, token: &str) {
        self.marker_set_mut(target).insert(token.to_string());
    }

    pub fn remove_marker(&mut self, target: MarkerTarget, token: &str) -> bool {
        self.marker_set_mut(target).remove(token)
    }

    pub fn has_marker(&self, target: MarkerTarget, token: &str) -> bool {
        self.marker_set(target).contains(token)
    }

    pub fn markers(&self, target: MarkerTarget) -> &BTreeSet<String> {
        self.marker_set(target)
    }

    pub fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes.insert(name.to_string(), value.to_string());
    }

    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(|s| s.as_str())
    }

    // ─── Elements ───

    pub fn set_element_class(&mut self, id: &str, class: &str, on: bool) {
        let state = self.elements.entry(id.to_string()).or_default();
        if on {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    pub fn element_has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|s| s.classes.contains(class))
            .unwrap_or(false)
    }

    pub fn set_element_attribute(&mut self, id: &str, name: &str, value: &str) {
        self.elements
            .entry(id.to_string())
            .or_default()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn element_attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|s| s.attributes.get(name))
            .map(|s| s.as_str())
    }

    // ─── Overlays ───

    pub fn overlay(&self, kind: OverlayKind) -> Option<&Overlay> {
        self.overlays.get(&kind)
    }

    pub fn overlay_mut(&mut self, kind: OverlayKind) -> Option<&mut Overlay> {
        self.overlays.get_mut(&kind)
    }

    /// Appends the overlay element if absent; an existing one is left as is.
    pub fn insert_overlay(&mut self, kind: OverlayKind) -> &mut Overlay {
        self.overlays.entry(kind).or_insert(Overlay {
            kind,
            geometry: OverlayGeometry::Unpositioned,
        })
    }

    /// Removes the overlay element entirely. Returns whether one existed.
    pub fn remove_overlay(&mut self, kind: OverlayKind) -> bool {
        self.overlays.remove(&kind).is_some()
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    // ─── Listeners ───

    pub fn attach_listener(&mut self, listener: Listener) {
        self.listeners.insert(listener);
    }

    pub fn detach_listener(&mut self, listener: Listener) {
        self.listeners.remove(&listener);
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    // ─── Regions ───

    /// Adds an (empty) element that views may render into.
    pub fn insert_region(&mut self, id: &str) {
        self.regions.entry(id.to_string()).or_default();
    }

    pub fn has_region(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    /// Replaces the inner markup of a region.
    pub fn render_region(&mut self, id: &str, html: String) -> Result<(), RenderError> {
        let region = self
            .regions
            .get_mut(id)
            .ok_or_else(|| RenderError::MissingTarget(id.to_string()))?;
        region.html = html;
        region.dirty = true;
        Ok(())
    }

    pub fn region_html(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(|r| r.html.as_str())
    }

    // ─── Announcements & scrolling ───

    pub fn announce(&mut self, message: impl Into<String>, politeness: Politeness) {
        self.announcements.push(Announcement {
            message: message.into(),
            politeness,
        });
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn last_announcement(&self) -> Option<&str> {
        self.announcements.last().map(|a| a.message.as_str())
    }

    pub fn request_scroll(&mut self, request: ScrollRequest) {
        self.scroll = Some(request);
    }

    /// Builds the delta for the WebView and clears dirty regions, queued announcements and
    /// pending scroll requests.
    pub fn take_patch(&mut self) -> DocumentPatch {
        let regions = self
            .regions
            .iter_mut()
            .filter(|(_, r)| r.dirty)
            .map(|(id, r)| {
                r.dirty = false;
                (id.clone(), r.html.clone())
            })
            .collect();

        DocumentPatch {
            root_classes: self.root_classes.iter().cloned().collect(),
            body_classes: self.body_classes.iter().cloned().collect(),
            root_attributes: self.root_attributes.clone(),
            elements: self.elements.clone(),
            overlays: self.overlays.values().cloned().collect(),
            listeners: self.listeners.iter().map(|l| l.name()).collect(),
            regions,
            announcements: std::mem::take(&mut self.announcements),
            scroll: self.scroll.take(),
        }
    }
}
