// ThinkUp state managers
// Managers hold page-level state: content lists, the accessibility panel, shortcuts, events.

pub mod content_controller;
pub mod event_bus;
pub mod experience_model;
pub mod panel_presenter;
pub mod person_registry;
pub mod project_model;
pub mod shortcut_manager;
pub mod skill_model;
