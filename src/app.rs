//! App Core for ThinkUp.
//!
//! Central struct holding the page document and every manager and service, plus the
//! routing of page events (keys, pointer, controls) to them.

use std::sync::Arc;

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::managers::content_controller::{ContentController, ContentControllerTrait};
use crate::managers::event_bus::EventBus;
use crate::managers::panel_presenter::{PanelPresenter, PanelPresenterTrait};
use crate::managers::person_registry::PersonRegistry;
use crate::managers::shortcut_manager::{
    KeyEvent, ShortcutAction, ShortcutManager, ShortcutManagerTrait,
};
use crate::services::accessibility_manager::{AccessibilityManager, Confirm, SystemPreferences};
use crate::services::speech_controller::SpeechEngine;
use crate::services::storage::{SharedStore, SqliteStore};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::config::SiteConfig;
use crate::types::document::{Document, Politeness, ScrollRequest};
use crate::types::panel::{ControlInput, PanelAction};
use crate::types::settings::{SettingField, ThemeMode};
use crate::types::speech::SpeechCompletion;

/// Header buttons whose features are not built yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStub {
    Language,
    Settings,
}

impl HeaderStub {
    pub fn message(&self) -> &'static str {
        match self {
            HeaderStub::Language => "Funcionalidad de cambio de idioma en desarrollo",
            HeaderStub::Settings => "Panel de configuración en desarrollo",
        }
    }
}

/// Central application struct holding all managers and services.
pub struct App {
    pub db: Arc<Database>,
    pub config: SiteConfig,
    pub document: Document,
    pub accessibility: AccessibilityManager,
    pub content: ContentController,
    pub theme_engine: ThemeEngine,
    pub shortcut_manager: ShortcutManager,
    pub panel: PanelPresenter,
    pub events: EventBus,
}

impl App {
    /// Opens (or creates) the database at `db_path` and wires every component to it.
    pub fn new(
        db_path: &str,
        config: SiteConfig,
        engine: Box<dyn SpeechEngine>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Self::assemble(db, config, engine)
    }

    /// Same wiring over an in-memory database. Nothing outlives the process.
    pub fn in_memory(
        config: SiteConfig,
        engine: Box<dyn SpeechEngine>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        Self::assemble(db, config, engine)
    }

    fn assemble(
        db: Arc<Database>,
        config: SiteConfig,
        engine: Box<dyn SpeechEngine>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let storage: SharedStore = Arc::new(SqliteStore::new(db.clone()));
        let registry = PersonRegistry::bundled()?;
        let events = EventBus::new();

        let accessibility = AccessibilityManager::new(storage.clone(), engine, &config.speech.lang);
        let content = ContentController::new(
            registry,
            storage.clone(),
            events.clone(),
            &config.content.default_person,
        );
        let theme_engine = ThemeEngine::new(storage);
        let shortcut_manager = ShortcutManager::new();
        let hints = shortcut_manager
            .list_shortcuts()
            .into_iter()
            .map(|(action, chord)| (chord, action.description()))
            .collect();
        let panel = PanelPresenter::new(hints);

        Ok(Self {
            db,
            config,
            document: Document::page(),
            accessibility,
            content,
            theme_engine,
            shortcut_manager,
            panel,
            events,
        })
    }

    /// Startup sequence: theme, accessibility preferences, then content.
    pub fn startup(&mut self, system: SystemPreferences) {
        self.theme_engine.load();
        self.theme_engine.apply(&mut self.document);
        self.accessibility.init(&mut self.document, system);
        let icon = self.theme_engine.toggle_icon();
        if let Err(e) = self.content.init(&mut self.document, icon) {
            warn!(error = %e, "Content could not be loaded");
        }
        info!(title = %self.config.app.title, db = ?self.db.path(), "ThinkUp started");
    }

    /// Shutdown sequence: silence any utterance in flight.
    pub fn shutdown(&mut self) {
        self.accessibility.cancel_speech();
        info!("ThinkUp stopped");
    }

    // === Keyboard ===

    /// Routes a key press: modality tracking first, then the global shortcuts.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ShortcutAction> {
        self.accessibility.on_key_down(&mut self.document, &event.key);
        let action = self.shortcut_manager.resolve(event)?;
        self.run_shortcut(action);
        Some(action)
    }

    fn run_shortcut(&mut self, action: ShortcutAction) {
        let doc = &mut self.document;
        match action {
            ShortcutAction::TogglePanel => {
                self.panel.toggle(&self.accessibility, doc);
            }
            ShortcutAction::ToggleHighContrast => {
                self.accessibility.toggle(doc, SettingField::HighContrast);
            }
            ShortcutAction::IncreaseFontSize => {
                self.accessibility.increase_font_size(doc);
            }
            ShortcutAction::DecreaseFontSize => {
                self.accessibility.decrease_font_size(doc);
            }
            ShortcutAction::CloseOverlays => {
                self.panel.close(doc);
            }
            ShortcutAction::ScrollToTop => {
                doc.request_scroll(ScrollRequest::Top);
                doc.announce("Navegando al inicio de la página", Politeness::Polite);
            }
            ShortcutAction::ScrollToBottom => {
                doc.request_scroll(ScrollRequest::Bottom);
                doc.announce("Navegando al final de la página", Politeness::Polite);
            }
        }
        self.panel.sync(self.accessibility.settings(), &mut self.document);
    }

    // === Pointer and selection ===

    pub fn handle_pointer_down(&mut self) {
        self.accessibility.on_pointer_down(&mut self.document);
    }

    pub fn handle_pointer_move(&mut self, y: f64) -> usize {
        self.accessibility.on_pointer_move(&mut self.document, y)
    }

    pub fn handle_selection(&mut self, text: &str) -> Option<u64> {
        self.accessibility.read_selection(text)
    }

    // === Panel and header controls ===

    pub fn handle_control(
        &mut self,
        control_id: &str,
        input: ControlInput,
        confirm: &dyn Confirm,
    ) -> Option<PanelAction> {
        self.panel
            .handle_input(&mut self.accessibility, &mut self.document, control_id, input, confirm)
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel.toggle(&self.accessibility, &mut self.document)
    }

    /// Header quick toggle for high contrast.
    pub fn quick_contrast(&mut self) -> Option<bool> {
        let on = self
            .accessibility
            .toggle(&mut self.document, SettingField::HighContrast);
        self.panel.sync(self.accessibility.settings(), &mut self.document);
        on
    }

    /// Live change of the OS reduced-motion preference.
    pub fn system_reduced_motion(&mut self, reduce: bool) {
        self.accessibility
            .on_system_reduced_motion(&mut self.document, reduce);
        self.panel.sync(self.accessibility.settings(), &mut self.document);
    }

    /// Header quick step for the font size.
    pub fn quick_font_size(&mut self) {
        self.accessibility.increase_font_size(&mut self.document);
        self.panel.sync(self.accessibility.settings(), &mut self.document);
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.theme_engine.toggle(&mut self.document);
        self.content
            .render_header(&mut self.document, self.theme_engine.toggle_icon());
        mode
    }

    pub fn header_stub(&mut self, stub: HeaderStub) {
        self.document.announce(stub.message(), Politeness::Polite);
    }

    // === Content ===

    pub fn select_person(&mut self, person_id: &str) {
        self.content.select_person(person_id);
        self.content
            .pump_events(&mut self.document, self.theme_engine.toggle_icon());
    }

    pub fn filter_projects(&mut self, category: &str) {
        self.content.filter_projects(&mut self.document, category);
    }

    // === Event loop ===

    /// Drains speech completions and pending site events.
    pub fn poll(&mut self) -> Vec<SpeechCompletion> {
        let icon = self.theme_engine.toggle_icon();
        self.content.pump_events(&mut self.document, icon);
        self.accessibility.poll_speech()
    }
}
