//! ThinkUp: personal portfolio with an accessibility control panel.
//!
//! Entry point: opens the portfolio in a native window hosting a WebView.
//! When built without the `gui` feature, runs a console demo of every component.

#[cfg(feature = "gui")]
fn main() -> std::process::ExitCode {
    use thinkup::logging::{init_logging, LogConfig};
    use thinkup::services::site_config::load_config;

    let level = load_config(None).logging.level;
    init_logging(&LogConfig::default().with_level(&level));
    match thinkup::ui::webview_app::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "ThinkUp failed to start");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
type DemoResult = Result<(), Box<dyn std::error::Error>>;

#[cfg(not(feature = "gui"))]
fn main() -> DemoResult {
    use thinkup::logging::{init_logging, LogConfig};
    init_logging(&LogConfig::default().with_level("warn"));

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                ThinkUp v{} · Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║       Portfolio with an accessibility control panel         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database()?;
    demo_storage();
    demo_preference_store();
    demo_profiles();
    demo_applicator();
    demo_speech();
    demo_shortcuts();
    demo_theme();
    demo_content()?;
    demo_app_core()?;

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_database() -> DemoResult {
    use thinkup::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory()?;
    let conn = db.connection();
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")?;
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .filter_map(|r| r.ok())
        .collect();
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn demo_storage() {
    use thinkup::services::storage::{KeyValueStore, MemoryStore};
    section("Key-Value Storage");

    let store = MemoryStore::with_quota(32);
    println!("  set(theme, dark) = {:?}", store.set("theme", "dark").is_ok());
    let big = "x".repeat(64);
    match store.set("accessibility-settings", &big) {
        Ok(()) => println!("  Oversized write unexpectedly accepted"),
        Err(e) => println!("  Oversized write rejected: {}", e),
    }
    println!("  theme is still {:?}", store.get("theme").ok().flatten());
    println!("  ✓ Storage OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_preference_store() {
    use std::sync::Arc;
    use thinkup::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
    use thinkup::services::storage::MemoryStore;
    use thinkup::types::settings::SettingField;
    section("Preference Store");

    let storage = Arc::new(MemoryStore::new());
    let mut store = PreferenceStore::new(storage.clone());
    store.load();
    println!("  First run, persisted: {}", store.has_persisted());

    let _ = store.toggle_flag(SettingField::HighContrast);
    match store.set_font_size("huge") {
        Ok(size) => println!("  Font size set to {}", size),
        Err(e) => println!("  Rejected: {}", e),
    }
    println!("  speechRate(9.0) stored as {:?}", store.set_speech_rate(9.0));

    let mut reloaded = PreferenceStore::new(storage);
    let record = reloaded.load();
    println!(
        "  Reloaded: highContrast={} fontSize={} speechRate={}",
        record.high_contrast, record.font_size, record.speech_rate
    );
    println!("  ✓ PreferenceStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_profiles() {
    use thinkup::services::profile_resolver::{self, PROFILE_TABLE};
    section("Profile Resolver");

    for (name, patch) in PROFILE_TABLE.iter() {
        let fields: Vec<String> = patch.fields().iter().map(|f| f.to_string()).collect();
        println!("  {:<11} → {}", name.as_str(), fields.join(", "));
    }
    println!("  resolve(\"unknown\") = {:?}", profile_resolver::resolve("unknown").map(|(n, _)| n));
    println!("  ✓ ProfileResolver OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_applicator() {
    use thinkup::services::preference_applicator;
    use thinkup::types::document::{Document, MarkerTarget};
    use thinkup::types::settings::{ColorBlindMode, SettingsRecord};
    section("Preference Applicator");

    let mut doc = Document::page();
    let mut record = SettingsRecord::default();
    record.color_blind_mode = ColorBlindMode::Protanopia;
    record.reading_guide = true;
    preference_applicator::apply(&mut doc, &record);
    println!("  Root markers: {:?}", doc.markers(MarkerTarget::Root));

    record.color_blind_mode = ColorBlindMode::Grayscale;
    preference_applicator::apply(&mut doc, &record);
    println!("  After switch: {:?}", doc.markers(MarkerTarget::Root));
    println!("  Overlays: {}", doc.overlay_count());
    println!("  Overlays moved: {}", preference_applicator::track_pointer(&mut doc, &record, 240.0));
    println!("  ✓ PreferenceApplicator OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_speech() {
    use thinkup::services::speech_controller::{QueuedSpeechEngine, SpeechController};
    use thinkup::types::settings::SettingsRecord;
    use thinkup::types::speech::SpeechEvent;
    section("Speech Controller");

    let engine = QueuedSpeechEngine::new();
    let mut speech = SpeechController::new(Box::new(engine.clone()), "es-ES");
    let record = SettingsRecord::default();
    let first = speech.speak("Hola", &record);
    let second = speech.speak("Bienvenido", &record);
    println!("  Utterances: {:?} then {:?}", first, second);
    println!("  Commands issued: {}", engine.take_commands().len());

    if let (Some(first), Some(second)) = (first, second) {
        let tx = speech.completion_sender();
        let _ = tx.send(SpeechEvent::Ended { id: first });
        let _ = tx.send(SpeechEvent::Ended { id: second });
    }
    let done = speech.poll();
    println!("  Completions delivered: {} (stale one dropped)", done.len());
    println!("  State: {:?}", speech.state());
    println!("  ✓ SpeechController OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_shortcuts() {
    use thinkup::managers::shortcut_manager::{KeyEvent, ShortcutManager, ShortcutManagerTrait};
    section("Shortcut Manager");

    let mgr = ShortcutManager::new();
    for (action, chord) in mgr.list_shortcuts() {
        println!("  {:<10} {}", chord, action.description());
    }
    println!("  Alt+A → {:?}", mgr.resolve(&KeyEvent::alt("a")));
    println!("  Ctrl+Alt+A → {:?}", mgr.resolve(&KeyEvent { ctrl: true, ..KeyEvent::alt("a") }));
    println!("  ✓ ShortcutManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_theme() {
    use std::sync::Arc;
    use thinkup::services::storage::MemoryStore;
    use thinkup::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
    use thinkup::types::document::Document;
    section("Theme Engine");

    let mut engine = ThemeEngine::new(Arc::new(MemoryStore::new()));
    let mut doc = Document::new();
    println!("  Loaded theme: {}", engine.load());
    println!("  Toggled to: {}", engine.toggle(&mut doc));
    println!("  data-theme = {:?}", doc.root_attribute("data-theme"));
    println!("  CSS variables: {}", engine.get_css_variables().len());
    println!("  ✓ ThemeEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_content() -> DemoResult {
    use thinkup::managers::experience_model::{ExperienceModel, ExperienceModelTrait};
    use thinkup::managers::person_registry::{PersonRegistry, PersonRegistryTrait};
    use thinkup::managers::project_model::{ProjectModel, ProjectModelTrait};
    use thinkup::managers::skill_model::{SkillModel, SkillModelTrait};
    section("Content Models");

    let registry = PersonRegistry::bundled()?;
    for person in registry.list_persons() {
        println!("  Person {:<8} {} ({})", person.id, person.name, person.role);
    }
    let person = registry
        .resolve("nobody", "jassiel")
        .ok_or("bundled fixtures have no persons")?;
    println!("  Unknown id resolved to: {}", person.id);

    let mut projects = ProjectModel::new();
    projects.replace(person.projects.clone());
    println!("  Projects: {} in categories {:?}", projects.len(), projects.categories());

    let mut skills = SkillModel::new();
    skills.replace(person.skills.clone(), &registry.defaults().skills);
    for (category, members) in skills.get_by_category() {
        println!("  Skills / {}: {}", category, members.len());
    }

    let mut experience = ExperienceModel::new();
    experience.replace(person.experience.clone());
    for job in experience.sort_by_date() {
        println!("  {} @ {} ({})", job.role, job.company, job.period);
    }
    println!("  ✓ Content models OK");
    println!();
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() -> DemoResult {
    use thinkup::app::App;
    use thinkup::managers::shortcut_manager::KeyEvent;
    use thinkup::services::accessibility_manager::SystemPreferences;
    use thinkup::services::speech_controller::NullSpeechEngine;
    use thinkup::types::config::SiteConfig;
    use thinkup::types::panel::ControlInput;
    section("App Core (full lifecycle)");

    let mut app = App::in_memory(SiteConfig::default(), Box::new(NullSpeechEngine))?;
    app.startup(SystemPreferences::default());
    let patch = app.document.take_patch();
    println!("  Startup rendered {} regions", patch.regions.len());

    app.handle_key(&KeyEvent::alt("a"));
    println!("  Alt+A → panel open: {}", app.panel.is_open());
    app.handle_control("profile-low-vision", ControlInput::Activate, &|_: &str| true);
    println!("  Loaded low-vision profile: fontSize={}", app.accessibility.settings().font_size);
    app.select_person("erick");
    let patch = app.document.take_patch();
    println!(
        "  Person switch re-rendered {} regions, {} announcements",
        patch.regions.len(),
        patch.announcements.len()
    );

    app.shutdown();
    println!("  ✓ App Core OK");
    Ok(())
}
