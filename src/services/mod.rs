// ThinkUp services
// Persistence, the accessibility preference engine, speech, theming and configuration.

pub mod accessibility_manager;
pub mod preference_applicator;
pub mod preference_store;
pub mod profile_resolver;
pub mod site_config;
pub mod speech_controller;
pub mod storage;
pub mod theme_engine;
