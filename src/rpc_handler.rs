//! RPC method handler for the ThinkUp JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! appropriate managers and services via the `App` struct.

use std::sync::Mutex;

use crate::app::{App, HeaderStub};
use crate::managers::content_controller::ContentControllerTrait;
use crate::managers::experience_model::ExperienceModelTrait;
use crate::managers::panel_presenter::PanelPresenterTrait;
use crate::managers::person_registry::PersonRegistryTrait;
use crate::managers::project_model::ProjectModelTrait;
use crate::managers::shortcut_manager::{KeyEvent, ShortcutManagerTrait};
use crate::managers::skill_model::SkillModelTrait;
use crate::services::accessibility_manager::PreAnswered;
use crate::services::profile_resolver;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::content::{NewProject, NewSkill, Project};
use crate::types::errors::PreferenceError;
use crate::types::panel::ControlInput;
use crate::types::profile::ProfileName;
use crate::types::settings::{FontSize, SettingField};

use serde_json::{json, Value};

fn str_param<'a>(params: &'a Value, name: &'static str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn f64_param(params: &Value, name: &'static str) -> Result<f64, String> {
    params
        .get(name)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| format!("missing {}", name))
}

fn field_param(params: &Value) -> Result<SettingField, String> {
    str_param(params, "field")?
        .parse()
        .map_err(|e: PreferenceError| e.to_string())
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

fn settings_value(a: &App) -> Result<Value, String> {
    to_value(a.accessibility.settings())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let mut guard = app.lock().map_err(|e| e.to_string())?;
    let a = &mut *guard;

    match method {
        // ─── Settings ───
        "settings.get" => settings_value(a),
        "settings.toggle" => {
            let field = field_param(params)?;
            let value = a
                .accessibility
                .toggle(&mut a.document, field)
                .ok_or_else(|| PreferenceError::NotAFlag(field.to_string()).to_string())?;
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            Ok(json!({"field": field, "value": value}))
        }
        "settings.set_flag" => {
            let field = field_param(params)?;
            let value = params
                .get("value")
                .and_then(|v| v.as_bool())
                .ok_or("missing value")?;
            if !a.accessibility.set_flag(&mut a.document, field, value) {
                return Err(PreferenceError::NotAFlag(field.to_string()).to_string());
            }
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            settings_value(a)
        }
        "settings.set_font_size" => {
            let size: FontSize = str_param(params, "size")?
                .parse()
                .map_err(|e: PreferenceError| e.to_string())?;
            a.accessibility.set_font_size(&mut a.document, size.as_str());
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            Ok(json!({"fontSize": size}))
        }
        "settings.increase_font_size" | "settings.decrease_font_size" => {
            let stepped = if method == "settings.increase_font_size" {
                a.accessibility.increase_font_size(&mut a.document)
            } else {
                a.accessibility.decrease_font_size(&mut a.document)
            };
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            Ok(json!({"changed": stepped.is_some(), "fontSize": a.accessibility.settings().font_size}))
        }
        "settings.set_choice" => {
            let field = field_param(params)?;
            let token = str_param(params, "value")?;
            if !field.tokens().contains(&token) || field == SettingField::CurrentProfile {
                return Err(PreferenceError::InvalidValue {
                    field: field.to_string(),
                    value: token.to_string(),
                }
                .to_string());
            }
            a.accessibility.set_choice(&mut a.document, field, token);
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            settings_value(a)
        }
        "settings.set_speech_rate" => {
            let rate = f64_param(params, "rate")?;
            let stored = a.accessibility.set_speech_rate(rate).ok_or("rate must be finite")?;
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            Ok(json!({"speechRate": stored}))
        }
        "settings.set_speech_volume" => {
            let volume = f64_param(params, "volume")?;
            let stored = a
                .accessibility
                .set_speech_volume(volume)
                .ok_or("volume must be finite")?;
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            Ok(json!({"speechVolume": stored}))
        }
        "settings.reset" => {
            let confirm = params.get("confirm").and_then(|v| v.as_bool()).unwrap_or(false);
            let reset = a.accessibility.reset(&mut a.document, &PreAnswered(confirm));
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            Ok(json!({"reset": reset}))
        }

        // ─── Profiles ───
        "profile.list" => {
            let names: Vec<Value> = ProfileName::ALL
                .iter()
                .map(|p| json!({"name": p.as_str(), "label": p.label()}))
                .collect();
            Ok(json!(names))
        }
        "profile.load" => {
            let name = str_param(params, "name")?;
            if profile_resolver::resolve(name).is_none() {
                return Err(PreferenceError::UnknownProfile(name.to_string()).to_string());
            }
            a.accessibility.load_profile(&mut a.document, name);
            a.panel.sync(a.accessibility.settings(), &mut a.document);
            settings_value(a)
        }

        // ─── Panel ───
        "panel.toggle" => Ok(json!({"open": a.toggle_panel()})),
        "panel.controls" => to_value(&a.panel.controls()),
        "panel.input" => {
            let control = str_param(params, "control")?.to_string();
            let input: ControlInput = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid input: {}", e))?;
            let confirm = params.get("confirm").and_then(|v| v.as_bool()).unwrap_or(false);
            let action = a
                .handle_control(&control, input, &PreAnswered(confirm))
                .ok_or_else(|| format!("input does not match control {}", control))?;
            Ok(json!({"action": format!("{:?}", action)}))
        }

        // ─── Speech ───
        "speech.speak" => {
            let text = str_param(params, "text")?;
            Ok(json!({"utteranceId": a.accessibility.speak(text)}))
        }
        "speech.pause" => {
            a.accessibility.pause_speech();
            to_value(&a.accessibility.speech().state())
        }
        "speech.resume" => {
            a.accessibility.resume_speech();
            to_value(&a.accessibility.speech().state())
        }
        "speech.cancel" => Ok(json!({"cancelled": a.accessibility.cancel_speech()})),
        "speech.state" => to_value(&a.accessibility.speech().state()),
        "speech.event" => {
            let event = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid speech event: {}", e))?;
            a.accessibility
                .speech_events()
                .send(event)
                .map_err(|e| e.to_string())?;
            to_value(&a.poll())
        }

        // ─── Page events ───
        "key.press" => {
            let event: KeyEvent = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid key event: {}", e))?;
            let action = a.handle_key(&event);
            Ok(json!({"action": action.map(|x| x.as_str())}))
        }
        "pointer.move" => {
            let y = f64_param(params, "y")?;
            Ok(json!({"updated": a.handle_pointer_move(y)}))
        }
        "system.reduced_motion" => {
            let reduce = params
                .get("reduce")
                .and_then(|v| v.as_bool())
                .ok_or_else(|| "missing reduce".to_string())?;
            a.system_reduced_motion(reduce);
            Ok(json!({"reducedMotion": a.accessibility.settings().reduced_motion}))
        }
        "header.stub" => {
            let stub = match str_param(params, "button")? {
                "language" => HeaderStub::Language,
                "settings" => HeaderStub::Settings,
                other => return Err(format!("unknown header button: {}", other)),
            };
            a.header_stub(stub);
            Ok(json!({"message": stub.message()}))
        }
        "shortcuts.list" => {
            let list: Vec<Value> = a
                .shortcut_manager
                .list_shortcuts()
                .into_iter()
                .map(|(action, chord)| json!({"action": action.as_str(), "chord": chord}))
                .collect();
            Ok(json!(list))
        }

        // ─── Theme ───
        "theme.get" => Ok(json!({
            "theme": a.theme_engine.get_theme(),
            "variables": a.theme_engine.get_css_variables(),
        })),
        "theme.toggle" => Ok(json!({"theme": a.toggle_theme()})),

        // ─── Content ───
        "content.persons" => to_value(&a.content.registry().list_persons()),
        "content.active_person" => Ok(json!(a.content.active_person().map(|p| p.id.clone()))),
        "content.select_person" => {
            let id = str_param(params, "id")?;
            a.select_person(id);
            Ok(json!({"active": a.content.active_person().map(|p| p.id.clone())}))
        }
        "content.projects" => {
            let projects: Vec<&Project> = match params.get("category").and_then(|v| v.as_str()) {
                Some(category) => a.content.projects().filter_by_category(category),
                None => match params.get("technology").and_then(|v| v.as_str()) {
                    Some(tech) => a.content.projects().filter_by_technology(tech),
                    None => a.content.projects().get_all().iter().collect(),
                },
            };
            to_value(&projects)
        }
        "content.project" => {
            let id = str_param(params, "id")?;
            let project = a
                .content
                .projects()
                .get_by_id(id)
                .ok_or_else(|| format!("project not found: {}", id))?;
            to_value(project)
        }
        "content.filter_projects" => {
            let category = str_param(params, "category")?;
            a.filter_projects(category);
            Ok(json!({"filter": a.content.active_filter()}))
        }
        "content.add_project" => {
            let input: NewProject = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid project: {}", e))?;
            if input.title.trim().is_empty() {
                return Err("missing title".to_string());
            }
            let project = a.content.add_project(&mut a.document, input);
            to_value(&project)
        }
        "content.skills" => {
            let groups: Vec<Value> = a
                .content
                .skills()
                .get_by_category()
                .into_iter()
                .map(|(category, skills)| json!({"category": category, "skills": skills}))
                .collect();
            Ok(json!(groups))
        }
        "content.add_skill" => {
            let input: NewSkill = serde_json::from_value(params.clone())
                .map_err(|e| format!("invalid skill: {}", e))?;
            if input.name.trim().is_empty() {
                return Err("missing name".to_string());
            }
            let skill = a.content.add_skill(&mut a.document, input);
            to_value(&skill)
        }
        "content.experience" => to_value(&a.content.experience().sort_by_date()),

        // ─── Document / config ───
        "ping" => Ok(json!({"pong": true})),
        "document.patch" => to_value(&a.document.take_patch()),
        "config.get" => to_value(&a.config),

        _ => Err(format!("unknown method: {}", method)),
    }
}
