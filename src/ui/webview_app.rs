//! WebView front end using `wry` + `tao`.
//!
//! Architecture:
//! - The page shell is served over the `thinkup://` custom protocol with the stylesheet and
//!   the bridge script inlined.
//! - IPC from JS → Rust via `window.ipc.postMessage()`. Every message is routed to the
//!   [`App`], then the pending document patch and speech commands are pushed back with
//!   `evaluate_script`.
//! - Speech synthesis runs in the page: [`QueuedSpeechEngine`] collects commands and the
//!   bridge reports `started`/`ended`/`errored` back as `speech` messages.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, error, trace, warn};
use wry::{WebContext, WebViewBuilder};

use crate::app::{App, HeaderStub};
use crate::managers::content_controller::ContentControllerTrait;
use crate::managers::panel_presenter::PANEL_ID;
use crate::managers::shortcut_manager::KeyEvent;
use crate::platform;
use crate::services::accessibility_manager::{PreAnswered, SystemPreferences};
use crate::services::site_config::load_config;
use crate::services::speech_controller::QueuedSpeechEngine;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::config::SiteConfig;
use crate::types::document::DocumentPatch;
use crate::types::panel::ControlInput;
use crate::types::speech::{SpeechCommand, SpeechEvent};
use crate::views;

const STYLES_CSS: &str = include_str!("../../resources/ui/styles.css");
const BRIDGE_JS: &str = include_str!("../../resources/ui/bridge.js");

const SITE_URL: &str = "thinkup://localhost/";

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

struct SiteState {
    app: App,
    speech: QueuedSpeechEngine,
    started: bool,
}

/// Header buttons, by element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderButton {
    Contrast,
    FontSize,
    Theme,
    Accessibility,
    Stub(HeaderStub),
}

impl HeaderButton {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            "contrast-toggle" => Some(HeaderButton::Contrast),
            "font-size-toggle" => Some(HeaderButton::FontSize),
            "theme-toggle" => Some(HeaderButton::Theme),
            "accessibility-btn" => Some(HeaderButton::Accessibility),
            "language-toggle" => Some(HeaderButton::Stub(HeaderStub::Language)),
            "settings-btn" => Some(HeaderButton::Stub(HeaderStub::Settings)),
            _ => None,
        }
    }
}

// ─── IPC handler ───

/// Routes one bridge message. Returns a script to run before the patch, if any.
fn handle_ipc(state: &mut SiteState, message: &str) -> Option<String> {
    let msg: Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;
    trace!(cmd, "IPC message");
    let app = &mut state.app;

    match cmd {
        "ready" => {
            if state.started {
                // Page reloaded: every region must be sent again.
                let icon = app.theme_engine.toggle_icon();
                app.content.render_all(&mut app.document, icon);
                if let Some(html) = app.document.region_html(PANEL_ID).map(str::to_string) {
                    let _ = app.document.render_region(PANEL_ID, html);
                }
            } else {
                let system: SystemPreferences = serde_json::from_value(msg.clone()).unwrap_or_default();
                app.startup(system);
                state.started = true;
            }
            None
        }

        "key" => {
            let event: KeyEvent = serde_json::from_value(msg.clone()).ok()?;
            if let Some(action) = app.handle_key(&event) {
                debug!(action = action.as_str(), "Shortcut");
            }
            None
        }

        "pointer-down" => {
            app.handle_pointer_down();
            None
        }

        "pointer-move" => {
            let y = msg.get("y").and_then(|v| v.as_f64())?;
            app.handle_pointer_move(y);
            None
        }

        "selection" => {
            let text = msg.get("text").and_then(|v| v.as_str())?;
            app.handle_selection(text);
            None
        }

        "control" => {
            let control = msg.get("control").and_then(|v| v.as_str())?;
            let input: ControlInput = match serde_json::from_value(msg.clone()) {
                Ok(input) => input,
                Err(e) => {
                    warn!(control, error = %e, "Malformed control input");
                    return None;
                }
            };
            let confirmed = msg.get("confirmed").and_then(|v| v.as_bool()).unwrap_or(false);
            app.handle_control(control, input, &PreAnswered(confirmed));
            None
        }

        "header" => {
            let id = msg.get("button").and_then(|v| v.as_str())?;
            match HeaderButton::from_id(id)? {
                HeaderButton::Contrast => {
                    app.quick_contrast();
                }
                HeaderButton::FontSize => app.quick_font_size(),
                HeaderButton::Accessibility => {
                    app.toggle_panel();
                }
                HeaderButton::Stub(stub) => app.header_stub(stub),
                HeaderButton::Theme => {
                    app.toggle_theme();
                    return Some(theme_script(&app.theme_engine.css_block()));
                }
            }
            None
        }

        "person" => {
            let id = msg.get("id").and_then(|v| v.as_str())?;
            app.select_person(id);
            None
        }

        "filter" => {
            let category = msg.get("category").and_then(|v| v.as_str())?;
            app.filter_projects(category);
            None
        }

        "speech" => {
            let event: SpeechEvent = serde_json::from_value(msg.clone()).ok()?;
            if app.accessibility.speech_events().send(event).is_err() {
                warn!("Speech event channel closed");
            }
            None
        }

        "reduced-motion" => {
            let reduce = msg.get("reduce").and_then(|v| v.as_bool()).unwrap_or(false);
            app.system_reduced_motion(reduce);
            None
        }

        _ => {
            warn!(cmd, "Unknown IPC command");
            None
        }
    }
}

// ─── Scripts sent to the page ───

fn theme_script(css: &str) -> String {
    format!(
        "if(window.__thinkup_theme)__thinkup_theme({})",
        serde_json::to_string(css).unwrap_or_else(|_| "\"\"".into())
    )
}

fn apply_script(patch: &DocumentPatch) -> Option<String> {
    match serde_json::to_string(patch) {
        Ok(json) => Some(format!("if(window.__thinkup_apply)__thinkup_apply({})", json)),
        Err(e) => {
            error!(error = %e, "Could not serialize document patch");
            None
        }
    }
}

fn speech_script(commands: &[SpeechCommand]) -> Option<String> {
    if commands.is_empty() {
        return None;
    }
    serde_json::to_string(commands)
        .ok()
        .map(|json| format!("if(window.__thinkup_speech)__thinkup_speech({})", json))
}

/// Drains speech completions, then ships the patch and queued speech commands.
fn flush(state: &mut SiteState) -> String {
    for done in state.app.poll() {
        trace!(utterance = done.utterance_id, "Utterance finished");
    }
    let patch = state.app.document.take_patch();
    let commands = state.speech.take_commands();
    [apply_script(&patch), speech_script(&commands)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(";")
}

fn shell_html(config: &SiteConfig, theme_css: &str) -> String {
    views::page::render_shell(config, theme_css, STYLES_CSS, BRIDGE_JS)
}

fn respond(status: u16, content_type: &str, body: Vec<u8>) -> wry::http::Response<std::borrow::Cow<'static, [u8]>> {
    wry::http::Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body.into())
        .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(None);
    let db_path = platform::database_path();
    if let Some(dir) = db_path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let speech = QueuedSpeechEngine::new();
    let title = config.app.title.clone();
    let app = App::new(&db_path.to_string_lossy(), config, Box::new(speech.clone()))?;
    let state = Arc::new(Mutex::new(SiteState {
        app,
        speech,
        started: false,
    }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let protocol_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let mut web_context = WebContext::new(Some(platform::get_cache_dir()));
    let builder = WebViewBuilder::new_with_web_context(&mut web_context)
        .with_custom_protocol("thinkup".into(), move |_wv_id, request| {
            if request.uri().path() != "/" {
                return respond(404, "text/plain", b"not found".to_vec());
            }
            let html = match protocol_state.lock() {
                Ok(mut s) => {
                    s.app.theme_engine.load();
                    shell_html(&s.app.config, &s.app.theme_engine.css_block())
                }
                Err(_) => shell_html(&SiteConfig::default(), ""),
            };
            respond(200, "text/html; charset=utf-8", html.into_bytes())
        })
        .with_url(SITE_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let Ok(mut s) = ipc_state.lock() else {
                error!("Site state lock poisoned");
                return;
            };
            let before = handle_ipc(&mut s, body);
            let script = match before {
                Some(pre) => format!("{};{}", pre, flush(&mut s)),
                None => flush(&mut s),
            };
            if !script.is_empty() {
                let _ = ipc_proxy.send_event(UserEvent::EvalScript(script));
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("Failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Ok(mut s) = state.lock() {
                    s.app.shutdown();
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!(error = %e, "Script evaluation failed");
                }
            }

            _ => {}
        }
    })
}
