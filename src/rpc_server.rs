//! ThinkUp RPC Server: JSON-RPC over stdin/stdout for headless front-ends and tests.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"settings.toggle", "params":{"field":"highContrast"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{error, info, warn};

use thinkup::app::App;
use thinkup::logging::{init_logging, LogConfig};
use thinkup::platform;
use thinkup::rpc_handler::handle_method;
use thinkup::services::accessibility_manager::SystemPreferences;
use thinkup::services::site_config::load_config;
use thinkup::services::speech_controller::NullSpeechEngine;

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self {
            window_start: Instant::now(),
            request_count: 0,
            max_per_second,
        }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> ExitCode {
    let config = load_config(None);
    init_logging(&LogConfig::default().with_level(&config.logging.level).with_ansi(false));

    let db_path = platform::database_path();
    if let Some(dir) = db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!(path = %dir.display(), error = %e, "Could not create data directory");
        }
    }
    let mut app = match App::new(&db_path.to_string_lossy(), config, Box::new(NullSpeechEngine)) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Failed to initialize ThinkUp");
            return ExitCode::FAILURE;
        }
    };
    app.startup(SystemPreferences::default());
    let app = Mutex::new(app);

    let mut stdout = io::stdout().lock();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if emit(&mut stdout, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    let mut rate_limiter = RateLimiter::new(200);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or_else(|| json!({}));
                    match handle_method(&app, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };
        if emit(&mut stdout, &response).is_err() {
            break;
        }
    }

    if let Ok(mut app) = app.lock() {
        app.shutdown();
    }
    info!("RPC server exiting");
    ExitCode::SUCCESS
}
