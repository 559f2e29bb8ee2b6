//! ThinkUp UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The page is plain HTML/CSS assembled by [`crate::views`]; a small bridge script forwards
//! events over wry IPC and applies document patches.

pub mod webview_app;
