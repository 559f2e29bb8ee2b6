//! Page skeleton served to the WebView. Regions start empty and are filled by patches.

use super::escape_html;
use crate::types::config::SiteConfig;
use crate::types::document::PAGE_REGIONS;

/// Id of the polite live region used for announcements.
pub const ANNOUNCER_ID: &str = "a11y-announcer";

/// Id of the `<style>` element holding the theme palette, replaced on theme toggle.
pub const THEME_STYLE_ID: &str = "theme-vars";

fn region_tag(id: &str) -> &'static str {
    match id {
        "header" => "header",
        "footer" => "footer",
        _ => "section",
    }
}

/// `theme_css` is the `:root` palette block; `stylesheet` and `bridge_js` are inlined because
/// custom-protocol pages cannot load sibling resources on every platform.
pub fn render_shell(config: &SiteConfig, theme_css: &str, stylesheet: &str, bridge_js: &str) -> String {
    let mut html = String::with_capacity(stylesheet.len() + bridge_js.len() + 2048);
    html.push_str("<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"UTF-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\"><meta name=\"author\" content=\"{}\">",
        escape_html(&config.app.description),
        escape_html(&config.personal.name)
    ));
    html.push_str(&format!("<title>{}</title>", escape_html(&config.app.title)));
    html.push_str(&format!("<style id=\"{}\">{}</style><style>", THEME_STYLE_ID, theme_css));
    html.push_str(&format!(
        ":root{{--transition-duration:{}ms;--scroll-offset:{}px}}",
        config.animations.transition_duration_ms, config.animations.scroll_offset
    ));
    html.push_str(stylesheet);
    html.push_str("</style></head><body>");
    html.push_str("<a href=\"#main\" class=\"skip-link\">Saltar al contenido principal</a>");
    html.push_str(&format!(
        "<div id=\"{}\" class=\"sr-only\" aria-live=\"polite\" aria-atomic=\"true\"></div>",
        ANNOUNCER_ID
    ));
    let mut in_main = false;
    for id in PAGE_REGIONS {
        let tag = region_tag(id);
        if tag == "section" && !in_main {
            html.push_str("<main id=\"main\">");
            in_main = true;
        } else if tag != "section" && in_main {
            html.push_str("</main>");
            in_main = false;
        }
        html.push_str(&format!("<{tag} id=\"{id}\"></{tag}>", tag = tag, id = id));
    }
    if in_main {
        html.push_str("</main>");
    }
    html.push_str(&format!(
        "<script>window.__thinkup_config={{\"scrollOffset\":{}}};</script><script>",
        config.animations.scroll_offset
    ));
    html.push_str(bridge_js);
    html.push_str("</script></body></html>");
    html
}
