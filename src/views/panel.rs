//! Accessibility panel markup.
//!
//! Every interactive element carries `data-control` (the control id) and `data-input` (the
//! input kind the bridge reports). Live values are pushed later as element attributes.

use super::escape_html;
use crate::types::panel::{ControlKind, PanelControl, PanelSection};

const CLOSE_CONTROL_ID: &str = "panel-close";

fn control_markup(control: &PanelControl) -> String {
    let id = control.id;
    let label = escape_html(control.label);
    match &control.kind {
        ControlKind::Toggle { checked } => format!(
            "<label class=\"accessibility-toggle-label\">{label}<input type=\"checkbox\" id=\"{id}\" data-control=\"{id}\" data-input=\"activate\"{checked}></label>",
            label = label,
            id = id,
            checked = if *checked { " checked" } else { "" },
        ),
        ControlKind::Select { options, selected } => {
            let opts: String = options
                .iter()
                .map(|o| {
                    format!(
                        "<option value=\"{}\"{}>{}</option>",
                        o.value,
                        if o.value == selected { " selected" } else { "" },
                        escape_html(o.label)
                    )
                })
                .collect();
            format!(
                "<div class=\"accessibility-control\"><label>{label}<select id=\"{id}\" data-control=\"{id}\" data-input=\"select\">{opts}</select></label></div>",
                label = label,
                id = id,
                opts = opts,
            )
        }
        ControlKind::Range {
            min,
            max,
            step,
            value,
            display,
        } => format!(
            "<label>{label}: <span id=\"{id}-display\">{display}</span><input type=\"range\" id=\"{id}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" data-control=\"{id}\" data-input=\"range\"></label>",
            label = label,
            id = id,
            display = escape_html(display),
            min = min,
            max = max,
            step = step,
            value = value,
        ),
        ControlKind::Stepper { display } => format!(
            "<div class=\"accessibility-control\"><span class=\"control-label\">{label}</span><div class=\"font-size-controls\" id=\"{id}\">\
             <button data-control=\"{id}\" data-input=\"decrease\" aria-label=\"Disminuir\">A-</button>\
             <span id=\"{id}-display\">{display}</span>\
             <button data-control=\"{id}\" data-input=\"increase\" aria-label=\"Aumentar\">A+</button></div></div>",
            label = label,
            id = id,
            display = escape_html(display),
        ),
        ControlKind::ProfileButton { profile } => format!(
            "<button class=\"profile-btn\" id=\"{id}\" data-control=\"{id}\" data-input=\"activate\" data-profile=\"{profile}\">{label}</button>",
            id = id,
            profile = profile.as_str(),
            label = label,
        ),
        ControlKind::Button => format!(
            "<button class=\"btn-reset\" id=\"{id}\" data-control=\"{id}\" data-input=\"activate\"><span class=\"material-icons\">restore</span>{label}</button>",
            id = id,
            label = label,
        ),
    }
}

fn section_markup(section: PanelSection, controls: &[&PanelControl]) -> String {
    let body: String = controls.iter().map(|c| control_markup(c)).collect();
    let body = if section == PanelSection::Profiles {
        format!("<div class=\"profile-buttons\">{}</div>", body)
    } else {
        body
    };
    format!(
        "<div class=\"accessibility-section\" data-section=\"{}\"><h3><span class=\"material-icons\">{}</span> {}</h3>{}</div>",
        match section {
            PanelSection::Profiles => "profiles",
            PanelSection::Speech => "speech",
            PanelSection::Display => "display",
            PanelSection::Spacing => "spacing",
            PanelSection::Navigation => "navigation",
            PanelSection::Content => "content",
            PanelSection::Reset => "reset",
        },
        section.icon(),
        section.title(),
        body
    )
}

/// Full panel body. `shortcut_hints` are `(chord, description)` pairs.
pub fn render(controls: &[PanelControl], shortcut_hints: &[(String, &'static str)]) -> String {
    let mut sections: Vec<(PanelSection, Vec<&PanelControl>)> = Vec::new();
    for control in controls.iter().filter(|c| c.id != CLOSE_CONTROL_ID) {
        match sections.iter_mut().find(|(s, _)| *s == control.section) {
            Some((_, members)) => members.push(control),
            None => sections.push((control.section, vec![control])),
        }
    }
    sections.sort_by_key(|(s, _)| *s);

    let body: String = sections
        .iter()
        .map(|(section, members)| section_markup(*section, members))
        .collect();
    let hints: String = shortcut_hints
        .iter()
        .map(|(chord, description)| {
            let keys: Vec<String> = chord
                .split('+')
                .map(|k| format!("<kbd>{}</kbd>", escape_html(k)))
                .collect();
            format!("<li>{}: {}</li>", keys.join(" + "), escape_html(description))
        })
        .collect();

    format!(
        r#"<div class="accessibility-panel__content" role="dialog" aria-label="Panel de opciones de accesibilidad">
<div class="accessibility-panel__header"><h2>Opciones de Accesibilidad</h2>
<button class="accessibility-panel__close" id="{close}" data-control="{close}" data-input="activate" aria-label="Cerrar panel de accesibilidad"><span class="material-icons">close</span></button>
</div>
<div class="accessibility-panel__body">{body}
<div class="accessibility-shortcuts"><h3>Atajos de Teclado</h3><ul>{hints}</ul></div>
</div></div>"#,
        close = CLOSE_CONTROL_ID,
        body = body,
        hints = hints,
    )
}
