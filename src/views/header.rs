//! Navigation bar: person selector, section menu, quick accessibility controls.

use super::escape_html;
use crate::types::content::PersonSummary;

/// Section anchors listed in the navigation menu.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("hero", "Inicio"),
    ("projects", "Proyectos"),
    ("experience", "Experiencia"),
    ("skills", "Habilidades"),
    ("about", "Acerca de"),
];

fn person_option(person: &PersonSummary, active: bool) -> String {
    let check = if active {
        "<span class=\"material-icons check-icon\">check_circle</span>"
    } else {
        ""
    };
    format!(
        r#"<li><button class="person-option{active}" data-person-id="{id}">
<div class="person-avatar"><span class="material-icons">account_circle</span></div>
<div class="person-info"><span class="person-name">{name}</span><span class="person-role">{role}</span></div>
{check}</button></li>"#,
        active = if active { " active" } else { "" },
        id = escape_html(&person.id),
        name = escape_html(&person.name),
        role = escape_html(&person.role),
        check = check,
    )
}

/// `theme_icon` is the icon the theme toggle shows (the theme it switches to).
pub fn render(persons: &[PersonSummary], active_id: &str, theme_icon: &str) -> String {
    let options: String = persons
        .iter()
        .map(|p| person_option(p, p.id == active_id))
        .collect();
    let current = persons
        .iter()
        .find(|p| p.id == active_id)
        .map(|p| escape_html(&p.name))
        .unwrap_or_else(|| "Seleccionar".to_string());
    let nav: String = NAV_SECTIONS
        .iter()
        .map(|(anchor, label)| {
            format!(
                "<li><a href=\"#{a}\" class=\"dropdown-item\" data-section=\"{l}\">{l}</a></li>",
                a = anchor,
                l = label
            )
        })
        .collect();

    format!(
        r#"<nav class="navbar"><div class="container">
<div class="logo"><h1>ThinkUp</h1></div>
<div class="person-selector-wrapper">
<div class="dropdown person-selector" id="person-selector">
<button class="dropdown-toggle person-toggle" aria-label="Seleccionar CV">
<span class="material-icons">account_circle</span><span id="current-person-name">{current}</span><span class="material-icons">expand_more</span>
</button>
<ul class="dropdown-menu person-menu">{options}</ul>
</div></div>
<div class="nav-center"><div class="dropdown" id="nav-dropdown">
<button class="dropdown-toggle" aria-label="Menú de navegación"><span id="current-section">Inicio</span><span class="material-icons">expand_more</span></button>
<ul class="dropdown-menu" id="dropdown-menu">{nav}</ul>
</div></div>
<div class="nav-actions">
<button class="icon-btn accessibility-quick-btn" id="contrast-toggle" aria-label="Activar/desactivar alto contraste" title="Alto Contraste (Alt + C)"><span class="material-icons">contrast</span></button>
<button class="icon-btn accessibility-quick-btn" id="font-size-toggle" aria-label="Aumentar tamaño de texto" title="Aumentar Texto (Alt + +)"><span class="material-icons">text_fields</span></button>
<button class="icon-btn" id="theme-toggle" aria-label="Cambiar tema"><span class="material-icons">{theme_icon}</span></button>
<button class="icon-btn" id="language-toggle" aria-label="Cambiar idioma"><span class="material-icons">language</span></button>
<button class="icon-btn" id="settings-btn" aria-label="Configuración"><span class="material-icons">settings</span></button>
<button class="icon-btn" id="accessibility-btn" aria-label="Opciones de accesibilidad" title="Panel de Accesibilidad (Alt + A)"><span class="material-icons">accessibility_new</span></button>
</div>
<button class="hamburger" id="hamburger" aria-label="Menú"><span></span><span></span><span></span></button>
</div></nav>"#,
        current = current,
        options = options,
        nav = nav,
        theme_icon = escape_html(theme_icon),
    )
}
