//! Work-experience timeline.

use super::{escape_html, tech_tags};
use crate::types::content::Experience;

pub const EMPTY_MESSAGE: &str = "Próximamente agregaré mi experiencia profesional aquí...";

fn card(exp: &Experience) -> String {
    let logo = if exp.logo.is_empty() {
        "<span class=\"material-icons\">business</span>".to_string()
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&exp.logo),
            escape_html(&exp.company)
        )
    };
    let location = if exp.location.is_empty() {
        String::new()
    } else {
        format!(
            "<span class=\"separator\">•</span><span class=\"material-icons\">place</span>{}",
            escape_html(&exp.location)
        )
    };
    let achievements = if exp.achievements.is_empty() {
        String::new()
    } else {
        let items: String = exp
            .achievements
            .iter()
            .map(|a| format!("<li><span class=\"material-icons\">check_circle</span>{}</li>", escape_html(a)))
            .collect();
        format!(
            "<div class=\"experience-achievements\"><h4>Logros destacados:</h4><ul>{}</ul></div>",
            items
        )
    };
    let technologies = if exp.technologies.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"experience-technologies\"><h4>Tecnologías:</h4><div class=\"technologies\">{}</div></div>",
            tech_tags(&exp.technologies)
        )
    };

    format!(
        r#"<article class="experience-card{current}" data-id="{id}">
<div class="experience-header"><div class="experience-company">
<div class="company-logo">{logo}</div>
<div class="company-info"><h3>{role}</h3><p class="company-name">{company}</p>
<p class="experience-meta"><span class="material-icons">calendar_today</span>{period}{location}</p></div>
</div></div>
<div class="experience-content"><p class="experience-description">{description}</p>{achievements}{technologies}</div>
</article>"#,
        current = if exp.is_open_ended() { " current" } else { "" },
        id = escape_html(&exp.id),
        logo = logo,
        role = escape_html(&exp.role),
        company = escape_html(&exp.company),
        period = escape_html(&exp.period),
        location = location,
        description = escape_html(&exp.description),
        achievements = achievements,
        technologies = technologies,
    )
}

/// Renders entries in the order given; callers pass them already sorted.
pub fn render(entries: &[&Experience]) -> String {
    let body = if entries.is_empty() {
        format!("<p class=\"empty-message\">{}</p>", EMPTY_MESSAGE)
    } else {
        let cards: String = entries.iter().map(|e| card(e)).collect();
        format!(
            "<p class=\"section-subtitle\">Mi trayectoria profesional y los proyectos en los que he colaborado</p><div class=\"experience-timeline\">{}</div>",
            cards
        )
    };
    format!(
        "<div class=\"container\"><h2 class=\"section-title\">Experiencia</h2>{}</div>",
        body
    )
}
