//! Project gallery with category filters.

use super::{escape_html, tech_tags};
use crate::types::content::Project;

/// Label of the filter button that shows every project.
pub const ALL_FILTER_LABEL: &str = "Todos";

pub const EMPTY_MESSAGE: &str = "Próximamente agregaré proyectos aquí...";

fn card(project: &Project) -> String {
    let image = if project.image_url.is_empty() {
        format!(
            "<span class=\"material-icons project-icon\">{}</span>",
            escape_html(&project.icon)
        )
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(&project.image_url),
            escape_html(&project.title)
        )
    };
    let mut links = String::new();
    if !project.demo_url.is_empty() {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"btn btn-primary\">Ver Demo</a>",
            escape_html(&project.demo_url)
        ));
    }
    if !project.github_url.is_empty() {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"btn btn-secondary\">GitHub</a>",
            escape_html(&project.github_url)
        ));
    }

    format!(
        r#"<article class="project-card" data-id="{id}" data-category="{category}">
<div class="project-image">{image}</div>
<div class="project-content"><h3>{title}</h3><p>{description}</p>
<div class="technologies">{techs}</div>
<div class="project-links">{links}</div></div>
</article>"#,
        id = escape_html(&project.id),
        category = escape_html(&project.category),
        image = image,
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        techs = tech_tags(&project.technologies),
        links = links,
    )
}

fn filter_bar(categories: &[String], active: Option<&str>) -> String {
    if categories.is_empty() {
        return String::new();
    }
    let button = |value: &str, label: &str, on: bool| {
        format!(
            "<button class=\"filter-btn{}\" data-filter=\"{}\" aria-pressed=\"{}\">{}</button>",
            if on { " active" } else { "" },
            escape_html(value),
            on,
            escape_html(label)
        )
    };
    let mut bar = String::from("<div class=\"project-filters\" role=\"group\" aria-label=\"Filtrar proyectos\">");
    bar.push_str(&button("all", ALL_FILTER_LABEL, active.is_none()));
    for category in categories {
        bar.push_str(&button(category, category, active == Some(category.as_str())));
    }
    bar.push_str("</div>");
    bar
}

/// The gallery for `projects`. `active_filter` is `None` when every category is shown.
pub fn render(projects: &[&Project], categories: &[String], active_filter: Option<&str>) -> String {
    let body = if projects.is_empty() {
        format!("<p class=\"empty-message\">{}</p>", EMPTY_MESSAGE)
    } else {
        let cards: String = projects.iter().map(|p| card(p)).collect();
        format!("<div class=\"projects-grid\">{}</div>", cards)
    };
    format!(
        "<div class=\"container\"><h2 class=\"section-title\">Mis Proyectos</h2>{}{}</div>",
        filter_bar(categories, active_filter),
        body
    )
}
