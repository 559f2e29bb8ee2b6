//! Hero section: the active person and shortcuts into the other sections.

use super::escape_html;
use crate::types::content::Person;

const HERO_CARDS: [(&str, &str, &str, &str); 3] = [
    ("projects", "work", "Proyectos", "Explora mi portafolio de trabajos"),
    ("experience", "business_center", "Experiencia", "Conoce mi trayectoria profesional"),
    ("skills", "code", "Habilidades", "Descubre mis competencias técnicas"),
];

pub fn render(person: &Person) -> String {
    let cards: String = HERO_CARDS
        .iter()
        .map(|(anchor, icon, title, text)| {
            format!(
                "<a href=\"#{}\" class=\"hero-card\"><span class=\"material-icons card-icon\">{}</span><h3>{}</h3><p>{}</p></a>",
                anchor, icon, title, text
            )
        })
        .collect();

    format!(
        r#"<div class="hero-content container">
<div class="hero-profile">
<div class="profile-decoration left"><span class="material-icons">arrow_back</span></div>
<div class="profile-info">
<h1 class="hero-title">{name}</h1>
<p class="hero-role">{role}</p>
<p class="hero-description">{bio}</p>
</div>
<div class="profile-decoration right"><span class="material-icons">arrow_forward</span></div>
</div>
<div class="hero-cards">{cards}</div>
</div>"#,
        name = escape_html(&person.name),
        role = escape_html(&person.role),
        bio = escape_html(&person.bio),
        cards = cards,
    )
}
