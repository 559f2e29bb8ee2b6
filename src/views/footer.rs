//! Footer: contact details of the active person and the copyright line.

use super::escape_html;
use crate::types::content::Person;

fn strip_scheme(url: &str) -> &str {
    url.trim_start_matches("https://").trim_start_matches("http://")
}

fn social_link(url: &str, label: &str, icon: &str) -> String {
    let href = if url.is_empty() { "#" } else { url };
    format!(
        "<a href=\"{}\" target=\"_blank\" aria-label=\"{}\"><span class=\"material-icons\">{}</span></a>",
        escape_html(href),
        label,
        icon
    )
}

pub fn render(person: &Person, year: i32) -> String {
    let social = &person.social;
    format!(
        r#"<div class="container">
<div class="footer-content">
<div class="footer-info"><h3>ThinkUp</h3><p>Transformando ideas en experiencias digitales</p></div>
<div class="footer-links"><h4>Contacto</h4>
<p>📧 {email}</p><p>🔗 {github}</p><p>💼 {linkedin}</p></div>
</div>
<div class="footer-bottom">
<p>&copy; {year} ThinkUp. Hecho con ❤️ y mucho café ☕</p>
<div class="social-links">{gh}{li}{tw}</div>
</div>
</div>"#,
        email = escape_html(&person.email),
        github = escape_html(strip_scheme(&social.github)),
        linkedin = escape_html(strip_scheme(&social.linkedin)),
        year = year,
        gh = social_link(&social.github, "GitHub", "code"),
        li = social_link(&social.linkedin, "LinkedIn", "work"),
        tw = social_link(&social.twitter, "Twitter", "alternate_email"),
    )
}
