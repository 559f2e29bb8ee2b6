// ThinkUp page views
// Each view turns model data into the inner markup of one page region.

pub mod about;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod page;
pub mod panel;
pub mod projects;
pub mod skills;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `<span class="tech-tag">` chips for a technology list.
pub(crate) fn tech_tags(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|t| format!("<span class=\"tech-tag\">{}</span>", escape_html(t)))
        .collect()
}
