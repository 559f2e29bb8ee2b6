//! Skill bars grouped by category.

use super::escape_html;
use crate::types::content::Skill;

fn bar(skill: &Skill) -> String {
    format!(
        r#"<div class="skill-item">
<div class="skill-header"><span class="skill-name">{name}</span><span class="skill-level">{level}%</span></div>
<div class="skill-bar" role="progressbar" aria-valuenow="{level}" aria-valuemin="0" aria-valuemax="100" aria-label="{name}"><div class="skill-progress" style="width: {level}%"></div></div>
</div>"#,
        name = escape_html(&skill.name),
        level = skill.level,
    )
}

pub fn render(groups: &[(String, Vec<&Skill>)]) -> String {
    let sections: String = groups
        .iter()
        .map(|(category, skills)| {
            let bars: String = skills.iter().map(|s| bar(s)).collect();
            format!(
                "<div class=\"skill-category\"><h3>{}</h3><div class=\"skills-list\">{}</div></div>",
                escape_html(category),
                bars
            )
        })
        .collect();
    format!(
        "<div class=\"container\"><h2 class=\"section-title\">Habilidades</h2><div class=\"skills-container\">{}</div></div>",
        sections
    )
}
