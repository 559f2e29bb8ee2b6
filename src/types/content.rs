use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// End-date spelling for an ongoing position.
pub const OPEN_ENDED: &str = "Presente";

// ─── Projects ───

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub icon: String,
    pub image_url: String,
    pub demo_url: String,
    pub github_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input for `ProjectModel::add`; unset optional fields receive fixed fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub technologies: Option<Vec<String>>,
    pub category: Option<String>,
    pub icon: Option<String>,
    #[serde(alias = "image")]
    pub image_url: Option<String>,
    #[serde(alias = "demo")]
    pub demo_url: Option<String>,
    #[serde(alias = "link")]
    pub github_url: Option<String>,
}

// ─── Skills ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSkill {
    pub id: Option<String>,
    pub name: String,
    pub category: Option<String>,
    pub level: Option<u8>,
    pub icon: Option<String>,
}

// ─── Experience ───

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub start_date: String,
    /// `YYYY-MM`, or [`OPEN_ENDED`].
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub logo: String,
    pub location: String,
}

impl Experience {
    pub fn is_open_ended(&self) -> bool {
        self.end_date == OPEN_ENDED
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub id: Option<String>,
    pub company: String,
    #[serde(alias = "position")]
    pub role: String,
    pub period: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub logo: Option<String>,
    pub location: Option<String>,
}

// ─── People ───

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub portfolio: String,
}

/// One CV the visitor can switch to, with its own content lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar: String,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub skills: Vec<NewSkill>,
    #[serde(default)]
    pub projects: Vec<NewProject>,
    #[serde(default)]
    pub experience: Vec<NewExperience>,
}

/// The subset of a [`Person`] the header selector lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl From<&Person> for PersonSummary {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            role: p.role.clone(),
            avatar: p.avatar.clone(),
        }
    }
}

/// Content shown when a person has no entries of their own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefaultContent {
    pub projects: Vec<NewProject>,
    pub skills: Vec<NewSkill>,
    pub experience: Vec<NewExperience>,
}
