//! Experience Model for ThinkUp.
//!
//! Implements `ExperienceModelTrait`: the work-experience timeline of the active person.

use std::cmp::Ordering;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::content::{Experience, NewExperience, OPEN_ENDED};

/// Trait defining experience list operations.
pub trait ExperienceModelTrait {
    fn add(&mut self, input: NewExperience) -> Experience;
    fn get_all(&self) -> &[Experience];
    fn get_by_id(&self, id: &str) -> Option<&Experience>;
    /// Open-ended entries first, then by end date, most recent first.
    fn sort_by_date(&self) -> Vec<&Experience>;
}

#[derive(Debug, Default)]
pub struct ExperienceModel {
    experiences: Vec<Experience>,
}

/// Parses `YYYY-MM` (or a full `YYYY-MM-DD`) end date.
fn parse_end_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .ok()
}

/// Human-readable `"2022 - Presente"` span from the start and end dates.
fn derive_period(start: &str, end: &str) -> String {
    let year = |raw: &str| raw.split('-').next().unwrap_or(raw).to_string();
    let end = if end == OPEN_ENDED {
        OPEN_ENDED.to_string()
    } else {
        year(end)
    };
    if start.is_empty() {
        end
    } else {
        format!("{} - {}", year(start), end)
    }
}

/// Total order used by [`ExperienceModelTrait::sort_by_date`]. Dates that do not parse sort
/// after every dated entry.
fn timeline_order(a: &Experience, b: &Experience) -> Ordering {
    match (a.is_open_ended(), b.is_open_ended()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => match (parse_end_date(&a.end_date), parse_end_date(&b.end_date)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

impl ExperienceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry and adds `inputs` in order.
    pub fn replace(&mut self, inputs: Vec<NewExperience>) {
        self.experiences.clear();
        for input in inputs {
            self.add(input);
        }
    }
}

impl ExperienceModelTrait for ExperienceModel {
    fn add(&mut self, input: NewExperience) -> Experience {
        let end_date = input.end_date.unwrap_or_else(|| OPEN_ENDED.to_string());
        let period = input
            .period
            .unwrap_or_else(|| derive_period(&input.start_date, &end_date));
        let experience = Experience {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            company: input.company,
            role: input.role,
            period,
            start_date: input.start_date,
            end_date,
            description: input.description.unwrap_or_default(),
            achievements: input.achievements.unwrap_or_default(),
            technologies: input.technologies.unwrap_or_default(),
            logo: input.logo.unwrap_or_default(),
            location: input.location.unwrap_or_default(),
        };
        self.experiences.push(experience.clone());
        experience
    }

    fn get_all(&self) -> &[Experience] {
        &self.experiences
    }

    fn get_by_id(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    fn sort_by_date(&self) -> Vec<&Experience> {
        let mut sorted: Vec<&Experience> = self.experiences.iter().collect();
        sorted.sort_by(|a, b| timeline_order(a, b));
        sorted
    }
}
