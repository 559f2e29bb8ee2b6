//! Skill Model for ThinkUp.
//!
//! Implements `SkillModelTrait`: skill bars for the active person, grouped by category.

use uuid::Uuid;

use crate::types::content::{NewSkill, Skill};

pub const DEFAULT_SKILL_CATEGORY: &str = "General";
pub const DEFAULT_SKILL_LEVEL: u8 = 50;

/// Trait defining skill list operations.
pub trait SkillModelTrait {
    fn add(&mut self, input: NewSkill) -> Skill;
    fn get_all(&self) -> &[Skill];
    /// Skills grouped by category. Groups keep first-appearance order, as do skills inside them.
    fn get_by_category(&self) -> Vec<(String, Vec<&Skill>)>;
}

#[derive(Debug, Default)]
pub struct SkillModel {
    skills: Vec<Skill>,
}

impl SkillModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every skill and adds `inputs` in order; `fallback` is used when `inputs` is empty.
    pub fn replace(&mut self, inputs: Vec<NewSkill>, fallback: &[NewSkill]) {
        self.skills.clear();
        let source = if inputs.is_empty() {
            fallback.to_vec()
        } else {
            inputs
        };
        for input in source {
            self.add(input);
        }
    }
}

impl SkillModelTrait for SkillModel {
    /// Level is clamped to 100.
    fn add(&mut self, input: NewSkill) -> Skill {
        let skill = Skill {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: input.name,
            category: input
                .category
                .unwrap_or_else(|| DEFAULT_SKILL_CATEGORY.to_string()),
            level: input.level.unwrap_or(DEFAULT_SKILL_LEVEL).min(100),
            icon: input.icon.unwrap_or_default(),
        };
        self.skills.push(skill.clone());
        skill
    }

    fn get_all(&self) -> &[Skill] {
        &self.skills
    }

    fn get_by_category(&self) -> Vec<(String, Vec<&Skill>)> {
        let mut groups: Vec<(String, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(name, _)| *name == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category.clone(), vec![skill])),
            }
        }
        groups
    }
}
