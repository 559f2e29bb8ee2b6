//! Project Model for ThinkUp.
//!
//! Implements `ProjectModelTrait`: the in-memory project gallery for the active person.

use chrono::Utc;
use uuid::Uuid;

use crate::types::content::{NewProject, Project};

/// Category given to projects that do not name one.
pub const DEFAULT_CATEGORY: &str = "general";
/// Icon given to projects that do not name one.
pub const DEFAULT_ICON: &str = "code";

/// Trait defining project list operations.
pub trait ProjectModelTrait {
    fn add(&mut self, input: NewProject) -> Project;
    fn get_all(&self) -> &[Project];
    fn get_by_id(&self, id: &str) -> Option<&Project>;
    fn filter_by_technology(&self, technology: &str) -> Vec<&Project>;
    fn filter_by_category(&self, category: &str) -> Vec<&Project>;
    /// Distinct categories in first-appearance order.
    fn categories(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct ProjectModel {
    projects: Vec<Project>,
}

impl ProjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every project and adds `inputs` in order.
    pub fn replace(&mut self, inputs: Vec<NewProject>) {
        self.projects.clear();
        for input in inputs {
            self.add(input);
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectModelTrait for ProjectModel {
    /// Appends a project, filling unset fields with fallbacks. Ids from fixtures are kept.
    fn add(&mut self, input: NewProject) -> Project {
        let project = Project {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: input.title,
            description: input.description,
            technologies: input.technologies.unwrap_or_default(),
            category: input.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            icon: input.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
            image_url: input.image_url.unwrap_or_default(),
            demo_url: input.demo_url.unwrap_or_default(),
            github_url: input.github_url.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.projects.push(project.clone());
        project
    }

    fn get_all(&self) -> &[Project] {
        &self.projects
    }

    fn get_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn filter_by_technology(&self, technology: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.technologies.iter().any(|t| t == technology))
            .collect()
    }

    fn filter_by_category(&self, category: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.category == category).collect()
    }

    fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category) {
                seen.push(project.category.clone());
            }
        }
        seen
    }
}
