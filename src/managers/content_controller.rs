//! Content Controller for ThinkUp.
//!
//! Loads the active person's fixtures into the project, skill and experience models and
//! renders every content region. Switching person goes through the [`EventBus`]: the
//! selection is persisted and broadcast, and the reload happens when the event is pumped.

use chrono::Datelike;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::managers::event_bus::{self, EventBus};
use crate::managers::experience_model::{ExperienceModel, ExperienceModelTrait};
use crate::managers::person_registry::{PersonRegistry, PersonRegistryTrait};
use crate::managers::project_model::{ProjectModel, ProjectModelTrait};
use crate::managers::skill_model::{SkillModel, SkillModelTrait};
use crate::services::storage::SharedStore;
use crate::types::content::{NewProject, NewSkill, Person, Project, Skill};
use crate::types::document::Document;
use crate::types::errors::ContentError;
use crate::types::events::SiteEvent;
use crate::views;

/// Storage key of the last selected person id.
pub const SELECTED_PERSON_KEY: &str = "selectedPerson";

/// Filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Trait defining content orchestration operations.
pub trait ContentControllerTrait {
    fn init(&mut self, doc: &mut Document, theme_icon: &str) -> Result<(), ContentError>;
    fn select_person(&mut self, person_id: &str);
    fn pump_events(&mut self, doc: &mut Document, theme_icon: &str) -> usize;
    fn filter_projects(&mut self, doc: &mut Document, category: &str);
    fn render_all(&self, doc: &mut Document, theme_icon: &str);
}

pub struct ContentController {
    registry: PersonRegistry,
    storage: SharedStore,
    bus: EventBus,
    events: broadcast::Receiver<SiteEvent>,
    default_person: String,
    active: Option<Person>,
    active_filter: Option<String>,
    projects: ProjectModel,
    skills: SkillModel,
    experience: ExperienceModel,
}

/// Renders into a region, logging and skipping when the region is absent.
fn render_into(doc: &mut Document, region: &str, html: String) -> bool {
    match doc.render_region(region, html) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Skipping region");
            false
        }
    }
}

impl ContentController {
    pub fn new(registry: PersonRegistry, storage: SharedStore, bus: EventBus, default_person: &str) -> Self {
        let events = bus.subscribe();
        Self {
            registry,
            storage,
            bus,
            events,
            default_person: default_person.to_string(),
            active: None,
            active_filter: None,
            projects: ProjectModel::new(),
            skills: SkillModel::new(),
            experience: ExperienceModel::new(),
        }
    }

    pub fn active_person(&self) -> Option<&Person> {
        self.active.as_ref()
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    pub fn registry(&self) -> &PersonRegistry {
        &self.registry
    }

    pub fn projects(&self) -> &ProjectModel {
        &self.projects
    }

    pub fn skills(&self) -> &SkillModel {
        &self.skills
    }

    pub fn experience(&self) -> &ExperienceModel {
        &self.experience
    }

    fn saved_person(&self) -> Option<String> {
        match self.storage.get(SELECTED_PERSON_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "Could not read selected person");
                None
            }
        }
    }

    /// Replaces all three lists with the person's fixtures. Empty lists fall back to the
    /// bundled default content.
    fn load_person(&mut self, person_id: &str) -> Result<(), ContentError> {
        let person = self
            .registry
            .resolve(person_id, &self.default_person)
            .cloned()
            .ok_or_else(|| ContentError::UnknownPerson(person_id.to_string()))?;
        let defaults = self.registry.defaults().clone();

        let projects = if person.projects.is_empty() {
            defaults.projects
        } else {
            person.projects.clone()
        };
        let experience = if person.experience.is_empty() {
            defaults.experience
        } else {
            person.experience.clone()
        };
        self.projects.replace(projects);
        self.experience.replace(experience);
        self.skills.replace(person.skills.clone(), &defaults.skills);
        self.active_filter = None;

        debug!(
            person = %person.id,
            projects = self.projects.len(),
            skills = self.skills.get_all().len(),
            "Person content loaded"
        );
        self.active = Some(person);
        Ok(())
    }

    pub fn render_header(&self, doc: &mut Document, theme_icon: &str) {
        let active_id = self.active.as_ref().map(|p| p.id.as_str()).unwrap_or("");
        let html = views::header::render(&self.registry.list_persons(), active_id, theme_icon);
        render_into(doc, "header", html);
    }

    pub fn render_projects(&self, doc: &mut Document) {
        let shown: Vec<&Project> = match self.active_filter.as_deref() {
            Some(category) => self.projects.filter_by_category(category),
            None => self.projects.get_all().iter().collect(),
        };
        let html = views::projects::render(
            &shown,
            &self.projects.categories(),
            self.active_filter.as_deref(),
        );
        render_into(doc, "projects", html);
    }

    pub fn render_experience(&self, doc: &mut Document) {
        let html = views::experience::render(&self.experience.sort_by_date());
        render_into(doc, "experience", html);
    }

    pub fn render_skills(&self, doc: &mut Document) {
        let html = views::skills::render(&self.skills.get_by_category());
        render_into(doc, "skills", html);
    }

    /// Adds a project to the active list and re-renders the gallery.
    pub fn add_project(&mut self, doc: &mut Document, input: NewProject) -> Project {
        let project = self.projects.add(input);
        self.render_projects(doc);
        project
    }

    /// Adds a skill to the active list and re-renders the skill bars.
    pub fn add_skill(&mut self, doc: &mut Document, input: NewSkill) -> Skill {
        let skill = self.skills.add(input);
        self.render_skills(doc);
        skill
    }
}

impl ContentControllerTrait for ContentController {
    /// Loads the saved (or default) person and renders every region.
    fn init(&mut self, doc: &mut Document, theme_icon: &str) -> Result<(), ContentError> {
        let wanted = self
            .saved_person()
            .unwrap_or_else(|| self.default_person.clone());
        self.load_person(&wanted)?;
        self.render_all(doc, theme_icon);
        if let Some(person) = &self.active {
            info!(person = %person.id, "Content initialised");
        }
        Ok(())
    }

    /// Persists the choice and broadcasts it. The reload happens in [`Self::pump_events`].
    fn select_person(&mut self, person_id: &str) {
        if let Err(e) = self.storage.set(SELECTED_PERSON_KEY, person_id) {
            warn!(error = %e, "Could not save selected person");
        }
        self.bus.publish(SiteEvent::PersonChanged {
            person_id: person_id.to_string(),
        });
    }

    /// Handles pending site events. Returns how many were handled.
    fn pump_events(&mut self, doc: &mut Document, theme_icon: &str) -> usize {
        let events = event_bus::drain(&mut self.events);
        let count = events.len();
        for event in events {
            match event {
                SiteEvent::PersonChanged { person_id } => {
                    if let Err(e) = self.load_person(&person_id) {
                        warn!(error = %e, "Person switch failed");
                        continue;
                    }
                    self.render_all(doc, theme_icon);
                }
            }
        }
        count
    }

    /// Shows one category, or every project for [`ALL_CATEGORIES`]. Only the gallery
    /// region is re-rendered.
    fn filter_projects(&mut self, doc: &mut Document, category: &str) {
        self.active_filter = if category == ALL_CATEGORIES || category.is_empty() {
            None
        } else {
            Some(category.to_string())
        };
        self.render_projects(doc);
    }

    /// Header, hero, projects, experience, skills, about and footer, in that order. A
    /// missing region is skipped without affecting the others.
    fn render_all(&self, doc: &mut Document, theme_icon: &str) {
        self.render_header(doc, theme_icon);
        if let Some(person) = &self.active {
            render_into(doc, "hero", views::hero::render(person));
        }
        self.render_projects(doc);
        self.render_experience(doc);
        self.render_skills(doc);
        render_into(doc, "about", views::about::render());
        if let Some(person) = &self.active {
            let year = chrono::Local::now().year();
            render_into(doc, "footer", views::footer::render(person, year));
        }
    }
}
