//! Person Registry for ThinkUp.
//!
//! The bundled CV fixtures, parsed once. Unknown ids resolve to the configured default person.

use tracing::warn;

use crate::types::content::{DefaultContent, Person, PersonSummary};
use crate::types::errors::ContentError;

const PERSONS_JSON: &str = include_str!("../../resources/fixtures/persons.json");
const DEFAULTS_JSON: &str = include_str!("../../resources/fixtures/defaults.json");

/// Trait defining person lookup operations.
pub trait PersonRegistryTrait {
    fn get(&self, id: &str) -> Option<&Person>;
    /// `id` if known, else `default_id`, else the first person.
    fn resolve(&self, id: &str, default_id: &str) -> Option<&Person>;
    fn list_persons(&self) -> Vec<PersonSummary>;
    fn defaults(&self) -> &DefaultContent;
}

#[derive(Debug, Clone)]
pub struct PersonRegistry {
    persons: Vec<Person>,
    defaults: DefaultContent,
}

impl PersonRegistry {
    /// Parses the fixtures compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(PERSONS_JSON, DEFAULTS_JSON)
    }

    pub fn from_json(persons: &str, defaults: &str) -> Result<Self, ContentError> {
        let persons: Vec<Person> = serde_json::from_str(persons)
            .map_err(|e| ContentError::Fixture(format!("persons: {}", e)))?;
        let defaults: DefaultContent = serde_json::from_str(defaults)
            .map_err(|e| ContentError::Fixture(format!("defaults: {}", e)))?;
        Ok(Self { persons, defaults })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl PersonRegistryTrait for PersonRegistry {
    fn get(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    fn resolve(&self, id: &str, default_id: &str) -> Option<&Person> {
        if let Some(person) = self.get(id) {
            return Some(person);
        }
        warn!(person = %id, fallback = %default_id, "Unknown person, using default");
        self.get(default_id).or_else(|| self.persons.first())
    }

    fn list_persons(&self) -> Vec<PersonSummary> {
        self.persons.iter().map(PersonSummary::from).collect()
    }

    fn defaults(&self) -> &DefaultContent {
        &self.defaults
    }
}
