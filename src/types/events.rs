use serde::Serialize;

/// In-process broadcast signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SiteEvent {
    /// The visitor picked another CV in the header selector.
    PersonChanged {
        #[serde(rename = "personId")]
        person_id: String,
    },
}
