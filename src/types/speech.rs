use serde::{Deserialize, Serialize};

/// One request to the platform speech engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    pub id: u64,
    pub text: String,
    pub rate: f64,
    pub volume: f64,
    pub lang: String,
}

/// Callback from the platform engine, delivered back onto the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpeechEvent {
    Started { id: u64 },
    Ended { id: u64 },
    Errored { id: u64 },
}

impl SpeechEvent {
    pub fn utterance_id(&self) -> u64 {
        match self {
            SpeechEvent::Started { id } | SpeechEvent::Ended { id } | SpeechEvent::Errored { id } => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SpeechState {
    Idle,
    Speaking { utterance_id: u64, paused: bool },
}

/// Terminal event for the utterance that was in flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechCompletion {
    pub utterance_id: u64,
    pub text: String,
}

/// Instruction for the platform engine, forwarded verbatim to the page bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum SpeechCommand {
    Speak(Utterance),
    Cancel,
    Pause,
    Resume,
}
