//! Speech Controller: read-aloud on top of a platform speech engine.
//!
//! Two states, `Idle` and `Speaking`. A new `speak` preempts whatever is in flight. The
//! engine reports back through an unbounded channel; events for anything but the current
//! utterance are stale and dropped.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace, warn};

use crate::types::document::{Document, Listener};
use crate::types::settings::SettingsRecord;
use crate::types::speech::{SpeechCommand, SpeechCompletion, SpeechEvent, SpeechState, Utterance};

/// Platform text-to-speech capability.
pub trait SpeechEngine {
    /// Whether the host can speak at all. An unavailable engine makes the controller inert.
    fn is_available(&self) -> bool {
        true
    }
    fn speak(&mut self, utterance: &Utterance);
    fn cancel(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Engine for hosts without speech synthesis.
#[derive(Debug, Default)]
pub struct NullSpeechEngine;

impl SpeechEngine for NullSpeechEngine {
    fn is_available(&self) -> bool {
        false
    }
    fn speak(&mut self, _utterance: &Utterance) {}
    fn cancel(&mut self) {}
    fn pause(&mut self) {}
    fn resume(&mut self) {}
}

/// Engine that queues commands for the page bridge, which drives `speechSynthesis` and
/// reports events back through [`SpeechController::completion_sender`].
#[derive(Debug, Clone, Default)]
pub struct QueuedSpeechEngine {
    queue: Arc<Mutex<VecDeque<SpeechCommand>>>,
}

impl QueuedSpeechEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains pending commands in issue order.
    pub fn take_commands(&self) -> Vec<SpeechCommand> {
        self.queue
            .lock()
            .map(|mut q| q.drain(..).collect())
            .unwrap_or_default()
    }

    fn push(&self, command: SpeechCommand) {
        if let Ok(mut q) = self.queue.lock() {
            q.push_back(command);
        }
    }
}

impl SpeechEngine for QueuedSpeechEngine {
    fn speak(&mut self, utterance: &Utterance) {
        self.push(SpeechCommand::Speak(utterance.clone()));
    }
    fn cancel(&mut self) {
        self.push(SpeechCommand::Cancel);
    }
    fn pause(&mut self) {
        self.push(SpeechCommand::Pause);
    }
    fn resume(&mut self) {
        self.push(SpeechCommand::Resume);
    }
}

pub struct SpeechController {
    engine: Box<dyn SpeechEngine>,
    state: SpeechState,
    current_text: Option<String>,
    next_id: u64,
    lang: String,
    enabled: bool,
    events_tx: UnboundedSender<SpeechEvent>,
    events_rx: UnboundedReceiver<SpeechEvent>,
}

impl SpeechController {
    pub fn new(engine: Box<dyn SpeechEngine>, lang: &str) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            engine,
            state: SpeechState::Idle,
            current_text: None,
            next_id: 1,
            lang: lang.to_string(),
            enabled: false,
            events_tx,
            events_rx,
        }
    }

    /// Handle the engine side uses to report `Started`/`Ended`/`Errored`.
    pub fn completion_sender(&self) -> UnboundedSender<SpeechEvent> {
        self.events_tx.clone()
    }

    pub fn state(&self) -> SpeechState {
        self.state
    }

    pub fn is_speaking(&self) -> bool {
        matches!(self.state, SpeechState::Speaking { .. })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_available()
    }

    /// Starts reading `text` with the rate and volume currently in `record`, cancelling any
    /// utterance in flight. Blank text and an unavailable engine are no-ops.
    pub fn speak(&mut self, text: &str, record: &SettingsRecord) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if !self.engine.is_available() {
            debug!("Speech engine unavailable, ignoring speak request");
            return None;
        }
        if self.is_speaking() {
            self.engine.cancel();
        }

        let id = self.next_id;
        self.next_id += 1;
        let utterance = Utterance {
            id,
            text: text.to_string(),
            rate: record.speech_rate,
            volume: record.speech_volume,
            lang: self.lang.clone(),
        };
        self.engine.speak(&utterance);
        self.state = SpeechState::Speaking {
            utterance_id: id,
            paused: false,
        };
        self.current_text = Some(utterance.text);
        trace!(utterance = id, "Speaking");
        Some(id)
    }

    pub fn pause(&mut self) {
        if let SpeechState::Speaking { utterance_id, paused: false } = self.state {
            self.engine.pause();
            self.state = SpeechState::Speaking { utterance_id, paused: true };
        }
    }

    pub fn resume(&mut self) {
        if let SpeechState::Speaking { utterance_id, paused: true } = self.state {
            self.engine.resume();
            self.state = SpeechState::Speaking { utterance_id, paused: false };
        }
    }

    /// Stops the current utterance. Returns whether anything was in flight.
    pub fn cancel(&mut self) -> bool {
        if !self.is_speaking() {
            return false;
        }
        self.engine.cancel();
        self.state = SpeechState::Idle;
        self.current_text = None;
        true
    }

    /// Applies one engine event. Returns the completion when it ends the current utterance.
    pub fn handle_event(&mut self, event: SpeechEvent) -> Option<SpeechCompletion> {
        let SpeechState::Speaking { utterance_id, .. } = self.state else {
            trace!(?event, "Speech event while idle");
            return None;
        };
        if event.utterance_id() != utterance_id {
            trace!(?event, current = utterance_id, "Stale speech event");
            return None;
        }
        match event {
            SpeechEvent::Started { .. } => None,
            SpeechEvent::Ended { .. } | SpeechEvent::Errored { .. } => {
                if matches!(event, SpeechEvent::Errored { .. }) {
                    warn!(utterance = utterance_id, "Speech engine reported an error");
                }
                self.state = SpeechState::Idle;
                Some(SpeechCompletion {
                    utterance_id,
                    text: self.current_text.take().unwrap_or_default(),
                })
            }
        }
    }

    /// Drains every event the engine has reported so far.
    pub fn poll(&mut self) -> Vec<SpeechCompletion> {
        let mut completions = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            if let Some(done) = self.handle_event(event) {
                completions.push(done);
            }
        }
        completions
    }

    /// Turns on read-aloud of the current selection on pointer and key release.
    pub fn enable(&mut self, doc: &mut Document) {
        self.enabled = true;
        doc.attach_listener(Listener::SelectionOnPointerUp);
        doc.attach_listener(Listener::SelectionOnKeyUp);
    }

    /// Detaches the selection triggers and cuts off anything being spoken.
    pub fn disable(&mut self, doc: &mut Document) {
        self.enabled = false;
        doc.detach_listener(Listener::SelectionOnPointerUp);
        doc.detach_listener(Listener::SelectionOnKeyUp);
        self.cancel();
    }

    /// Selection trigger: speaks `selection` when read-aloud is on.
    pub fn read_selection(&mut self, selection: &str, record: &SettingsRecord) -> Option<u64> {
        if !self.enabled {
            return None;
        }
        self.speak(selection, record)
    }
}
