//! Unit tests for the Speech Controller state machine.
//!
//! Engine callbacks are simulated through the completion channel, so no real speech
//! synthesis is involved.

use thinkup::services::speech_controller::{NullSpeechEngine, QueuedSpeechEngine, SpeechController};
use thinkup::types::document::{Document, Listener};
use thinkup::types::settings::SettingsRecord;
use thinkup::types::speech::{SpeechCommand, SpeechEvent, SpeechState};

fn controller() -> (QueuedSpeechEngine, SpeechController) {
    let engine = QueuedSpeechEngine::new();
    let speech = SpeechController::new(Box::new(engine.clone()), "es-ES");
    (engine, speech)
}

// ─── Transitions ───

#[test]
fn test_speak_enters_speaking() {
    let (_, mut speech) = controller();
    let id = speech.speak("hola", &SettingsRecord::default()).expect("should speak");
    assert_eq!(speech.state(), SpeechState::Speaking { utterance_id: id, paused: false });
    assert!(speech.is_speaking());
}

#[test]
fn test_completion_returns_to_idle() {
    let (_, mut speech) = controller();
    let id = speech.speak("hola", &SettingsRecord::default()).expect("should speak");
    let tx = speech.completion_sender();
    tx.send(SpeechEvent::Started { id }).expect("send failed");
    tx.send(SpeechEvent::Ended { id }).expect("send failed");

    let done = speech.poll();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].utterance_id, id);
    assert_eq!(done[0].text, "hola");
    assert_eq!(speech.state(), SpeechState::Idle);
}

#[test]
fn test_engine_error_also_returns_to_idle() {
    let (_, mut speech) = controller();
    let id = speech.speak("hola", &SettingsRecord::default()).expect("should speak");
    assert!(speech.handle_event(SpeechEvent::Errored { id }).is_some());
    assert!(!speech.is_speaking());
}

#[test]
fn test_new_speak_preempts_previous_utterance() {
    let (engine, mut speech) = controller();
    let record = SettingsRecord::default();
    let hello = speech.speak("hello", &record).expect("should speak");
    let world = speech.speak("world", &record).expect("should speak");
    assert_ne!(hello, world);

    let commands = engine.take_commands();
    assert_eq!(commands.len(), 3);
    assert!(matches!(&commands[0], SpeechCommand::Speak(u) if u.text == "hello"));
    assert_eq!(commands[1], SpeechCommand::Cancel);
    assert!(matches!(&commands[2], SpeechCommand::Speak(u) if u.text == "world"));

    let tx = speech.completion_sender();
    tx.send(SpeechEvent::Ended { id: hello }).expect("send failed");
    tx.send(SpeechEvent::Ended { id: world }).expect("send failed");
    let done = speech.poll();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].text, "world");
}

#[test]
fn test_pause_and_resume_only_while_speaking() {
    let (engine, mut speech) = controller();
    speech.pause();
    speech.resume();
    assert!(engine.take_commands().is_empty());

    let id = speech.speak("texto largo", &SettingsRecord::default()).expect("should speak");
    speech.pause();
    speech.pause();
    assert_eq!(speech.state(), SpeechState::Speaking { utterance_id: id, paused: true });
    speech.resume();
    assert_eq!(speech.state(), SpeechState::Speaking { utterance_id: id, paused: false });

    let commands = engine.take_commands();
    assert_eq!(commands[1..], [SpeechCommand::Pause, SpeechCommand::Resume]);
}

#[test]
fn test_cancel_reports_whether_anything_was_in_flight() {
    let (_, mut speech) = controller();
    assert!(!speech.cancel());
    speech.speak("hola", &SettingsRecord::default());
    assert!(speech.cancel());
    assert_eq!(speech.state(), SpeechState::Idle);
}

#[test]
fn test_whitespace_text_is_a_noop() {
    let (engine, mut speech) = controller();
    assert_eq!(speech.speak(" \t ", &SettingsRecord::default()), None);
    assert_eq!(speech.state(), SpeechState::Idle);
    assert!(engine.take_commands().is_empty());
}

#[test]
fn test_rate_and_volume_read_at_speak_time() {
    let (engine, mut speech) = controller();
    let mut record = SettingsRecord::default();
    speech.speak("uno", &record);
    record.speech_rate = 0.5;
    record.speech_volume = 0.25;
    speech.speak("dos", &record);

    let rates: Vec<(f64, f64)> = engine
        .take_commands()
        .into_iter()
        .filter_map(|c| match c {
            SpeechCommand::Speak(u) => Some((u.rate, u.volume)),
            _ => None,
        })
        .collect();
    assert_eq!(rates, [(1.0, 1.0), (0.5, 0.25)]);
}

// ─── Read-aloud trigger ───

#[test]
fn test_selection_requires_enable() {
    let (_, mut speech) = controller();
    let mut doc = Document::new();
    assert_eq!(speech.read_selection("hola", &SettingsRecord::default()), None);
    speech.enable(&mut doc);
    assert!(doc.has_listener(Listener::SelectionOnPointerUp));
    assert!(doc.has_listener(Listener::SelectionOnKeyUp));
    assert!(speech.read_selection("hola", &SettingsRecord::default()).is_some());
}

#[test]
fn test_disable_detaches_and_cancels() {
    let (_, mut speech) = controller();
    let mut doc = Document::new();
    speech.enable(&mut doc);
    speech.read_selection("hola", &SettingsRecord::default());
    speech.disable(&mut doc);
    assert!(!speech.is_enabled());
    assert!(!speech.is_speaking());
    assert!(!doc.has_listener(Listener::SelectionOnPointerUp));
}

#[test]
fn test_unavailable_engine_is_inert() {
    let mut speech = SpeechController::new(Box::new(NullSpeechEngine), "es-ES");
    let mut doc = Document::new();
    speech.enable(&mut doc);
    assert!(speech.is_enabled());
    assert!(!speech.is_available());
    assert_eq!(speech.read_selection("hola", &SettingsRecord::default()), None);
    assert_eq!(speech.state(), SpeechState::Idle);
}
