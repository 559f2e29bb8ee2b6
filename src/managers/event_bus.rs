//! In-process broadcast of [`SiteEvent`]s.
//!
//! Any number of listeners may subscribe. Publishing with no subscribers is not an error.

use tokio::sync::broadcast;
use tracing::trace;

use crate::types::events::SiteEvent;

const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SiteEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.sender.subscribe()
    }

    /// Sends `event` to every current subscriber. Returns how many received it.
    pub fn publish(&self, event: SiteEvent) -> usize {
        trace!(?event, "Publishing site event");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains whatever is waiting on `rx` without blocking. Lagged gaps are skipped.
pub fn drain(rx: &mut broadcast::Receiver<SiteEvent>) -> Vec<SiteEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                trace!(skipped, "Event receiver lagged");
            }
            Err(_) => break,
        }
    }
    events
}
