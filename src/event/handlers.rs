use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, PlaygroundEvent, SessionView};
use crate::state::PersistenceBridge;

/// Writes the session through to storage after every persisted mutation
#[derive(Debug)]
pub struct PersistenceHandler {
    bridge: PersistenceBridge,
}

impl PersistenceHandler {
    pub fn new(bridge: PersistenceBridge) -> Self {
        Self { bridge }
    }
}

impl EventHandler for PersistenceHandler {
    fn handle_event(&mut self, event: &PlaygroundEvent, view: &SessionView<'_>) {
        if !event.is_persisted() {
            return;
        }
        if let Err(err) = self.bridge.save(view.files, view.theme) {
            log::error!("Failed to persist playground after {:?}: {}", event, err);
        }
    }
}

/// Keeps the most recent events it sees, oldest first.
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    events: Arc<Mutex<Vec<PlaygroundEvent>>>,
    capacity: usize,
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            capacity: capacity.max(1),
        }
    }

    pub fn events(&self) -> Vec<PlaygroundEvent> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<PlaygroundEvent> {
        self.events.lock().last().cloned()
    }
}

impl EventHandler for RecordingHandler {
    fn handle_event(&mut self, event: &PlaygroundEvent, _view: &SessionView<'_>) {
        let mut events = self.events.lock();
        if events.len() == self.capacity {
            events.remove(0);
        }
        events.push(event.clone());
    }
}
