//! Event capture for assertions.

use parking_lot::Mutex;

use crate::port::{ShutdownEvent, ShutdownReporter};

/// Stores every emitted event for later inspection.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ShutdownEvent>>,
}

impl RecordingReporter {
    /// Snapshot of all events emitted so far, in emission order.
    pub fn events(&self) -> Vec<ShutdownEvent> {
        self.events.lock().clone()
    }

    /// Just the wire names, for coarse sequence assertions.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(ShutdownEvent::name).collect()
    }

    pub fn count_of(&self, name: &str) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| event.name() == name)
            .count()
    }
}

impl ShutdownReporter for RecordingReporter {
    fn emit(&self, event: &ShutdownEvent) {
        self.events.lock().push(event.clone());
    }
}
