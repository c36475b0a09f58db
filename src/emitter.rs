use event_emitter_rs::EventEmitter;

use crate::record::Student;

/// Change notifications raised by the repository after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterEvent {
    StudentAdded,
    StudentUpdated,
    StudentDeleted,
    StudentRestored,
}

impl RosterEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterEvent::StudentAdded => "StudentAdded",
            RosterEvent::StudentUpdated => "StudentUpdated",
            RosterEvent::StudentDeleted => "StudentDeleted",
            RosterEvent::StudentRestored => "StudentRestored",
        }
    }
}

/// Wraps an `EventEmitter` with roster event names and payloads.
///
/// Listeners run on the emitter's own threads, so they observe the event
/// shortly after the repository call returns.
pub struct ChangeNotifier {
    emitter: EventEmitter,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            emitter: EventEmitter::new(),
        }
    }

    pub fn on<F>(&mut self, event: RosterEvent, listener: F)
    where
        F: Fn(Student) + Send + Sync + 'static,
    {
        self.emitter.on(event.as_str(), listener);
    }

    pub fn notify(&mut self, event: RosterEvent, student: &Student) {
        self.emitter.emit(event.as_str(), student.clone());
    }
}
