//! Integration tests for change notifications and the shared handle.

#![cfg(feature = "emitter")]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use student_roster::{
    InMemoryRosterStore, RosterEvent, SharedStudentRepository, Student, StudentRepository,
};

type Log = Arc<Mutex<Vec<String>>>;

fn record(log: &Log, tag: &'static str) -> impl Fn(Student) + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |student: Student| log.lock().unwrap().push(format!("{tag}:{}", student.id))
}

fn sorted(log: &Log) -> Vec<String> {
    let mut entries = log.lock().unwrap().clone();
    entries.sort();
    entries
}

#[test]
fn mutations_notify_listeners() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut repo = StudentRepository::with_store(InMemoryRosterStore::new());

    repo.on_change(RosterEvent::StudentAdded, record(&log, "added"));
    repo.on_change(RosterEvent::StudentUpdated, record(&log, "updated"));
    repo.on_change(RosterEvent::StudentDeleted, record(&log, "deleted"));
    repo.on_change(RosterEvent::StudentRestored, record(&log, "restored"));

    repo.add(Student::new("S1", "Alice", 20, 90)).unwrap();
    repo.update("S1", "Alicia", 20, 91).unwrap();
    repo.delete("S1");
    repo.undo_delete();

    // Failed or absent operations stay silent.
    repo.add(Student::new("S1", "Dup", 1, 1)).unwrap_err();
    repo.delete("nobody");
    repo.undo_delete();

    // EventEmitter is async, give it time
    thread::sleep(Duration::from_millis(100));
    assert_eq!(
        sorted(&log),
        vec!["added:S1", "deleted:S1", "restored:S1", "updated:S1"]
    );
}

#[test]
fn deleted_event_carries_the_undoable_record() {
    let seen: Arc<Mutex<Vec<Student>>> = Arc::new(Mutex::new(Vec::new()));
    let mut repo = StudentRepository::with_store(InMemoryRosterStore::new());
    {
        let seen = Arc::clone(&seen);
        repo.on_change(RosterEvent::StudentDeleted, move |student: Student| {
            seen.lock().unwrap().push(student)
        });
    }

    repo.add(Student::new("S1", "Alice", 20, 90)).unwrap();
    repo.delete("S1").unwrap();
    assert_eq!(repo.undo_depth(), 1);

    thread::sleep(Duration::from_millis(100));
    let notified = seen.lock().unwrap().clone();
    assert_eq!(notified.len(), 1);
    assert_eq!(repo.undo_delete(), Some(notified[0].clone()));
}

#[test]
fn shared_handle_notifies_listeners() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let repo = SharedStudentRepository::new(StudentRepository::with_store(
        InMemoryRosterStore::new(),
    ));
    repo.on_change(RosterEvent::StudentAdded, record(&log, "added"))
        .unwrap();

    let worker = {
        let repo = repo.clone();
        thread::spawn(move || repo.add(Student::new("S2", "Bob", 21, 95)).unwrap())
    };
    worker.join().unwrap();

    thread::sleep(Duration::from_millis(100));
    assert_eq!(sorted(&log), vec!["added:S2"]);
    assert_eq!(repo.top_student().unwrap().unwrap().id, "S2");
}
