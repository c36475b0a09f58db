//! In-memory student roster with grade ranking, undo-delete, search, sort
//! and flat-file JSON persistence.
//!
//! ```ignore
//! use student_roster::{SortMode, Student, StudentRepository};
//!
//! let mut repo = StudentRepository::open("students.json");
//! repo.add(Student::new("S1", "Alice", 20, 90))?;
//! repo.add(Student::new("S2", "Bob", 21, 95))?;
//! assert_eq!(repo.top_student().unwrap().id, "S2");
//!
//! repo.delete("S2");
//! repo.undo_delete();
//! repo.sort(SortMode::NameAsc);
//! repo.save()?;
//! ```

pub mod config;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod ranking;
mod record;
mod repository;
pub mod shell;
pub mod store;
mod undo;

pub use config::RosterConfig;
#[cfg(feature = "emitter")]
pub use emitter::RosterEvent;
pub use error::RosterError;
pub use ranking::RankingHeap;
pub use record::Student;
pub use repository::{
    LoadOutcome, SharedStudentRepository, SortMode, StudentRepository, UnknownSortMode,
};
pub use store::{InMemoryRosterStore, JsonFileStore, RosterStore};
pub use undo::UndoStack;
