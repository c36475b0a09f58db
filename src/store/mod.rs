//! Roster stores - where the whole record collection is persisted.
//!
//! A store only moves whole collections. The repository owns every
//! in-memory structure and decides what a load failure means.

pub mod codec;
mod file;
mod in_memory;

use crate::error::RosterError;
use crate::record::Student;

pub use file::JsonFileStore;
pub use in_memory::InMemoryRosterStore;

/// Durable location for a serialized roster.
pub trait RosterStore: Send + Sync {
    /// Read the stored collection. `Ok(None)` means nothing has been stored
    /// at this location yet.
    fn load(&self) -> Result<Option<Vec<Student>>, RosterError>;

    /// Overwrite the stored collection.
    fn save(&self, students: &[Student]) -> Result<(), RosterError>;

    /// Human-readable description of the location, used in logs.
    fn location(&self) -> String;
}
