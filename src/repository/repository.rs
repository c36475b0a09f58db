use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::sort::SortMode;
#[cfg(feature = "emitter")]
use crate::emitter::{ChangeNotifier, RosterEvent};
use crate::error::RosterError;
use crate::ranking::RankingHeap;
use crate::record::Student;
use crate::store::{JsonFileStore, RosterStore};
use crate::undo::UndoStack;

/// What happened when the repository read its bound location.
///
/// Loading never fails. A malformed or unreadable source leaves the
/// repository empty and is reported as `Reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored at the location yet.
    Missing,
    /// The stored collection replaced the in-memory one.
    Loaded { count: usize },
    /// The source could not be read or decoded; every structure was cleared.
    Reset { reason: String },
}

/// Owner of the student collection and the structures derived from it.
///
/// The primary collection, the grade ranking and the deletion undo stack
/// are private and only ever mutated together, so after every call the
/// ranking agrees with the collection.
pub struct StudentRepository<S: RosterStore = JsonFileStore> {
    students: Vec<Student>,
    ranking: RankingHeap,
    deleted: UndoStack<Student>,
    store: S,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl StudentRepository<JsonFileStore> {
    /// Bind to a JSON file and load it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(JsonFileStore::new(path))
    }
}

impl<S: RosterStore> StudentRepository<S> {
    /// Bind to `store` and load whatever it holds.
    pub fn with_store(store: S) -> Self {
        let mut repo = Self::bind(store);
        repo.load();
        repo
    }

    /// Bind to `store` without loading it. The repository starts empty.
    pub fn bind(store: S) -> Self {
        StudentRepository {
            students: Vec::new(),
            ranking: RankingHeap::new(),
            deleted: UndoStack::new(),
            store,
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Replace the in-memory state with the bound location's contents.
    pub fn load(&mut self) -> LoadOutcome {
        match self.store.load() {
            Ok(Some(students)) => {
                let count = students.len();
                self.students = students;
                self.deleted.clear();
                self.rebuild_ranking();
                info!(location = %self.store.location(), count, "roster loaded");
                LoadOutcome::Loaded { count }
            }
            Ok(None) => {
                self.reset();
                debug!(location = %self.store.location(), "no stored roster, starting empty");
                LoadOutcome::Missing
            }
            Err(err) => {
                self.reset();
                warn!(
                    location = %self.store.location(),
                    error = %err,
                    "stored roster unreadable, starting empty"
                );
                LoadOutcome::Reset {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Write the collection to the bound location.
    pub fn save(&self) -> Result<(), RosterError> {
        self.store.save(&self.students)?;
        info!(location = %self.store.location(), count = self.students.len(), "roster saved");
        Ok(())
    }

    /// Write the collection to `path` without rebinding the repository.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        let target = JsonFileStore::new(path.as_ref());
        target.save(&self.students)?;
        info!(location = %target.location(), count = self.students.len(), "roster exported");
        Ok(())
    }

    fn reset(&mut self) {
        self.students.clear();
        self.deleted.clear();
        self.ranking.clear();
    }

    fn rebuild_ranking(&mut self) {
        self.ranking.rebuild(
            self.students
                .iter()
                .enumerate()
                .map(|(slot, student)| (student.grade, slot)),
        );
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }

    /// Append a new student. Fails if the id is already present.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if self.position(&student.id).is_some() {
            return Err(RosterError::DuplicateId { id: student.id });
        }

        let slot = self.students.len();
        self.ranking.push(student.grade, slot);
        self.students.push(student);
        debug!(id = %self.students[slot].id, grade = self.students[slot].grade, "student added");

        #[cfg(feature = "emitter")]
        self.notifier
            .notify(RosterEvent::StudentAdded, &self.students[slot]);

        Ok(())
    }

    /// Remove the student with `id`, keeping it on the undo stack.
    ///
    /// Returns the removed record, or `None` (and changes nothing) when no
    /// student has that id.
    pub fn delete(&mut self, id: &str) -> Option<Student> {
        let index = self.position(id)?;
        let student = self.students.remove(index);
        self.rebuild_ranking();
        self.deleted.push(student.clone());
        debug!(id = %student.id, undo_depth = self.deleted.len(), "student deleted");

        #[cfg(feature = "emitter")]
        self.notifier.notify(RosterEvent::StudentDeleted, &student);

        Some(student)
    }

    /// Restore the most recently deleted student.
    ///
    /// No duplicate check is made: if the id was re-added meanwhile, both
    /// records end up in the collection.
    pub fn undo_delete(&mut self) -> Option<Student> {
        let student = self.deleted.pop()?;
        let restored = student.clone();
        self.students.push(student);
        self.rebuild_ranking();
        debug!(id = %restored.id, undo_depth = self.deleted.len(), "deletion undone");

        #[cfg(feature = "emitter")]
        self.notifier.notify(RosterEvent::StudentRestored, &restored);

        Some(restored)
    }

    /// Overwrite name, age and grade of an existing student. The id never
    /// changes.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        age: i64,
        grade: i64,
    ) -> Result<&Student, RosterError> {
        let index = self.position(id).ok_or_else(|| RosterError::NotFound {
            id: id.to_string(),
        })?;

        let student = &mut self.students[index];
        student.name = name.into();
        student.age = age;
        student.grade = grade;
        self.rebuild_ranking();
        debug!(id, grade, "student updated");

        #[cfg(feature = "emitter")]
        self.notifier
            .notify(RosterEvent::StudentUpdated, &self.students[index]);

        Ok(&self.students[index])
    }

    /// Snapshot of every student in collection order.
    pub fn get_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Number of deletions that can still be undone.
    pub fn undo_depth(&self) -> usize {
        self.deleted.len()
    }

    /// First student whose id or name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Option<&Student> {
        let needle = query.to_lowercase();
        self.students
            .iter()
            .find(|student| student.matches_lowercase(&needle))
    }

    /// Reorder the collection in place. Equal keys keep their relative order.
    pub fn sort(&mut self, mode: SortMode) {
        match mode {
            SortMode::NameAsc => self
                .students
                .sort_by_cached_key(|student| student.name.to_lowercase()),
            SortMode::NameDesc => self
                .students
                .sort_by_cached_key(|student| Reverse(student.name.to_lowercase())),
            SortMode::AgeAsc => self.students.sort_by_key(|student| student.age),
            SortMode::AgeDesc => self.students.sort_by_key(|student| Reverse(student.age)),
            SortMode::GradeAsc => self.students.sort_by_key(|student| student.grade),
            SortMode::GradeDesc => self.students.sort_by_key(|student| Reverse(student.grade)),
        }
        // Slots moved; the ranking answer itself is unchanged.
        self.rebuild_ranking();
        debug!(mode = %mode, "roster sorted");
    }

    /// Sort by textual mode name. Unknown names are ignored.
    ///
    /// Returns whether a sort was applied.
    pub fn sort_by_name(&mut self, mode: &str) -> bool {
        match mode.parse::<SortMode>() {
            Ok(mode) => {
                self.sort(mode);
                true
            }
            Err(err) => {
                debug!(error = %err, "sort ignored");
                false
            }
        }
    }

    /// Student with the highest grade, earliest in collection order on ties.
    pub fn top_student(&self) -> Option<&Student> {
        self.ranking
            .peek()
            .and_then(|slot| self.students.get(slot))
    }

    /// Register a listener for a change event.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&mut self, event: RosterEvent, listener: F)
    where
        F: Fn(Student) + Send + Sync + 'static,
    {
        self.notifier.on(event, listener);
    }
}
