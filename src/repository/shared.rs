use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::repository::{LoadOutcome, StudentRepository};
use super::sort::SortMode;
#[cfg(feature = "emitter")]
use crate::emitter::RosterEvent;
use crate::error::RosterError;
use crate::record::Student;
use crate::store::{JsonFileStore, RosterStore};

/// Thread-safe handle to one `StudentRepository`.
///
/// Every operation takes the single lock for its whole duration, so the
/// multi-step mutations of the repository are never interleaved. Reads
/// return owned copies. Clone-friendly via Arc.
pub struct SharedStudentRepository<S: RosterStore = JsonFileStore> {
    inner: Arc<RwLock<StudentRepository<S>>>,
}

impl<S: RosterStore> Clone for SharedStudentRepository<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedStudentRepository<JsonFileStore> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(StudentRepository::open(path))
    }
}

impl<S: RosterStore> SharedStudentRepository<S> {
    pub fn new(repo: StudentRepository<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repo)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StudentRepository<S>>, RosterError> {
        self.inner
            .read()
            .map_err(|_| RosterError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StudentRepository<S>>, RosterError> {
        self.inner
            .write()
            .map_err(|_| RosterError::LockPoisoned("write"))
    }

    pub fn add(&self, student: Student) -> Result<(), RosterError> {
        self.write()?.add(student)
    }

    pub fn delete(&self, id: &str) -> Result<Option<Student>, RosterError> {
        Ok(self.write()?.delete(id))
    }

    pub fn undo_delete(&self) -> Result<Option<Student>, RosterError> {
        Ok(self.write()?.undo_delete())
    }

    pub fn update(
        &self,
        id: &str,
        name: impl Into<String>,
        age: i64,
        grade: i64,
    ) -> Result<Student, RosterError> {
        self.write()?.update(id, name, age, grade).cloned()
    }

    pub fn get_all(&self) -> Result<Vec<Student>, RosterError> {
        Ok(self.read()?.get_all())
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Student>, RosterError> {
        Ok(self.read()?.get_by_id(id).cloned())
    }

    pub fn search(&self, query: &str) -> Result<Option<Student>, RosterError> {
        Ok(self.read()?.search(query).cloned())
    }

    pub fn sort(&self, mode: SortMode) -> Result<(), RosterError> {
        self.write()?.sort(mode);
        Ok(())
    }

    pub fn top_student(&self) -> Result<Option<Student>, RosterError> {
        Ok(self.read()?.top_student().cloned())
    }

    pub fn len(&self) -> Result<usize, RosterError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RosterError> {
        Ok(self.read()?.is_empty())
    }

    pub fn load(&self) -> Result<LoadOutcome, RosterError> {
        Ok(self.write()?.load())
    }

    pub fn save(&self) -> Result<(), RosterError> {
        self.read()?.save()
    }

    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        self.read()?.export_to(path)
    }

    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&self, event: RosterEvent, listener: F) -> Result<(), RosterError>
    where
        F: Fn(Student) + Send + Sync + 'static,
    {
        self.write()?.on_change(event, listener);
        Ok(())
    }
}
