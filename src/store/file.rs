//! JsonFileStore - flat-file store holding the roster as a JSON array.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{codec, RosterStore};
use crate::error::RosterError;
use crate::record::Student;

/// File-backed roster store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Student>>, RosterError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RosterError::io(&self.path, err)),
        };

        codec::decode(&bytes).map(Some)
    }

    fn save(&self, students: &[Student]) -> Result<(), RosterError> {
        let bytes = codec::encode(students)?;
        let mut file = fs::File::create(&self.path).map_err(|e| RosterError::io(&self.path, e))?;
        file.write_all(&bytes)
            .and_then(|_| file.flush())
            .map_err(|e| RosterError::io(&self.path, e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
