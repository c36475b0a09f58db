//! InMemoryRosterStore - byte-buffer store for testing and embedding.

use std::sync::{Arc, RwLock};

use super::{codec, RosterStore};
use crate::error::RosterError;
use crate::record::Student;

/// In-memory roster store holding the encoded collection.
///
/// Bytes go through the same codec as the file store, so malformed contents
/// behave identically. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryRosterStore {
    bytes: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryRosterStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with raw bytes.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::new(RwLock::new(Some(bytes.into()))),
        }
    }

    /// Copy of the currently stored bytes.
    pub fn bytes(&self) -> Result<Option<Vec<u8>>, RosterError> {
        let bytes = self
            .bytes
            .read()
            .map_err(|_| RosterError::Storage("lock poisoned".into()))?;
        Ok(bytes.clone())
    }
}

impl RosterStore for InMemoryRosterStore {
    fn load(&self) -> Result<Option<Vec<Student>>, RosterError> {
        let bytes = self
            .bytes
            .read()
            .map_err(|_| RosterError::Storage("lock poisoned".into()))?;

        match bytes.as_deref() {
            Some(bytes) => codec::decode(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, students: &[Student]) -> Result<(), RosterError> {
        let encoded = codec::encode(students)?;
        let mut bytes = self
            .bytes
            .write()
            .map_err(|_| RosterError::Storage("lock poisoned".into()))?;
        *bytes = Some(encoded);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
