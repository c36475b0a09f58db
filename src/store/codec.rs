//! Whole-collection JSON codec.
//!
//! The persisted form is a UTF-8 JSON array of objects carrying exactly
//! `id`, `name`, `age` and `grade`, pretty printed with two-space indent.

use crate::error::RosterError;
use crate::record::Student;

pub fn encode(students: &[Student]) -> Result<Vec<u8>, RosterError> {
    Ok(serde_json::to_vec_pretty(students)?)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Student>, RosterError> {
    Ok(serde_json::from_slice(bytes)?)
}
