use serde::{Deserialize, Serialize};

/// One student entry in the roster.
///
/// `id` is the identity key. Equality on ids is exact; search and name
/// ordering are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub grade: i64,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i64, grade: i64) -> Self {
        Student {
            id: id.into(),
            name: name.into(),
            age,
            grade,
        }
    }

    /// Case-insensitive substring match against `id` or `name`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}
