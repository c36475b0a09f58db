use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Orderings accepted by `StudentRepository::sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    NameAsc,
    NameDesc,
    AgeAsc,
    AgeDesc,
    GradeAsc,
    GradeDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::AgeAsc,
        SortMode::AgeDesc,
        SortMode::GradeAsc,
        SortMode::GradeDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::NameAsc => "name_asc",
            SortMode::NameDesc => "name_desc",
            SortMode::AgeAsc => "age_asc",
            SortMode::AgeDesc => "age_desc",
            SortMode::GradeAsc => "grade_asc",
            SortMode::GradeDesc => "grade_desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort mode '{0}'")]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownSortMode(s.to_string()))
    }
}
