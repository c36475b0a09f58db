mod repository;
mod shared;
mod sort;

pub use repository::{LoadOutcome, StudentRepository};
pub use shared::SharedStudentRepository;
pub use sort::{SortMode, UnknownSortMode};
