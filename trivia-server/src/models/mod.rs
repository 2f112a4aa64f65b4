//! Domain models with validation at construction
//!
//! Request bodies are parsed into these types before any query runs.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod question;
pub mod category;
pub mod pagination;
pub mod quiz;

pub use validation::{required, ValidationError};
pub use question::{Difficulty, NewQuestion, QuestionText};
pub use category::CategoryFilter;
pub use pagination::{Pagination, Paginated, QUESTIONS_PER_PAGE};
pub use quiz::pick_random;
