//! Rule evaluation and verdict aggregation

pub mod evaluator;
pub mod summary;

pub use evaluator::{Evaluator, ProfileReport};
pub use summary::{READY_MESSAGE, Summary, summarize};
