//! Comma-separated value tokenizing and escaping
//!
//! Only single lines are handled here. Splitting a document into lines and
//! grouping entries into records is done by [`crate::codec`].

mod splitter;
mod writer;

pub use splitter::{CsvSplitter, split, split_line};
pub use writer::{escape, join};
