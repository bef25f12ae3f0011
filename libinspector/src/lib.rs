pub mod input;
pub mod listing;
pub mod report;

pub use input::{parse_word, MalformedInput};
pub use listing::{list, lookup_table, valid_words, FilterError, ListFilter};
pub use report::Inspection;
