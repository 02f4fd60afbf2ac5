/*!
# IO utilities

Sentence pair loading and JSON saving/loading of corpora and metrics.
!*/
pub mod reader;
pub mod writer;

pub use reader::{discover_and_merge, read_corpus};
pub use writer::write_json;
