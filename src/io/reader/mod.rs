/*! Corpus reading utilities

[tsvreader::TsvReader] reads sentence pair files, [corpus] discovers and merges them.
!*/
pub mod corpus;
pub mod tsvreader;

pub use corpus::{discover_and_merge, read_corpus};
pub use tsvreader::TsvReader;
