pub mod corpus;
pub mod error;
pub mod io;
pub mod lang;
pub mod pipeline;
pub mod processing;
pub mod tokenize;
