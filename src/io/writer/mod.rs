/*!
# JSON writing

Corpora and metrics are written as pretty-printed JSON objects, keeping the iteration order of the written maps.
!*/
mod jsonwriter;

pub use jsonwriter::{to_json_string, write_json};
