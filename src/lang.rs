//! Language pair file names.
//!
//! Corpus files are named `{dataset}-{source}-{target}-{stage}.tsv`,
//! for example `europarl-en-fr-train.tsv`.
//!
use std::path::Path;

use indexmap::IndexSet;

use crate::error::Error;

/// Extension of accepted corpus files.
pub const EXTENSION: &str = "tsv";

/// Target languages, in order of first appearance.
pub type TargetLanguages = IndexSet<String>;

/// Information held in a corpus file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangPair {
    pub dataset: String,
    pub source: String,
    pub target: String,
    pub stage: String,
}

impl LangPair {
    /// Parse the file stem of `path`.
    ///
    /// Only the segment count is checked here: whether the source language
    /// matches is up to the caller.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();

        let segments: Vec<&str> = stem.split('-').collect();
        match segments.as_slice() {
            [dataset, source, target, stage] => Ok(Self {
                dataset: dataset.to_string(),
                source: source.to_string(),
                target: target.to_string(),
                stage: stage.to_string(),
            }),
            _ => Err(Error::MalformedFileName {
                path: path.to_path_buf(),
                segments: segments.len(),
            }),
        }
    }
}

/// true if `path` has the [EXTENSION] extension.
pub fn has_corpus_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == EXTENSION)
}
