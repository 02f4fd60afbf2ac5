//! Metrics on an already built corpus.
use std::path::PathBuf;

use log::info;

use crate::corpus::Corpus;
use crate::error::Error;
use crate::io::{read_corpus, write_json};
use crate::lang::TargetLanguages;
use crate::processing::metrics::default_degree;
use crate::processing::{compute_metrics, Metrics};
use crate::tokenize::TokenizerKind;

use super::pipeline::Pipeline;

/// Computes [Metrics] of a corpus JSON file.
///
/// If no target languages are given, every language found in the corpus is required.
pub struct Stats {
    src: PathBuf,
    target_languages: Option<TargetLanguages>,
    dst: Option<PathBuf>,
    workers: usize,
    tokenizer: TokenizerKind,
}

impl Stats {
    pub fn new(src: PathBuf) -> Self {
        Self {
            src,
            target_languages: None,
            dst: None,
            workers: default_degree(),
            tokenizer: TokenizerKind::default(),
        }
    }

    pub fn with_target_languages(mut self, langs: Option<TargetLanguages>) -> Self {
        self.target_languages = langs;
        self
    }

    /// Write metrics at `dst` in addition to returning them.
    pub fn with_dst(mut self, dst: Option<PathBuf>) -> Self {
        self.dst = dst;
        self
    }

    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        if let Some(workers) = workers {
            self.workers = workers;
        }
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Languages present in at least one record, in order of first appearance.
    fn languages_of(corpus: &Corpus) -> TargetLanguages {
        corpus
            .iter()
            .flat_map(|(_, record)| record.keys().cloned())
            .collect()
    }
}

impl Pipeline<Metrics> for Stats {
    fn run(&self) -> Result<Metrics, Error> {
        let tokenizer = self.tokenizer.load()?;
        let corpus = read_corpus(&self.src)?;

        let langs = match &self.target_languages {
            Some(langs) => langs.clone(),
            None => Self::languages_of(&corpus),
        };
        info!("target languages: {:?}", langs);

        let metrics = compute_metrics(&corpus, &langs, &*tokenizer, self.workers)?;
        if let Some(dst) = &self.dst {
            write_json(&metrics, dst)?;
        }

        Ok(metrics)
    }
}
