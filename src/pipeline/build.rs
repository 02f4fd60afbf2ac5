/*! Build pipeline

Runs the whole ingestion:

1. load and merge every `{dataset}-{source}-{target}-{stage}.tsv` file of `src`,
2. compute pre-cleaning metrics (optional),
3. remove records that are not translated in every target language,
4. compute post-cleaning metrics (optional),
5. write the cleaned corpus to `dst`.
!*/
use std::path::{Path, PathBuf};

use log::info;

use crate::corpus::Corpus;
use crate::error::Error;
use crate::io::{discover_and_merge, write_json};
use crate::lang::TargetLanguages;
use crate::processing::metrics::default_degree;
use crate::processing::{compute_metrics, filter_complete, Metrics};
use crate::tokenize::{Tokenizer, TokenizerKind};

use super::pipeline::Pipeline;

pub struct Build {
    src: PathBuf,
    dst: PathBuf,
    source_lang: String,
    metrics_pre: Option<PathBuf>,
    metrics_post: Option<PathBuf>,
    workers: usize,
    tokenizer: TokenizerKind,
}

/// Summary of a [Build] run.
#[derive(Debug)]
pub struct BuildReport {
    pub target_languages: TargetLanguages,
    pub records_loaded: usize,
    pub records_kept: usize,
    pub metrics_pre: Option<Metrics>,
    pub metrics_post: Option<Metrics>,
}

impl Build {
    pub fn new(src: PathBuf, dst: PathBuf, source_lang: String) -> Self {
        Self {
            src,
            dst,
            source_lang,
            metrics_pre: None,
            metrics_post: None,
            workers: default_degree(),
            tokenizer: TokenizerKind::default(),
        }
    }

    /// Write metrics of the corpus before cleaning at `dst`.
    pub fn with_metrics_pre(mut self, dst: Option<PathBuf>) -> Self {
        self.metrics_pre = dst;
        self
    }

    /// Write metrics of the corpus after cleaning at `dst`.
    pub fn with_metrics_post(mut self, dst: Option<PathBuf>) -> Self {
        self.metrics_post = dst;
        self
    }

    /// Set the number of token counting workers. Keeps the default if `None`.
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

    fn wants_metrics(&self) -> bool {
        self.metrics_pre.is_some() || self.metrics_post.is_some()
    }

    /// compute and write metrics if a destination is set.
    fn metrics(
        &self,
        stage: &str,
        corpus: &Corpus,
        langs: &TargetLanguages,
        tokenizer: Option<&dyn Tokenizer>,
        dst: Option<&Path>,
    ) -> Result<Option<Metrics>, Error> {
        match (dst, tokenizer) {
            (Some(dst), Some(tokenizer)) => {
                info!("[{}] computing metrics", stage);
                let metrics = compute_metrics(corpus, langs, tokenizer, self.workers)?;
                info!("[{}] {:?}", stage, metrics);
                write_json(&metrics, dst)?;
                Ok(Some(metrics))
            }
            _ => Ok(None),
        }
    }
}

impl Pipeline<BuildReport> for Build {
    fn run(&self) -> Result<BuildReport, Error> {
        // load the tokenizer before anything else, so that a wrong
        // tokenizer path fails early.
        let tokenizer = if self.wants_metrics() {
            Some(self.tokenizer.load()?)
        } else {
            None
        };
        let tokenizer = tokenizer.as_deref();

        let (corpus, langs) = discover_and_merge(&self.src, &self.source_lang)?;
        let records_loaded = corpus.len();

        let metrics_pre = self.metrics(
            "pre",
            &corpus,
            &langs,
            tokenizer,
            self.metrics_pre.as_deref(),
        )?;

        let corpus = filter_complete(corpus, &langs);
        let records_kept = corpus.len();

        let metrics_post = self.metrics(
            "post",
            &corpus,
            &langs,
            tokenizer,
            self.metrics_post.as_deref(),
        )?;

        write_json(&corpus, &self.dst)?;
        info!(
            "wrote {} of {} records to {:?}",
            records_kept, records_loaded, self.dst
        );

        Ok(BuildReport {
            target_languages: langs,
            records_loaded,
            records_kept,
            metrics_pre,
            metrics_post,
        })
    }
}
