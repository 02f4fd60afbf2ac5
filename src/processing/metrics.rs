/*! Corpus metrics

Size, coverage and token statistics of a [Corpus].

Token counting is the costly part: corpus entries are split into contiguous chunks
(see [super::chunks::chunk_ranges]), one per worker of a dedicated thread pool.
Each worker returns a partial [TokenCount], and partials are summed once every worker is done.

Sentences are counted the same way everywhere: each source sentence and each of its translations
count for one sentence, so that `num_sentences` is also the denominator of `avg_tokens_per_sentence`.
!*/
use std::iter::Sum;
use std::ops::Add;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, ParallelRecord};
use crate::error::Error;
use crate::lang::TargetLanguages;
use crate::tokenize::Tokenizer;

use super::chunks::chunk_ranges;
use super::clean::is_complete;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// number of source sentences
    pub size: usize,
    /// source sentences plus all of their translations
    pub num_sentences: usize,
    /// records missing at least one target language
    pub parallelization_missing_records: usize,
    pub parallelization_perc: f64,
    pub total_tokens: usize,
    pub avg_tokens_per_sentence: f64,
}

/// Partial token count of a chunk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenCount {
    pub tokens: usize,
    pub sentences: usize,
}

impl Add for TokenCount {
    type Output = TokenCount;

    fn add(self, rhs: Self) -> Self::Output {
        TokenCount {
            tokens: self.tokens + rhs.tokens,
            sentences: self.sentences + rhs.sentences,
        }
    }
}

impl Sum for TokenCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TokenCount::default(), Add::add)
    }
}

/// Number of workers used by default: the available parallelism of the machine.
pub fn default_degree() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Count tokens and sentences of a slice of corpus entries.
fn count_chunk<T>(
    entries: &[(&String, &ParallelRecord)],
    tokenizer: &T,
) -> Result<TokenCount, Error>
where
    T: Tokenizer + ?Sized,
{
    let mut count = TokenCount::default();
    for (source, record) in entries {
        count.tokens += tokenizer.count_tokens(source)?;
        count.sentences += 1;
        for target in record.values() {
            count.tokens += tokenizer.count_tokens(target)?;
            count.sentences += 1;
        }
    }
    Ok(count)
}

/// Single-pass token count, without any chunking.
pub fn count_tokens_sequential<T>(corpus: &Corpus, tokenizer: &T) -> Result<TokenCount, Error>
where
    T: Tokenizer + ?Sized,
{
    count_chunk(&corpus.entries(), tokenizer)
}

/// Token count using a pool of `degree` workers, each chunk of contiguous entries being a single task.
///
/// If any worker fails, the error is returned and partial counts are discarded.
pub fn count_tokens_parallel<T>(
    corpus: &Corpus,
    tokenizer: &T,
    degree: usize,
) -> Result<TokenCount, Error>
where
    T: Tokenizer + ?Sized,
{
    let degree = degree.max(1);
    let entries = corpus.entries();
    let ranges = chunk_ranges(entries.len(), degree);
    debug!("token count on {} chunks: {:?}", ranges.len(), ranges);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(degree)
        .build()?;

    // one task and one result slot per chunk, joined when the scope ends.
    let mut partials: Vec<Option<Result<TokenCount, Error>>> =
        ranges.iter().map(|_| None).collect();
    pool.scope(|s| {
        for (slot, range) in partials.iter_mut().zip(ranges) {
            let entries = &entries;
            s.spawn(move |_| *slot = Some(count_chunk(&entries[range], tokenizer)));
        }
    });

    partials
        .into_iter()
        .flatten()
        .try_fold(TokenCount::default(), |acc, partial| Ok(acc + partial?))
}

/// Number of records that lack at least one language of `target_languages`.
fn missing_records(corpus: &Corpus, target_languages: &TargetLanguages) -> usize {
    corpus
        .iter()
        .filter(|(_, record)| !is_complete(record, target_languages))
        .count()
}

/// Source sentences plus every translation.
fn num_sentences(corpus: &Corpus) -> usize {
    corpus.len() + corpus.iter().map(|(_, record)| record.len()).sum::<usize>()
}

/// Compute the metrics of `corpus`, with `degree` workers for token counting.
///
/// Fails with [Error::EmptyCorpus] if the corpus is empty,
/// since coverage percentage and average tokens would be undefined.
pub fn compute_metrics<T>(
    corpus: &Corpus,
    target_languages: &TargetLanguages,
    tokenizer: &T,
    degree: usize,
) -> Result<Metrics, Error>
where
    T: Tokenizer + ?Sized,
{
    let size = corpus.len();
    if size == 0 {
        return Err(Error::EmptyCorpus);
    }

    info!("computing metrics on {} records ({} workers)", size, degree);
    let missing = missing_records(corpus, target_languages);
    let parallelization_perc = (1.0 - (missing as f64 / size as f64)) * 100.0;

    let count = count_tokens_parallel(corpus, tokenizer, degree)?;

    Ok(Metrics {
        size,
        num_sentences: num_sentences(corpus),
        parallelization_missing_records: missing,
        parallelization_perc,
        total_tokens: count.tokens,
        avg_tokens_per_sentence: count.tokens as f64 / count.sentences as f64,
    })
}
