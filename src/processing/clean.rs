/*! Parallel coverage cleaning

Removes source sentences that are not translated in every target language.
!*/
use log::info;

use crate::corpus::{Corpus, ParallelRecord};
use crate::lang::TargetLanguages;

/// true if `record` has a translation for each language of `target_languages`.
#[inline]
pub fn is_complete(record: &ParallelRecord, target_languages: &TargetLanguages) -> bool {
    target_languages
        .iter()
        .all(|lang| record.contains_key(lang))
}

/// Keep only the records that have a translation in every language of `target_languages`.
///
/// The corpus is consumed, and retained records keep their relative order.
pub fn filter_complete(mut corpus: Corpus, target_languages: &TargetLanguages) -> Corpus {
    let before = corpus.len();
    corpus.retain(|_, record| is_complete(record, target_languages));

    info!(
        "cleaning removed {} of {} records",
        before - corpus.len(),
        before
    );
    corpus
}
