/*! Corpus loading

Discovers sentence pair files in a folder and merges them into a single [Corpus],
keyed by source sentence.

Files are expected to be named `{dataset}-{source}-{target}-{stage}.tsv` (see [crate::lang::LangPair]).
Files that do not have the right extension or that are not from the requested source language are skipped,
while malformed file names or lines abort the whole loading.
!*/
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, error, info, warn};

use crate::corpus::Corpus;
use crate::error::Error;
use crate::lang::{has_corpus_extension, LangPair, TargetLanguages};

use super::tsvreader::TsvReader;

/// Sentence pairs, grouped by target language.
type PairsByLang = IndexMap<String, Vec<(String, String)>>;

/// list folder entries, sorted by path.
fn list_files(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = std::fs::read_dir(src)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, std::io::Error>>()?;
    files.sort();
    Ok(files)
}

/// Read every accepted file of `src`, concatenating pairs that share a target language.
fn load_pairs(src: &Path, source_lang: &str) -> Result<PairsByLang, Error> {
    let mut pairs = PairsByLang::new();

    for path in list_files(src)? {
        if !has_corpus_extension(&path) {
            warn!("Skipping {:?}, it is not a tsv file.", path);
            continue;
        }

        let pair = LangPair::from_path(&path)?;
        if pair.source != source_lang {
            error!(
                "Source language '{}' of {:?} does not match '{}', skipping file.",
                pair.source, path, source_lang
            );
            continue;
        }

        info!("[{}] reading {:?}", pair.target, path);
        let file_pairs = TsvReader::from_path(&path)?.collect::<Result<Vec<_>, Error>>()?;
        debug!("[{}] {} pairs in {:?}", pair.target, file_pairs.len(), path);

        pairs.entry(pair.target).or_default().extend(file_pairs);
    }

    Ok(pairs)
}

/// Merge pairs into a [Corpus].
///
/// When a source sentence appears twice for the same language, the last occurrence wins.
fn merge(pairs: PairsByLang) -> (Corpus, TargetLanguages) {
    let mut corpus = Corpus::new();
    let mut langs = TargetLanguages::with_capacity(pairs.len());

    for (lang, lang_pairs) in pairs {
        for (source, target) in lang_pairs {
            if let Some(old) = corpus.insert_translation(source, &lang, target) {
                debug!("[{}] overwriting translation {:?}", lang, old);
            }
        }
        langs.insert(lang);
    }

    (corpus, langs)
}

/// Load all `{dataset}-{source_lang}-{target}-{stage}.tsv` files of `src` into a [Corpus].
///
/// Returns the corpus along with the target languages that have been found.
pub fn discover_and_merge(
    src: &Path,
    source_lang: &str,
) -> Result<(Corpus, TargetLanguages), Error> {
    let pairs = load_pairs(src, source_lang)?;
    let (corpus, langs) = merge(pairs);
    info!(
        "loaded {} source sentences, target languages: [{}]",
        corpus.len(),
        langs.iter().join(", ")
    );
    Ok((corpus, langs))
}

/// Read a corpus previously written by [crate::io::writer::write_json].
pub fn read_corpus(src: &Path) -> Result<Corpus, Error> {
    let f = File::open(src)?;
    let corpus = serde_json::from_reader(BufReader::new(f))?;
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write, path::Path};

    use tempfile::tempdir;
    use test_log::test;

    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn example_two_languages() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "d-en-fr-train.tsv", "hello\tbonjour\n");
        write_file(dir.path(), "d-en-es-train.tsv", "hello\thola\ncat\tgato\n");

        let (corpus, langs) = discover_and_merge(dir.path(), "en").unwrap();

        assert_eq!(corpus.len(), 2);
        let hello = corpus.get("hello").unwrap();
        assert_eq!(hello.get("fr").unwrap(), "bonjour");
        assert_eq!(hello.get("es").unwrap(), "hola");
        let cat = corpus.get("cat").unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.get("es").unwrap(), "gato");

        assert_eq!(langs.len(), 2);
        assert!(langs.contains("fr"));
        assert!(langs.contains("es"));
    }

    #[test]
    fn same_lang_disjoint_union() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a-en-fr-train.tsv", "hello\tbonjour\n");
        write_file(dir.path(), "b-en-fr-dev.tsv", "cat\tchat\n");

        let (corpus, langs) = discover_and_merge(dir.path(), "en").unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("hello").unwrap().get("fr").unwrap(), "bonjour");
        assert_eq!(corpus.get("cat").unwrap().get("fr").unwrap(), "chat");
        assert_eq!(langs.len(), 1);
    }

    #[test]
    fn last_write_wins() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a-en-fr-train.tsv", "hello\tsalut\n");
        write_file(dir.path(), "b-en-fr-train.tsv", "hello\tbonjour\n");

        let (corpus, _) = discover_and_merge(dir.path(), "en").unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get("hello").unwrap().get("fr").unwrap(), "bonjour");
    }

    #[test]
    fn last_write_wins_same_file() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a-en-fr-train.tsv", "hello\tsalut\nhello\tbonjour\n");

        let (corpus, _) = discover_and_merge(dir.path(), "en").unwrap();
        assert_eq!(corpus.get("hello").unwrap().get("fr").unwrap(), "bonjour");
    }

    #[test]
    fn skip_non_tsv_and_other_source() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "README.md", "not a corpus");
        write_file(dir.path(), "d-en-fr-train.csv", "hello,bonjour\n");
        write_file(dir.path(), "d-de-fr-train.tsv", "hallo\tbonjour\n");
        write_file(dir.path(), "d-en-it-train.tsv", "hello\tciao\n");

        let (corpus, langs) = discover_and_merge(dir.path(), "en").unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.get("hallo").is_none());
        assert_eq!(langs.into_iter().collect::<Vec<_>>(), vec!["it".to_string()]);
    }

    #[test]
    fn malformed_file_name() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "d-en-fr.tsv", "hello\tbonjour\n");

        let r = discover_and_merge(dir.path(), "en");
        assert!(matches!(r, Err(Error::MalformedFileName { .. })));
    }

    #[test]
    fn malformed_line() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "d-en-fr-train.tsv", "hello\tbonjour\nbroken\n");

        match discover_and_merge(dir.path(), "en") {
            Err(Error::MalformedLine { path, line, .. }) => {
                assert_eq!(line, 2);
                assert!(path.ends_with("d-en-fr-train.tsv"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_names_file_and_line() {
        let dir = tempdir().unwrap();
        let mut f = File::create(dir.path().join("d-en-fr-train.tsv")).unwrap();
        f.write_all(b"hello\tbonjour\nbad\t\xff\xfe\n").unwrap();

        let err = discover_and_merge(dir.path(), "en").unwrap_err();
        assert!(matches!(err, Error::Read { line: Some(2), .. }));
        let msg = err.to_string();
        assert!(msg.contains("d-en-fr-train.tsv"), "{}", msg);
        assert!(msg.contains("line 2"), "{}", msg);
    }

    #[test]
    fn folder_named_like_corpus_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("d-en-fr-train.tsv")).unwrap();

        let err = discover_and_merge(dir.path(), "en").unwrap_err();
        assert!(
            err.to_string().contains("d-en-fr-train.tsv"),
            "{}",
            err
        );
    }

    #[test]
    fn empty_folder() {
        let dir = tempdir().unwrap();
        let (corpus, langs) = discover_and_merge(dir.path(), "en").unwrap();
        assert!(corpus.is_empty());
        assert!(langs.is_empty());
    }

    #[test]
    fn missing_folder() {
        let r = discover_and_merge(Path::new("svdkjljlkmjlmdsfljkf"), "en");
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
