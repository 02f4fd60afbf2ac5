//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// File name does not follow `{dataset}-{src}-{tgt}-{stage}.tsv`.
    MalformedFileName { path: PathBuf, segments: usize },
    /// Line is not made of exactly two tab-separated fields. `line` is 1-based.
    MalformedLine {
        path: PathBuf,
        line: usize,
        fields: usize,
    },
    /// Corpus file could not be opened (`line` is `None`) or read. `line` is 1-based.
    Read {
        path: PathBuf,
        line: Option<usize>,
        source: std::io::Error,
    },
    /// Percentage and average metrics are undefined on an empty corpus.
    EmptyCorpus,
    Tokenizer(String),
    ThreadPool(rayon::ThreadPoolBuildError),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::MalformedFileName { path, segments } => write!(
                f,
                "malformed file name {:?}: expected 4 dash-separated segments, got {}",
                path, segments
            ),
            Error::MalformedLine { path, line, fields } => write!(
                f,
                "malformed line {} in {:?}: expected 2 tab-separated fields, got {}",
                line, path, fields
            ),
            Error::Read {
                path,
                line: Some(line),
                source,
            } => write!(f, "cannot read line {} of {:?}: {}", line, path, source),
            Error::Read {
                path,
                line: None,
                source,
            } => write!(f, "cannot open {:?}: {}", path, source),
            Error::EmptyCorpus => write!(f, "cannot compute metrics on an empty corpus"),
            Error::Tokenizer(e) => write!(f, "tokenizer error: {}", e),
            Error::ThreadPool(e) => write!(f, "could not build worker pool: {}", e),
            Error::Custom(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
