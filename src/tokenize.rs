/*! Tokenizers

Token counting used by [crate::processing::metrics].

Tokenizers are shared by reference between every worker of the metrics pool,
so they must be usable concurrently without mutation (hence the `Send + Sync` bound).

- [UnicodeWords] counts words following Unicode word boundaries (default).
- [Whitespace] counts whitespace-separated tokens.
- `HuggingFace` (feature `hf-tokenizer`) counts subword tokens of a `tokenizer.json` model.
!*/
use std::path::Path;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

pub trait Tokenizer: Send + Sync {
    /// Number of tokens in `text`.
    fn count_tokens(&self, text: &str) -> Result<usize, Error>;
}

/// Unicode word tokenizer. Punctuation and whitespace are not counted.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWords;

impl Tokenizer for UnicodeWords {
    fn count_tokens(&self, text: &str) -> Result<usize, Error> {
        Ok(text.unicode_words().count())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Whitespace;

impl Tokenizer for Whitespace {
    fn count_tokens(&self, text: &str) -> Result<usize, Error> {
        Ok(text.split_whitespace().count())
    }
}

/// Subword tokenizer backed by the `tokenizers` crate.
#[cfg(feature = "hf-tokenizer")]
pub struct HuggingFace {
    inner: tokenizers::Tokenizer,
}

#[cfg(feature = "hf-tokenizer")]
impl HuggingFace {
    /// Load a `tokenizer.json` file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let inner =
            tokenizers::Tokenizer::from_file(path).map_err(|e| Error::Tokenizer(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "hf-tokenizer")]
impl Tokenizer for HuggingFace {
    fn count_tokens(&self, text: &str) -> Result<usize, Error> {
        // special tokens ([CLS], [SEP]) are not part of the sentence
        self.inner
            .encode(text, false)
            .map(|encoding| encoding.len())
            .map_err(|e| Error::Tokenizer(e.to_string()))
    }
}

/// Tokenizer selection, as given on the command line.
///
/// `unicode` and `whitespace` select the built-in tokenizers,
/// anything else is considered to be a path to a `tokenizer.json` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerKind {
    UnicodeWords,
    Whitespace,
    File(std::path::PathBuf),
}

impl Default for TokenizerKind {
    fn default() -> Self {
        TokenizerKind::UnicodeWords
    }
}

impl FromStr for TokenizerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(Error::Custom("empty tokenizer name".to_string())),
            "unicode" => Ok(TokenizerKind::UnicodeWords),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            path => Ok(TokenizerKind::File(Path::new(path).to_path_buf())),
        }
    }
}

impl TokenizerKind {
    /// Instantiate the tokenizer. Model files are loaded here, once.
    pub fn load(&self) -> Result<Box<dyn Tokenizer>, Error> {
        match self {
            TokenizerKind::UnicodeWords => Ok(Box::new(UnicodeWords)),
            TokenizerKind::Whitespace => Ok(Box::new(Whitespace)),
            TokenizerKind::File(path) => Self::load_file(path),
        }
    }

    #[cfg(feature = "hf-tokenizer")]
    fn load_file(path: &Path) -> Result<Box<dyn Tokenizer>, Error> {
        Ok(Box::new(HuggingFace::from_file(path)?))
    }

    #[cfg(not(feature = "hf-tokenizer"))]
    fn load_file(path: &Path) -> Result<Box<dyn Tokenizer>, Error> {
        Err(Error::Tokenizer(format!(
            "cannot load {:?}: built without the hf-tokenizer feature",
            path
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_words() {
        let t = UnicodeWords;
        assert_eq!(t.count_tokens("Hello, world!").unwrap(), 2);
        assert_eq!(t.count_tokens("").unwrap(), 0);
        assert_eq!(t.count_tokens("l'été est là").unwrap(), 3);
    }

    #[test]
    fn unicode_words_chinese() {
        let t = UnicodeWords;
        assert_eq!(t.count_tokens("人人").unwrap(), 2);
    }

    #[test]
    fn whitespace() {
        let t = Whitespace;
        assert_eq!(t.count_tokens("  Hello,   world! ").unwrap(), 2);
        assert_eq!(t.count_tokens("").unwrap(), 0);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!(
            "unicode".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::UnicodeWords
        );
        assert_eq!(
            "whitespace".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::Whitespace
        );
        assert_eq!(
            "models/tokenizer.json".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::File("models/tokenizer.json".into())
        );
        assert!("".parse::<TokenizerKind>().is_err());
    }

    #[test]
    fn load_builtin() {
        let t = TokenizerKind::Whitespace.load().unwrap();
        assert_eq!(t.count_tokens("a b c").unwrap(), 3);
    }

    #[cfg(not(feature = "hf-tokenizer"))]
    #[test]
    fn load_file_without_feature() {
        let r = TokenizerKind::File("tokenizer.json".into()).load();
        assert!(matches!(r, Err(Error::Tokenizer(_))));
    }
}
