/*! Aligned corpus

A [Corpus] maps each source sentence to a [ParallelRecord], holding the available
translations of that sentence, keyed by target language.

```json
{
    "hello": {
        "fr": "bonjour",
        "es": "hola"
    }
}
```

Both maps keep insertion order, which is the order records are merged in.
!*/
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Translations of a single source sentence, keyed by target language.
pub type ParallelRecord = IndexMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    inner: IndexMap<String, ParallelRecord>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `lang` translation of `source` to `target`.
    ///
    /// Creates the record if `source` is not known yet.
    /// Returns the previous translation if there was one, which is then overwritten.
    pub fn insert_translation(
        &mut self,
        source: String,
        lang: &str,
        target: String,
    ) -> Option<String> {
        self.inner
            .entry(source)
            .or_default()
            .insert(lang.to_string(), target)
    }

    pub fn get(&self, source: &str) -> Option<&ParallelRecord> {
        self.inner.get(source)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ParallelRecord> {
        self.inner.iter()
    }

    /// Keep records for which `f` is true, preserving order.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&String, &mut ParallelRecord) -> bool,
    {
        self.inner.retain(f)
    }

    /// Borrowed entries, indexable by position.
    pub fn entries(&self) -> Vec<(&String, &ParallelRecord)> {
        self.inner.iter().collect()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = (&'a String, &'a ParallelRecord);
    type IntoIter = indexmap::map::Iter<'a, String, ParallelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl FromIterator<(String, ParallelRecord)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (String, ParallelRecord)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
