//! Corpus construction for fuzzy search.
//!
//! A [`Corpus`] is the flat collection of candidate words a query is ranked
//! against. It can be built from an explicit word list or extracted from
//! free text; either way words are lower-cased and de-duplicated, keeping
//! first-seen order so repeated searches over the same input are
//! reproducible (ties in the ranking keep corpus order).

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;

lazy_static! {
    /// Word-boundary tokenizer matching runs of word characters.
    static ref WORD_RE: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// An immutable collection of lower-cased, de-duplicated candidate words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Build a corpus from an explicit word list.
    ///
    /// Words are lower-cased; duplicates (after case folding) are dropped,
    /// keeping the first occurrence. Empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let mut unique = Vec::new();

        for word in words {
            let normalized = word.as_ref().to_lowercase();
            if !normalized.is_empty() && seen.insert(normalized.clone()) {
                unique.push(normalized);
            }
        }

        Corpus { words: unique }
    }

    /// Build a corpus by extracting words from free text.
    ///
    /// Tokenizes on word boundaries, lower-cases, and de-duplicates keeping
    /// first-seen order.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(WORD_RE.find_iter(text).map(|m| m.as_str()))
    }

    /// Load a corpus from a text file.
    ///
    /// The file content is treated as free text, so both one-word-per-line
    /// dictionaries and prose work.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// The words in this corpus, in iteration order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of unique words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// Check whether a word is present (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        self.words.iter().any(|w| *w == normalized)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Corpus::from_words(iter)
    }
}
