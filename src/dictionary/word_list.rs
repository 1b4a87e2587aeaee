//! Word list backed dictionary

use super::{DEFAULT_LANGUAGE, DictionaryOracle};
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use log::debug;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// A dictionary holding every known word of a single language in memory
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Build from any collection of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryOracle, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["Silk", "worm "], "en");
    /// assert!(dictionary.is_valid_word("silk", "en"));
    /// assert!(dictionary.is_valid_word("worm", "en"));
    /// assert!(!dictionary.is_valid_word("silk", "fr"));
    /// ```
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            words,
            language: language.into(),
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let dictionary = Self::from_words(DICTIONARY, DEFAULT_LANGUAGE);
        debug!("Loaded embedded dictionary with {} words", dictionary.len());
        dictionary
    }

    /// Load a newline-separated dictionary file for `language`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: impl Into<String>) -> io::Result<Self> {
        let words = load_from_file(path)?;
        let dictionary = Self::from_words(words, language);
        debug!(
            "Loaded {} dictionary with {} words",
            dictionary.language,
            dictionary.len()
        );
        Ok(dictionary)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self.supports_language(language) && self.contains(word)
    }

    fn supports_language(&self, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language)
    }
}
