//! Dictionary oracles
//!
//! The game never decides on its own whether a string is a word. It asks a
//! `DictionaryOracle`, which can be backed by a word list, a remote service, or a
//! test double.

mod word_list;

pub use word_list::WordListDictionary;

/// Language the embedded dictionary speaks
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers "is this a real word in this language?"
pub trait DictionaryOracle {
    /// Check whether `word` is a valid word in `language`
    ///
    /// `word` is already trimmed and lowercased by the caller.
    fn is_valid_word(&self, word: &str, language: &str) -> bool;

    /// Whether this oracle can answer for `language` at all
    fn supports_language(&self, _language: &str) -> bool {
        true
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }

    fn supports_language(&self, language: &str) -> bool {
        (**self).supports_language(language)
    }
}

/// Oracle answering through a plain function or closure
///
/// Handy as a test double with fixed answers.
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F>(F);

/// Wrap a `Fn(word, language) -> bool` as an oracle
///
/// # Examples
/// ```
/// use word_scramble::dictionary::{DictionaryOracle, from_fn};
///
/// let oracle = from_fn(|word, _language| word != "xyz");
/// assert!(oracle.is_valid_word("silk", "en"));
/// assert!(!oracle.is_valid_word("xyz", "en"));
/// ```
pub const fn from_fn<F>(f: F) -> FnOracle<F>
where
    F: Fn(&str, &str) -> bool,
{
    FnOracle(f)
}

impl<F> DictionaryOracle for FnOracle<F>
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (self.0)(word, language)
    }
}
