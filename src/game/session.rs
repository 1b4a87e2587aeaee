//! Game session
//!
//! Ties the root word pool, the dictionary and the current round together so a
//! front end only has to forward what the player typed.

use super::state::{GameError, RoundState};
use super::validator::Rules;
use crate::core::SubmissionResult;
use crate::dictionary::{DEFAULT_LANGUAGE, DictionaryOracle};
use log::info;

/// A running game: one round at a time, over a fixed root word pool
pub struct Game<'a, O: DictionaryOracle> {
    root_words: &'a [String],
    oracle: O,
    rules: Rules,
    language: String,
    state: RoundState,
}

impl<'a, O: DictionaryOracle> Game<'a, O> {
    /// Start a game with the default rules in the default language
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if the pool is empty, or
    /// `GameError::UnsupportedLanguage` if the oracle cannot answer in English.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::Game;
    ///
    /// let roots = vec!["silkworm".to_string()];
    /// let mut game = Game::new(&roots, WordListDictionary::embedded()).unwrap();
    ///
    /// assert!(game.submit("silk").is_accepted());
    /// assert_eq!(game.state().score(), 40);
    /// ```
    pub fn new(root_words: &'a [String], oracle: O) -> Result<Self, GameError> {
        Self::with_options(root_words, oracle, Rules::default(), DEFAULT_LANGUAGE)
    }

    /// Start a game with explicit rules and dictionary language
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnsupportedLanguage` if the oracle cannot answer for
    /// `language`, or `GameError::NoRootWords` if the pool is empty.
    pub fn with_options(
        root_words: &'a [String],
        oracle: O,
        rules: Rules,
        language: &str,
    ) -> Result<Self, GameError> {
        if !oracle.supports_language(language) {
            return Err(GameError::UnsupportedLanguage(language.to_string()));
        }

        let state = RoundState::start_round(root_words)?;
        info!("Round started with root word '{}'", state.root_word());

        Ok(Self {
            root_words,
            oracle,
            rules,
            language: language.to_string(),
            state,
        })
    }

    /// Throw away the current round and start another
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if the pool has no usable entries.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        self.state = RoundState::start_round(self.root_words)?;
        info!("Round started with root word '{}'", self.state.root_word());
        Ok(())
    }

    /// Validate a submission and apply it to the round in one step
    pub fn submit(&mut self, raw: &str) -> SubmissionResult {
        let result = self
            .rules
            .validate(&self.state, &self.oracle, &self.language, raw);
        self.state = std::mem::take(&mut self.state).apply(&result);
        result
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }
}
