//! Round state
//!
//! The root word for the current round, the words accepted so far, the score and the
//! streak. State is a plain value: every mutation consumes it and hands back the
//! updated round.

use crate::core::SubmissionResult;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Configuration problems that stop a round from starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The root word pool had no usable entries
    NoRootWords,
    /// The dictionary cannot answer for the configured language
    UnsupportedLanguage(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRootWords => write!(f, "No root words available to start a round"),
            Self::UnsupportedLanguage(language) => {
                write!(f, "Dictionary does not support language '{language}'")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// One round of the game
///
/// The default value is the blank state before any round has started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
    streak: u32,
}

impl RoundState {
    /// Start a round from a randomly chosen root word
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if `candidates` has no non-blank entry.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::RoundState;
    ///
    /// let state = RoundState::start_round(&["Silkworm"]).unwrap();
    /// assert_eq!(state.root_word(), "silkworm");
    /// assert!(state.used_words().is_empty());
    /// assert_eq!((state.score(), state.streak()), (0, 0));
    ///
    /// let empty: [&str; 0] = [];
    /// assert!(RoundState::start_round(&empty).is_err());
    /// ```
    pub fn start_round<S: AsRef<str>>(candidates: &[S]) -> Result<Self, GameError> {
        Self::start_round_with(candidates, &mut rand::rng())
    }

    /// Start a round picking the root word with the given random source
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if `candidates` has no non-blank entry.
    pub fn start_round_with<S, R>(candidates: &[S], rng: &mut R) -> Result<Self, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let usable: Vec<&str> = candidates
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();

        let root = usable.choose(rng).ok_or(GameError::NoRootWords)?;

        Ok(Self::with_root(root))
    }

    /// Fresh round on a known root word
    #[must_use]
    pub fn with_root(root: &str) -> Self {
        Self {
            root_word: root.trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
            streak: 0,
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Whether `word` was already accepted this round
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Add an accepted word to the front of the list, bank its points, extend the streak
    #[must_use]
    pub fn record_acceptance(mut self, word: impl Into<String>, points: u32) -> Self {
        self.used_words.insert(0, word.into());
        self.score = self.score.saturating_add(points);
        self.streak = self.streak.saturating_add(1);
        self
    }

    #[must_use]
    pub fn reset_streak(mut self) -> Self {
        self.streak = 0;
        self
    }

    /// Apply the outcome of a submission
    ///
    /// Accepted words are recorded, streak-breaking rejections reset the streak, and
    /// everything else leaves the round untouched.
    #[must_use]
    pub fn apply(self, result: &SubmissionResult) -> Self {
        match result {
            SubmissionResult::Accepted { word, points } => {
                self.record_acceptance(word.clone(), *points)
            }
            rejected if rejected.resets_streak() => self.reset_streak(),
            _ => self,
        }
    }
}
