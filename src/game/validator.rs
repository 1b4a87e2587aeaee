//! Submission validation
//!
//! Classifies a submitted string against a round. Rules run in a fixed order and the
//! first one that fails decides the rejection. The dictionary is consulted last so
//! the cheaper checks can turn a word down without a lookup.

use super::state::RoundState;
use crate::core::{Rejection, SubmissionResult, is_possible, normalize};
use crate::dictionary::{DEFAULT_LANGUAGE, DictionaryOracle};
use log::debug;

/// Tunable scoring and length rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Shortest word that can be submitted
    pub min_length: usize,
    /// Points per letter, before the streak multiplier
    pub points_per_letter: u32,
}

impl Rules {
    #[must_use]
    pub const fn new(min_length: usize, points_per_letter: u32) -> Self {
        Self {
            min_length,
            points_per_letter,
        }
    }

    /// Classify `raw` against `state`
    ///
    /// Pure: the round is not modified. Callers apply the result themselves.
    pub fn validate<O>(
        &self,
        state: &RoundState,
        oracle: &O,
        language: &str,
        raw: &str,
    ) -> SubmissionResult
    where
        O: DictionaryOracle + ?Sized,
    {
        let candidate = normalize(raw);
        if candidate.is_empty() {
            return SubmissionResult::Empty;
        }

        let failed = Rejection::PIPELINE
            .into_iter()
            .find(|&rule| !self.passes(rule, state, oracle, language, &candidate));

        let result = match failed {
            Some(reason) => SubmissionResult::Rejected(reason),
            None => {
                let points = self.score(&candidate, state.streak().saturating_add(1));
                SubmissionResult::Accepted {
                    word: candidate,
                    points,
                }
            }
        };

        debug!("Submission {raw:?} on '{}': {result:?}", state.root_word());
        result
    }

    /// Points for `word` given the streak value after this acceptance
    ///
    /// Saturates at `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::Rules;
    ///
    /// let rules = Rules::default();
    /// assert_eq!(rules.score("silk", 1), 40);
    /// assert_eq!(rules.score("worm", 3), 120);
    /// ```
    #[must_use]
    pub fn score(&self, word: &str, new_streak: u32) -> u32 {
        let letters = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
        self.points_per_letter
            .saturating_mul(letters)
            .saturating_mul(new_streak)
    }

    fn passes<O>(
        &self,
        rule: Rejection,
        state: &RoundState,
        oracle: &O,
        language: &str,
        candidate: &str,
    ) -> bool
    where
        O: DictionaryOracle + ?Sized,
    {
        match rule {
            Rejection::TooShort => candidate.chars().count() >= self.min_length,
            Rejection::SameAsRoot => candidate != state.root_word(),
            Rejection::AlreadyUsed => !state.contains(candidate),
            Rejection::NotPossible => is_possible(candidate, state.root_word()),
            Rejection::NotReal => oracle.is_valid_word(candidate, language),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(3, 10)
    }
}

/// Classify `raw` with the default rules in the default language
///
/// # Examples
/// ```
/// use word_scramble::core::SubmissionResult;
/// use word_scramble::dictionary::from_fn;
/// use word_scramble::game::{RoundState, validate};
///
/// let state = RoundState::with_root("silkworm");
/// let oracle = from_fn(|_word, _language| true);
///
/// let result = validate(&state, &oracle, "Silk");
/// assert_eq!(
///     result,
///     SubmissionResult::Accepted { word: "silk".to_string(), points: 40 }
/// );
/// ```
pub fn validate<O>(state: &RoundState, oracle: &O, raw: &str) -> SubmissionResult
where
    O: DictionaryOracle + ?Sized,
{
    Rules::default().validate(state, oracle, DEFAULT_LANGUAGE, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{WordListDictionary, from_fn};
    use std::cell::Cell;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words(
            ["silk", "worm", "milk", "slow", "owl", "listen", "silent", "enlist", "tin"],
            "en",
        )
    }

    fn rejected(reason: Rejection) -> SubmissionResult {
        SubmissionResult::Rejected(reason)
    }

    #[test]
    fn accepts_subword() {
        let state = RoundState::with_root("silkworm");
        let result = validate(&state, &dictionary(), "silk");

        assert_eq!(
            result,
            SubmissionResult::Accepted {
                word: "silk".to_string(),
                points: 40,
            }
        );
    }

    #[test]
    fn blank_is_empty() {
        let state = RoundState::with_root("silkworm");
        assert_eq!(validate(&state, &dictionary(), ""), SubmissionResult::Empty);
        assert_eq!(validate(&state, &dictionary(), "  "), SubmissionResult::Empty);
        assert_eq!(validate(&state, &dictionary(), "\t\n"), SubmissionResult::Empty);
    }

    #[test]
    fn short_words_rejected() {
        let state = RoundState::with_root("silkworm");
        assert_eq!(validate(&state, &dictionary(), "si"), rejected(Rejection::TooShort));
        assert_eq!(validate(&state, &dictionary(), " s "), rejected(Rejection::TooShort));
    }

    #[test]
    fn too_short_wins_over_not_possible() {
        let state = RoundState::with_root("silkworm");
        assert_eq!(validate(&state, &dictionary(), "zz"), rejected(Rejection::TooShort));
    }

    #[test]
    fn root_word_rejected_case_insensitively() {
        let state = RoundState::with_root("listen");
        assert_eq!(
            validate(&state, &dictionary(), "LISTEN"),
            rejected(Rejection::SameAsRoot)
        );
        assert_eq!(
            validate(&state, &dictionary(), " Listen "),
            rejected(Rejection::SameAsRoot)
        );
    }

    #[test]
    fn anagram_of_root_is_not_same_as_root() {
        let state = RoundState::with_root("listen");
        assert!(validate(&state, &dictionary(), "silent").is_accepted());
    }

    #[test]
    fn used_word_rejected() {
        let state = RoundState::with_root("silkworm").record_acceptance("silk", 40);
        assert_eq!(
            validate(&state, &dictionary(), "SILK"),
            rejected(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn repeated_letter_not_possible() {
        let state = RoundState::with_root("listen");
        assert_eq!(
            validate(&state, &dictionary(), "listens"),
            rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn possibility_checked_before_reality() {
        let state = RoundState::with_root("listen");
        assert_eq!(
            validate(&state, &dictionary(), "xyz"),
            rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn unknown_word_not_real() {
        let state = RoundState::with_root("silkworm");
        assert_eq!(
            validate(&state, &dictionary(), "lisk"),
            rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn oracle_only_called_when_cheap_rules_pass() {
        let calls = Cell::new(0);
        let oracle = from_fn(|_word, _language| {
            calls.set(calls.get() + 1);
            true
        });
        let state = RoundState::with_root("listen").record_acceptance("tin", 30);

        for raw in ["", "li", "listen", "tin", "xyz"] {
            assert!(!validate(&state, &oracle, raw).is_accepted());
        }
        assert_eq!(calls.get(), 0);

        assert!(validate(&state, &oracle, "silent").is_accepted());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn oracle_receives_normalized_word_and_language() {
        let oracle = from_fn(|word, language| word == "silk" && language == "en");
        let state = RoundState::with_root("silkworm");
        assert!(validate(&state, &oracle, "  SiLk ").is_accepted());
    }

    #[test]
    fn language_is_forwarded() {
        let state = RoundState::with_root("silkworm");
        let rules = Rules::default();
        assert_eq!(
            rules.validate(&state, &dictionary(), "fr", "silk"),
            rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn score_uses_streak_after_increment() {
        let state = RoundState::with_root("silkworm")
            .record_acceptance("silk", 40)
            .record_acceptance("worm", 80);

        assert_eq!(validate(&state, &dictionary(), "milk").points(), 10 * 4 * 3);
        assert_eq!(validate(&state, &dictionary(), "owl").points(), 10 * 3 * 3);
    }

    #[test]
    fn validation_is_pure() {
        let state = RoundState::with_root("listen").record_acceptance("tin", 30);
        let snapshot = state.clone();

        let first = validate(&state, &dictionary(), "xyz");
        let second = validate(&state, &dictionary(), "xyz");

        assert_eq!(first, second);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn custom_rules() {
        let rules = Rules::new(4, 5);
        let state = RoundState::with_root("silkworm");

        assert_eq!(
            rules.validate(&state, &dictionary(), "en", "owl"),
            rejected(Rejection::TooShort)
        );
        assert_eq!(rules.validate(&state, &dictionary(), "en", "silk").points(), 20);
    }

    #[test]
    fn huge_points_per_letter_saturates() {
        let rules = Rules::new(3, 2_000_000_000);
        assert_eq!(rules.score("silk", 1), u32::MAX);
        assert_eq!(rules.score("silk", u32::MAX), u32::MAX);

        let state = RoundState::with_root("silkworm");
        assert_eq!(
            rules.validate(&state, &dictionary(), "en", "silk").points(),
            u32::MAX
        );
    }

    #[test]
    fn huge_points_per_letter_through_game() {
        let roots = vec!["silkworm".to_string()];
        let oracle = from_fn(|_word, _language| true);
        let mut game =
            crate::game::Game::with_options(&roots, oracle, Rules::new(3, 2_000_000_000), "en")
                .unwrap();

        assert_eq!(game.submit("silk").points(), u32::MAX);
        assert_eq!(game.submit("worm").points(), u32::MAX);
        assert_eq!(game.state().score(), u32::MAX);
        assert_eq!(game.state().streak(), 2);
    }

    #[test]
    fn default_rules() {
        assert_eq!(Rules::default(), Rules::new(3, 10));
    }
}
