//! Word Scramble
//!
//! A word formation game: every round picks a root word, and the player finds words
//! spelled from its letters. Each accepted word scores ten points per letter times
//! the current streak; a gameplay mistake breaks the streak.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, SubmissionResult};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{RoundState, validate};
//!
//! let dictionary = WordListDictionary::embedded();
//! let state = RoundState::with_root("silkworm");
//!
//! // Classify a submission
//! let result = validate(&state, &dictionary, "silk");
//! assert_eq!(result.points(), 40);
//!
//! // Apply it to the round
//! let state = state.apply(&result);
//! assert_eq!(state.streak(), 1);
//!
//! // Using it twice breaks the streak
//! let again = validate(&state, &dictionary, "silk");
//! assert_eq!(again, SubmissionResult::Rejected(Rejection::AlreadyUsed));
//! assert_eq!(state.apply(&again).streak(), 0);
//! ```

// Core domain types
pub mod core;

// Rounds, validation and scoring
pub mod game;

// Dictionary oracles
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
