//! Core domain types for the word game
//!
//! Pure types with no I/O: the letter multiset used for the spelling check and the
//! classification a submission ends up with.

mod letters;
mod outcome;

pub use letters::{LetterBag, is_possible};
pub use outcome::{Rejection, SubmissionResult, normalize};
