//! Word lists for the game
//!
//! Root words a round starts from and the dictionary behind the embedded oracle,
//! both compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
