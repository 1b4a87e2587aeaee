//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-separated file
///
/// Each line is trimmed and lowercased. Blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);

    if words.is_empty() {
        warn!("Word list {} contains no words", path.display());
    } else {
        debug!("Loaded {} words from {}", words.len(), path.display());
    }

    Ok(words)
}

/// Split newline-separated text into normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Silkworm\n\n  teaspoon \n");
/// assert_eq!(words, vec!["silkworm", "teaspoon"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let input = &["silkworm", "teaspoon", "painters"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silkworm", "teaspoon", "painters"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_str_skips_blank_lines() {
        // A trailing newline must not produce an empty root word
        let words = words_from_str("silkworm\nteaspoon\n");
        assert_eq!(words.len(), 2);

        let words = words_from_str("\n\n   \n");
        assert!(words.is_empty());
    }

    #[test]
    fn words_from_str_normalizes() {
        let words = words_from_str("  SILKWORM\r\nTeaSpoon");
        assert_eq!(words, vec!["silkworm", "teaspoon"]);
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join("word_scramble_loader_test.txt");
        fs::write(&path, "elephant\nmaterial\n\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["elephant", "material"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/no/such/start.txt").is_err());
    }
}
