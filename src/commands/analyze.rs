//! Root word analysis command
//!
//! Finds every dictionary word that can be played against a root word and the best
//! score a perfect round could reach.

use crate::core::LetterBag;
use crate::dictionary::WordListDictionary;
use crate::game::Rules;
use rayon::prelude::*;

/// Result of analyzing a root word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub root: String,
    /// Playable words, longest first, then alphabetical
    pub words: Vec<String>,
    pub longest: Vec<String>,
    /// Score for playing every word in one unbroken streak, shortest first
    pub max_score: u32,
}

impl AnalysisResult {
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}

/// Analyze a root word against a dictionary
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_root(
    root: &str,
    dictionary: &WordListDictionary,
    rules: &Rules,
) -> Result<AnalysisResult, String> {
    let root = root.trim().to_lowercase();
    if root.is_empty() {
        return Err("Root word is empty".to_string());
    }

    // One bag for the root, shared by every dictionary entry
    let root_bag = LetterBag::new(&root);
    let entries: Vec<&str> = dictionary.words().collect();
    let mut words: Vec<String> = entries
        .par_iter()
        .filter(|&&word| {
            word.chars().count() >= rules.min_length
                && word != root
                && root_bag.contains_all(&LetterBag::new(word))
        })
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let longest_len = words.first().map_or(0, |w| w.chars().count());
    let longest = words
        .iter()
        .take_while(|w| w.chars().count() == longest_len)
        .cloned()
        .collect();

    let max_score = best_round_score(&words, rules);

    Ok(AnalysisResult {
        root,
        words,
        longest,
        max_score,
    })
}

/// Highest total reachable by playing `words` in a single streak
///
/// The streak multiplier grows by one per word, so the longest words should come
/// last.
fn best_round_score(words: &[String], rules: &Rules) -> u32 {
    let mut by_length: Vec<&String> = words.iter().collect();
    by_length.sort_by_key(|w| w.chars().count());

    by_length
        .iter()
        .zip(1u32..)
        .map(|(word, streak)| rules.score(word, streak))
        .fold(0, u32::saturating_add)
}
