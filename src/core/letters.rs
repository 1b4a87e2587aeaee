//! Letter multiset
//!
//! A `LetterBag` counts how many times each character appears in a word. A candidate
//! can be spelled from a root word when its bag fits inside the root's bag.

use rustc_hash::FxHashMap;

/// Multiset of characters with per-letter counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, u32>,
    len: usize,
}

impl LetterBag {
    /// Build a bag from every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterBag;
    ///
    /// let bag = LetterBag::new("letter");
    /// assert_eq!(bag.count('t'), 2);
    /// assert_eq!(bag.count('z'), 0);
    /// assert_eq!(bag.len(), 6);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// How many instances of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the bag
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove one instance of `letter`
    ///
    /// Returns `false` (and leaves the bag untouched) when no instance remains.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Multiset inclusion: every letter of `other` is available here at least as often
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.count(letter) >= needed)
    }
}

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Walks `candidate` left to right, consuming one matching letter from the root for
/// each character. Fails as soon as a character has nothing left to match. Both
/// words are compared as given, so callers lowercase them first.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("silk", "silkworm"));
/// assert!(is_possible("enlist", "listen"));
/// assert!(!is_possible("listens", "listen")); // only one 's' available
/// assert!(!is_possible("xyz", "listen"));
/// ```
#[must_use]
pub fn is_possible(candidate: &str, root: &str) -> bool {
    let mut available = LetterBag::new(root);
    candidate.chars().all(|letter| available.take(letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Count-based reference: for every character c, count(c, word) <= count(c, root)
    fn reference_is_possible(word: &str, root: &str) -> bool {
        let count = |text: &str, c: char| text.chars().filter(|&x| x == c).count();
        word.chars().all(|c| count(word, c) <= count(root, c))
    }

    fn random_word(rng: &mut StdRng, alphabet: &[u8], max_len: usize) -> String {
        let len = rng.random_range(0..=max_len);
        (0..len)
            .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
            .collect()
    }

    #[test]
    fn bag_counts_duplicates() {
        let bag = LetterBag::new("silkworm");
        assert_eq!(bag.len(), 8);
        assert_eq!(bag.count('s'), 1);
        assert_eq!(bag.count('w'), 1);

        let bag = LetterBag::new("teaspoon");
        assert_eq!(bag.count('o'), 2);
        assert_eq!(bag.count('e'), 1);
    }

    #[test]
    fn empty_bag() {
        let bag = LetterBag::new("");
        assert!(bag.is_empty());
        assert_eq!(bag.count('a'), 0);
    }

    #[test]
    fn take_consumes_one_instance() {
        let mut bag = LetterBag::new("toot");
        assert!(bag.take('t'));
        assert_eq!(bag.count('t'), 1);
        assert!(bag.take('t'));
        assert!(!bag.take('t'));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn take_missing_letter_leaves_bag_intact() {
        let mut bag = LetterBag::new("abc");
        assert!(!bag.take('z'));
        assert_eq!(bag.len(), 3);
    }

    #[test]
    fn contains_all_is_multiset_inclusion() {
        let root = LetterBag::new("listen");
        assert!(root.contains_all(&LetterBag::new("silent")));
        assert!(root.contains_all(&LetterBag::new("tin")));
        assert!(!root.contains_all(&LetterBag::new("listens")));
        assert!(!root.contains_all(&LetterBag::new("tilt")));
    }

    #[test]
    fn possible_subwords() {
        assert!(is_possible("silk", "silkworm"));
        assert!(is_possible("worm", "silkworm"));
        assert!(is_possible("milk", "silkworm"));
        assert!(is_possible("", "silkworm"));
    }

    #[test]
    fn impossible_when_letter_used_up() {
        assert!(!is_possible("listens", "listen"));
        assert!(!is_possible("mill", "silkworm"));
    }

    #[test]
    fn impossible_when_letter_absent() {
        assert!(!is_possible("xyz", "listen"));
        assert!(!is_possible("a", ""));
    }

    #[test]
    fn case_sensitive_as_given() {
        // Callers normalize; raw uppercase does not match lowercase letters
        assert!(!is_possible("SILK", "silkworm"));
    }

    #[test]
    fn matches_reference_on_random_words() {
        let mut rng = StdRng::seed_from_u64(0x5C4A_B1E);
        let alphabet = b"aeilnst";

        for _ in 0..5_000 {
            let root = random_word(&mut rng, alphabet, 9);
            let candidate = random_word(&mut rng, alphabet, 6);
            assert_eq!(
                is_possible(&candidate, &root),
                reference_is_possible(&candidate, &root),
                "candidate '{candidate}' root '{root}'"
            );
        }
    }

    #[test]
    fn bag_inclusion_agrees_with_is_possible() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet = b"abcde";

        for _ in 0..2_000 {
            let root = random_word(&mut rng, alphabet, 8);
            let candidate = random_word(&mut rng, alphabet, 8);
            let by_bag = LetterBag::new(&root).contains_all(&LetterBag::new(&candidate));
            assert_eq!(by_bag, is_possible(&candidate, &root));
        }
    }
}
