//! Submission outcomes
//!
//! Every submitted string is classified into exactly one `SubmissionResult`.

use std::fmt;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Shorter than the minimum word length
    TooShort,
    /// Identical to the root word
    SameAsRoot,
    /// Already accepted earlier in this round
    AlreadyUsed,
    /// Needs letters the root word does not have
    NotPossible,
    /// Not recognized by the dictionary
    NotReal,
}

impl Rejection {
    /// Rules in the order they are evaluated; the first failure wins
    pub const PIPELINE: [Self; 5] = [
        Self::TooShort,
        Self::SameAsRoot,
        Self::AlreadyUsed,
        Self::NotPossible,
        Self::NotReal,
    ];

    /// Gameplay mistakes break the streak; input slips do not
    #[must_use]
    pub const fn resets_streak(self) -> bool {
        matches!(self, Self::AlreadyUsed | Self::NotPossible | Self::NotReal)
    }

    /// Short headline for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word is too short",
            Self::SameAsRoot => "Word is the same as the root",
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Explanation shown under the title
    ///
    /// `min_length` is the shortest word the current rules accept.
    #[must_use]
    pub fn message(self, root: &str, min_length: usize) -> String {
        match self {
            Self::TooShort => format!(
                "Write something longer than {} letters",
                min_length.saturating_sub(1)
            ),
            Self::SameAsRoot => "Be smarter than that!".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Classification of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Blank input; nothing happens
    Empty,
    /// Turned down for the given reason
    Rejected(Rejection),
    /// Valid word, worth `points`
    Accepted { word: String, points: u32 },
}

impl SubmissionResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Points earned, zero unless accepted
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Self::Accepted { points, .. } => *points,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn resets_streak(&self) -> bool {
        match self {
            Self::Rejected(reason) => reason.resets_streak(),
            _ => false,
        }
    }
}

/// Trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  LiStEn \n"), "listen");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
