//! Survey every root word
//!
//! Analyzes the whole root word pool and reports how playable each root is.

use super::analyze::analyze_root;
use crate::dictionary::WordListDictionary;
use crate::game::Rules;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::time::{Duration, Instant};

/// Playability of one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootReport {
    pub root: String,
    pub word_count: usize,
    pub max_score: u32,
}

/// Statistics over the surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub reports: Vec<RootReport>,
    pub average_words: f64,
    /// Top roots by playable word count
    pub richest: Vec<RootReport>,
    /// Bottom roots by playable word count
    pub poorest: Vec<RootReport>,
    /// Roots with nothing to play
    pub unplayable: Vec<String>,
    pub total_time: Duration,
}

const HIGHLIGHT_COUNT: usize = 5;

/// Analyze every root word (or the first `limit` of them)
#[must_use]
pub fn run_survey(
    root_words: &[String],
    dictionary: &WordListDictionary,
    rules: &Rules,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = root_words
        .iter()
        .take(limit.unwrap_or(root_words.len()))
        .collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut reports = Vec::with_capacity(roots.len());
    let mut unplayable = Vec::new();

    for root in roots {
        pb.set_message(root.clone());
        match analyze_root(root, dictionary, rules) {
            Ok(result) if result.words.is_empty() => unplayable.push(result.root),
            Ok(result) => reports.push(RootReport {
                word_count: result.total_words(),
                max_score: result.max_score,
                root: result.root,
            }),
            Err(e) => {
                warn!("Skipping root {root:?}: {e}");
                unplayable.push(root.clone());
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    let total_roots = reports.len() + unplayable.len();
    let average_words = if total_roots > 0 {
        reports.iter().map(|r| r.word_count).sum::<usize>() as f64 / total_roots as f64
    } else {
        0.0
    };

    let mut ranked = reports.clone();
    ranked.sort_by(|a, b| b.word_count.cmp(&a.word_count).then_with(|| a.root.cmp(&b.root)));
    let richest: Vec<RootReport> = ranked.iter().take(HIGHLIGHT_COUNT).cloned().collect();
    let poorest: Vec<RootReport> = ranked.iter().rev().take(HIGHLIGHT_COUNT).cloned().collect();

    SurveyStatistics {
        total_roots,
        reports,
        average_words,
        richest,
        poorest,
        unplayable,
        total_time,
    }
}
