//! Formatting utilities for terminal output

use crate::game::RoundState;

/// Circled number for a word length, like the badge next to each used word
#[must_use]
pub fn length_badge(length: usize) -> String {
    const CIRCLED: [char; 20] = [
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱', '⑲',
        '⑳',
    ];

    match length {
        1..=20 => CIRCLED[length - 1].to_string(),
        _ => format!("({length})"),
    }
}

/// One flame per streak step, capped so long streaks stay on one line
#[must_use]
pub fn streak_flames(streak: u32) -> String {
    const MAX_FLAMES: usize = 5;
    let flames = (streak as usize).min(MAX_FLAMES);
    let mut result = "🔥".repeat(flames);
    if streak as usize > MAX_FLAMES {
        result.push('+');
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Words, score and streak of a round on one line
#[must_use]
pub fn format_round_summary(state: &RoundState) -> String {
    format!(
        "Round '{}': {} words | score {} | streak {}",
        state.root_word(),
        state.used_words().len(),
        state.score(),
        state.streak()
    )
}
