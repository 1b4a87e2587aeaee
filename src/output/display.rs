//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{AnalysisResult, RootReport, SurveyStatistics};
use colored::Colorize;

/// How many words per line when listing an analysis
const WORDS_PER_LINE: usize = 6;

/// Print the result of analyzing a root word
///
/// With `show_all` every playable word is listed; otherwise only the longest.
pub fn print_analysis_result(result: &AnalysisResult, show_all: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Playable words:".bright_cyan().bold());
    println!("   Total:        {}", result.total_words());
    println!(
        "   Best round:   {}",
        format!("{} points", result.max_score).bright_yellow().bold()
    );

    if !result.longest.is_empty() {
        println!(
            "   Longest:      {} {}",
            length_badge(result.longest[0].chars().count()),
            result.longest.join(", ").green()
        );
    }

    if show_all && !result.words.is_empty() {
        println!("\n📖 {}", "All words:".bright_cyan().bold());
        for chunk in result.words.chunks(WORDS_PER_LINE) {
            let line: Vec<String> = chunk
                .iter()
                .map(|w| format!("{} {w:<9}", length_badge(w.chars().count())))
                .collect();
            println!("   {}", line.join(" "));
        }
    }
}

/// Print the statistics of a root word survey
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", stats.total_roots);
    println!(
        "   Average words:    {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    let max_count = stats.richest.first().map_or(0, |r| r.word_count);

    println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
    for report in &stats.richest {
        print_report(report, max_count);
    }

    println!("\n🪫 {}", "Poorest roots:".bright_cyan().bold());
    for report in &stats.poorest {
        print_report(report, max_count);
    }

    if !stats.unplayable.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Unplayable roots:".yellow().bold(),
            stats.unplayable.join(", ").red()
        );
    }
}

fn print_report(report: &RootReport, max_count: usize) {
    let bar = create_progress_bar(report.word_count as f64, max_count as f64, 30);
    println!(
        "   {:<10} {} {:4} words  max {:6} pts",
        report.root,
        bar.green(),
        report.word_count,
        report.max_score
    );
}
