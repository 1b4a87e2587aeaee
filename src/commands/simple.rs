//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Reads submissions from any reader and writes
//! feedback to any writer, so it works over pipes as well as a terminal.

use crate::core::SubmissionResult;
use crate::dictionary::DictionaryOracle;
use crate::game::Game;
use crate::output::formatters::{format_round_summary, streak_flames};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Every line is a submission, except `:new` (start a new round), `:help` and
/// `:quit`. Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new round
/// cannot be started.
pub fn run_simple<O, R, W>(game: &mut Game<'_, O>, mut reader: R, mut writer: W) -> io::Result<()>
where
    O: DictionaryOracle,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(writer, "║                   Word Scramble - Simple Mode                ║")?;
    writeln!(writer, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        writer,
        "Make words from the letters of the root word ({}+ letters).",
        game.rules().min_length
    )?;
    writeln!(writer, "Commands: ':new' for a new round, ':help', ':quit' to exit\n")?;

    print_root(game, &mut writer)?;

    let mut line = String::new();
    loop {
        write!(writer, "> ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                writeln!(writer, "{}", format_round_summary(game.state()))?;
                game.new_round().map_err(io::Error::other)?;
                writeln!(writer, "\n🔄 New round started!")?;
                print_root(game, &mut writer)?;
            }
            ":help" | ":h" => {
                writeln!(writer, "Type a word and press Enter. ':new' starts over, ':quit' exits.")?;
            }
            input => {
                let result = game.submit(input);
                print_result(game, &result, &mut writer)?;
            }
        }
    }

    writeln!(writer, "{}", format_round_summary(game.state()))?;
    writeln!(writer, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_root<O: DictionaryOracle, W: Write>(game: &Game<'_, O>, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "Root word: {}\n",
        game.state().root_word().to_uppercase().bright_yellow().bold()
    )
}

fn print_result<O: DictionaryOracle, W: Write>(
    game: &Game<'_, O>,
    result: &SubmissionResult,
    writer: &mut W,
) -> io::Result<()> {
    let state = game.state();

    match result {
        SubmissionResult::Empty => Ok(()),
        SubmissionResult::Rejected(reason) => {
            writeln!(
                writer,
                "{} {}",
                format!("✗ {}:", reason.title()).red().bold(),
                reason.message(state.root_word(), game.rules().min_length)
            )?;
            if reason.resets_streak() {
                writeln!(writer, "  {}", "Streak lost!".bright_black())?;
            }
            Ok(())
        }
        SubmissionResult::Accepted { word, points } => writeln!(
            writer,
            "{} {} {}  score {}  streak {} {}",
            "✓".green().bold(),
            word.bright_white().bold(),
            format!("+{points}").green(),
            state.score(),
            state.streak(),
            streak_flames(state.streak())
        ),
    }
}
