//! Word Scramble - CLI
//!
//! Play rounds in a TUI or a plain line-based mode, or inspect how playable root
//! words are.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use word_scramble::{
    commands::{analyze_root, run_simple, run_survey},
    dictionary::WordListDictionary,
    game::{Game, Rules},
    output::{print_analysis_result, print_survey_statistics},
    wordlists::{ROOT_WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Dictionary: 'embedded' (default, English) or path to a newline-separated file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary language code
    #[arg(long, global = true, default_value = "en")]
    language: String,

    /// Shortest word accepted
    #[arg(long, global = true, default_value_t = 3)]
    min_length: usize,

    /// Points per letter before the streak multiplier
    #[arg(long, global = true, default_value_t = 10)]
    points: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// List every playable word for a root word
    Analyze {
        /// The root word to analyze
        root: String,

        /// List all playable words, not just the longest
        #[arg(short, long)]
        all: bool,
    },

    /// Analyze every root word in the pool
    Survey {
        /// Limit number of roots to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the root word pool based on the -w flag
fn load_root_words(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(words_from_slice(ROOT_WORDS)),
        path => load_from_file(path)
            .with_context(|| format!("Failed to load root words from '{path}'")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str, language: &str) -> Result<WordListDictionary> {
    match source {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => WordListDictionary::from_file(path, language)
            .with_context(|| format!("Failed to load dictionary from '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let root_words = load_root_words(&cli.words)?;
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    let rules = Rules::new(cli.min_length, cli.points);
    info!(
        "Loaded {} root words and {} dictionary words",
        root_words.len(),
        dictionary.len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&root_words, dictionary, rules, &cli.language),
        Commands::Simple => run_simple_command(&root_words, dictionary, rules, &cli.language),
        Commands::Analyze { root, all } => run_analyze_command(&root, all, &dictionary, &rules),
        Commands::Survey { limit } => {
            let stats = run_survey(&root_words, &dictionary, &rules, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(
    root_words: &[String],
    dictionary: WordListDictionary,
    rules: Rules,
    language: &str,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = Game::with_options(root_words, dictionary, rules, language)?;
    run_tui(App::new(game))
}

fn run_simple_command(
    root_words: &[String],
    dictionary: WordListDictionary,
    rules: Rules,
    language: &str,
) -> Result<()> {
    let mut game = Game::with_options(root_words, dictionary, rules, language)?;
    let stdin = std::io::stdin();
    run_simple(&mut game, stdin.lock(), std::io::stdout())?;
    Ok(())
}

fn run_analyze_command(
    root: &str,
    all: bool,
    dictionary: &WordListDictionary,
    rules: &Rules,
) -> Result<()> {
    let result = analyze_root(root, dictionary, rules).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result, all);
    Ok(())
}
