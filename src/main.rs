//! Word Scramble - CLI
//!
//! Anagram word game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{CheckConfig, check_words, run_simple},
    dictionary::WordListDictionary,
    engine::{CorpusFallback, EngineConfig, GameEngine},
    output::print_check_result,
    wordlists::{START_WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Anagram word game: spell as many words as you can from a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root-word corpus: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary language code
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,

    /// Use this root word instead of failing when the corpus is empty
    #[arg(long, global = true)]
    fallback_word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented game without TUI)
    Simple,

    /// Check candidate words against a fixed root word
    Check {
        /// The root word to spell from
        root: String,

        /// Candidate words to evaluate, in order
        words: Vec<String>,
    },
}

/// Load the root-word corpus based on the -w flag
fn load_start_words(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(loader::words_from_slice(START_WORDS)),
        path => Ok(loader::load_from_file(path)?),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary_mode: &str, language: &str) -> Result<WordListDictionary> {
    match dictionary_mode {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => Ok(WordListDictionary::load(path, language)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let start_words = load_start_words(&cli.wordlist)?;
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;

    let fallback = cli
        .fallback_word
        .clone()
        .map_or(CorpusFallback::Fail, CorpusFallback::UseDefault);
    let config = EngineConfig::new(cli.language.clone()).with_fallback(fallback);
    let language = cli.language.clone();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&start_words, dictionary, config),
        Commands::Simple => run_simple_command(&start_words, dictionary, config),
        Commands::Check { root, words } => run_check_command(&language, dictionary, &root, &words),
    }
}

fn run_play_command(
    start_words: &[String],
    dictionary: WordListDictionary,
    config: EngineConfig,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let engine = GameEngine::start(start_words, dictionary, config)?;
    let app = App::new(engine);
    run_tui(app)
}

fn run_simple_command(
    start_words: &[String],
    dictionary: WordListDictionary,
    config: EngineConfig,
) -> Result<()> {
    let mut engine = GameEngine::start(start_words, dictionary, config)?;
    run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(
    language: &str,
    dictionary: WordListDictionary,
    root: &str,
    words: &[String],
) -> Result<()> {
    let config = CheckConfig::new(root.to_string(), language.to_string());
    let result = check_words(&config, dictionary, words).map_err(|e| anyhow::anyhow!(e))?;

    print_check_result(&result);
    Ok(())
}
