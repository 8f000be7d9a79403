//! Wordle - CLI
//!
//! Word-guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_session::{
    commands::{check_guess, run_simple},
    game::{DEFAULT_ATTEMPTS, GameConfig},
    history::{HistorySink, JsonHistory},
    logging,
    output::{print_check_result, print_history},
    words::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word: green = right place, yellow = wrong place, gray = not in the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of attempts per game (clamped to 1-10)
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Accept guesses that are not in the dictionary
    #[arg(long, global = true)]
    no_existence_check: bool,

    /// Keep keys usable after they are known to be absent
    #[arg(long, global = true)]
    no_key_disable: bool,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// File where finished games are recorded
    #[arg(long, global = true, default_value = "wordle_history.json")]
    history_file: PathBuf,

    /// Player name shown in game and stored with each record
    #[arg(short, long, global = true, default_value = "Player", value_parser = parse_player)]
    player: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback one guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Show recorded games, newest first
    History,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig::with_attempts(self.attempts)
            .existence_check(!self.no_existence_check)
            .key_disable_on_incorrect(!self.no_key_disable)
    }
}

/// Player names must have something besides whitespace
fn parse_player(name: &str) -> std::result::Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("player name cannot be blank".to_string());
    }
    Ok(name.to_string())
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str, word_length: usize) -> Result<WordList> {
    let words = match wordlist_mode {
        "embedded" => WordList::embedded(word_length),
        path => WordList::load_from_file(path, word_length)
            .with_context(|| format!("failed to read word list {path}"))?,
    };
    anyhow::ensure!(
        !words.is_empty(),
        "word list '{wordlist_mode}' has no {word_length}-letter words"
    );
    Ok(words)
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => {
            let words = load_wordlist(&cli.wordlist, config.word_length)?;
            run_play_command(&words, config, &cli)
        }
        Some(Commands::Simple) => {
            let words = load_wordlist(&cli.wordlist, config.word_length)?;
            let mut history = JsonHistory::new(&cli.history_file);
            run_simple(&words, config, &cli.player, &mut history)
        }
        Some(Commands::Check { guess, target }) => {
            let row = check_guess(guess, target)?;
            print_check_result(&row);
            Ok(())
        }
        Some(Commands::History) => {
            let history = JsonHistory::new(&cli.history_file);
            let records = history
                .records()
                .with_context(|| format!("failed to read {}", history.path().display()))?;
            print_history(&records);
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, config: GameConfig, cli: &Cli) -> Result<()> {
    use wordle_session::interactive::{App, run_tui};

    let history = JsonHistory::new(&cli.history_file);
    let app = App::new(words, config, &cli.player, Box::new(history))?;
    run_tui(app)
}
