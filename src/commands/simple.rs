//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use super::save_record;
use crate::error::GameError;
use crate::game::{GameConfig, GameSession, Ticker};
use crate::history::HistorySink;
use crate::output::{print_board, print_keyboard, print_summary};
use crate::words::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// target word can be drawn from the dictionary.
pub fn run_simple(
    words: &WordList,
    config: GameConfig,
    player: &str,
    history: &mut dyn HistorySink,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries, {player}.",
        config.word_length, config.attempt_cap
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new();
    session
        .start_from(words, config)
        .context("could not start a game")?;
    let mut ticker = Ticker::start(Instant::now());

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts() + 1,
            session.attempt_cap()
        );
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session
                    .reset_from(words, config)
                    .context("could not start a game")?;
                ticker = Ticker::start(Instant::now());
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        for _ in 0..ticker.due(Instant::now()) {
            session.tick();
        }

        if let Err(e) = enter_word(&mut session, &input) {
            println!("❌ {e}\n");
            continue;
        }

        let submission = match session.submit(words) {
            Ok(submission) => submission,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        print_board(session.rows(), session.attempt_cap());
        print_keyboard(session.keys());

        let Some(summary) = submission.summary else {
            continue;
        };

        ticker.cancel();
        print_summary(player, &summary);
        if let Err(e) = save_record(history, player, &summary) {
            println!("{}", format!("Could not save history: {e}").red());
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session
                    .reset_from(words, config)
                    .context("could not start a game")?;
                ticker = Ticker::start(Instant::now());
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Replace the current row with `input`, letter by letter
///
/// Letters already known to be absent are refused when the configuration
/// disables them.
fn enter_word(session: &mut GameSession, input: &str) -> Result<(), GameError> {
    while session.delete_letter().is_some() {}

    let disable = session.config().key_disable_on_incorrect;
    for letter in input.chars() {
        let letter = letter.to_ascii_uppercase();
        if session.keys().is_disabled(letter, disable) {
            while session.delete_letter().is_some() {}
            return Err(GameError::InvalidLetter(letter));
        }
        if let Err(e) = session.append_letter(letter) {
            while session.delete_letter().is_some() {}
            return Err(e);
        }
    }
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_word_fills_buffer() {
        let mut session = GameSession::started("crane", GameConfig::default()).unwrap();
        enter_word(&mut session, "slate").unwrap();
        assert_eq!(session.buffer(), &['S', 'L', 'A', 'T', 'E']);

        // Replaces, not appends
        enter_word(&mut session, "gra").unwrap();
        assert_eq!(session.buffer(), &['G', 'R', 'A']);
    }

    #[test]
    fn enter_word_rejects_long_input() {
        let mut session = GameSession::started("crane", GameConfig::default()).unwrap();
        assert_eq!(enter_word(&mut session, "cranes"), Err(GameError::RowFull));
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn enter_word_refuses_dead_letters() {
        let mut session = GameSession::started("crane", GameConfig::default()).unwrap();
        enter_word(&mut session, "split").unwrap();
        session.submit_row(false, |_| true).unwrap();

        assert_eq!(
            enter_word(&mut session, "spoon"),
            Err(GameError::InvalidLetter('S'))
        );

        let mut lenient = GameSession::started(
            "crane",
            GameConfig::default().key_disable_on_incorrect(false),
        )
        .unwrap();
        enter_word(&mut lenient, "split").unwrap();
        lenient.submit_row(false, |_| true).unwrap();
        assert!(enter_word(&mut lenient, "spoon").is_ok());
    }
}
