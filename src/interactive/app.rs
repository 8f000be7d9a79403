//! TUI application state and logic

use crate::commands::save_record;
use crate::error::GameError;
use crate::game::{GameConfig, GameSession, GameSummary, Outcome, Ticker};
use crate::history::HistorySink;
use crate::output::format_elapsed;
use crate::words::WordList;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Poll timeout used when no tick is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub config: GameConfig,
    pub player: String,
    pub session: GameSession,
    pub ticker: Ticker,
    pub history: Box<dyn HistorySink + 'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts (index 1..=10)
    pub guess_distribution: [usize; 11],
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no target word.
    pub fn new(
        words: &'a WordList,
        config: GameConfig,
        player: &str,
        history: Box<dyn HistorySink + 'a>,
    ) -> Result<Self> {
        let mut session = GameSession::new();
        session
            .start_from(words, config)
            .context("could not start a game")?;

        Ok(Self {
            words,
            config,
            player: player.to_string(),
            session,
            ticker: Ticker::start(Instant::now()),
            history,
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. Good luck, {player}!",
                    config.word_length, config.attempt_cap
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        })
    }

    /// Type a letter, ignoring keys known to be absent when configured to
    pub fn handle_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        if self.is_key_disabled(letter) {
            return;
        }
        match self.session.append_letter(letter) {
            Ok(_) | Err(GameError::RowFull) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_delete(&mut self) {
        self.session.delete_letter();
    }

    pub fn handle_enter(&mut self) {
        match self.session.submit(self.words) {
            Ok(submission) => {
                if let Some(summary) = submission.summary {
                    self.finish(&summary);
                } else {
                    let left = self.session.remaining_attempts();
                    self.add_message(
                        &format!(
                            "{} {}",
                            submission.row.to_emoji(),
                            if left == 1 {
                                "1 try left".to_string()
                            } else {
                                format!("{left} tries left")
                            }
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, summary: &GameSummary) {
        self.ticker.cancel();
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        match summary.outcome {
            Outcome::Won => {
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(summary.attempts) {
                    *slot += 1;
                }
                let celebration = match summary.attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!(
                        "Congratulations, {}! Time {} | Attempts {}",
                        self.player,
                        format_elapsed(summary.elapsed),
                        summary.attempts
                    ),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost => {
                self.add_message(
                    &format!("Game over! The correct word was {}.", summary.target),
                    MessageStyle::Error,
                );
            }
        }

        if let Err(e) = save_record(self.history.as_mut(), &self.player, summary) {
            self.add_message(&format!("Could not save history: {e}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        match self.session.reset_from(self.words, self.config) {
            Ok(()) => {
                self.ticker = Ticker::start(Instant::now());
                self.input_mode = InputMode::Playing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Deliver the ticks due at `now`, then act on `key`
    ///
    /// A key that ends the game still counts the ticks due before it.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.on_tick(now);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.handle_letter(c),
                KeyCode::Backspace | KeyCode::Delete => self.handle_delete(),
                KeyCode::Enter => self.handle_enter(),
                _ => {}
            },
        }
    }

    /// Deliver every tick that is due
    pub fn on_tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.due(now) {
            self.session.tick();
        }
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.until_next(now).unwrap_or(IDLE_POLL)
    }

    #[must_use]
    pub fn is_key_disabled(&self, letter: char) -> bool {
        self.session
            .keys()
            .is_disabled(letter, self.config.key_disable_on_incorrect)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let ready = event::poll(app.poll_timeout(Instant::now()))?;
        let now = Instant::now();

        if ready
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, now);
        } else {
            app.on_tick(now);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;
    use crate::history::MemoryHistory;
    use crate::words::loader::words_from_slice;

    fn single_word_list() -> WordList {
        WordList::from_words(words_from_slice(&["crane"], 5))
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_letter(c);
        }
    }

    #[test]
    fn app_plays_to_a_win() {
        let words = single_word_list();
        let mut app = App::new(
            &words,
            GameConfig::default(),
            "Ada",
            Box::new(MemoryHistory::default()),
        )
        .unwrap();

        type_word(&mut app, "crane");
        app.handle_enter();

        assert_eq!(app.session.state(), SessionState::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(!app.ticker.is_active());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.history.records().unwrap().len(), 1);
    }

    #[test]
    fn app_reports_unknown_words() {
        let words = single_word_list();
        let mut app = App::new(
            &words,
            GameConfig::default(),
            "Ada",
            Box::new(MemoryHistory::default()),
        )
        .unwrap();

        type_word(&mut app, "slate");
        app.handle_enter();

        assert_eq!(app.session.attempts(), 0);
        let last = app.messages.last().unwrap();
        assert!(matches!(last.style, MessageStyle::Error));
        assert!(last.text.contains("SLATE"));
    }

    #[test]
    fn app_ignores_dead_keys() {
        let words = single_word_list();
        let config = GameConfig::default().existence_check(false);
        let mut app = App::new(&words, config, "Ada", Box::new(MemoryHistory::default())).unwrap();

        type_word(&mut app, "split");
        app.handle_enter();
        app.handle_letter('s');
        assert!(app.session.buffer().is_empty());
        app.handle_letter('c');
        assert_eq!(app.session.buffer(), &['C']);
    }

    #[test]
    fn app_ticks_and_restarts() {
        let words = single_word_list();
        let mut app = App::new(
            &words,
            GameConfig::with_attempts(1).existence_check(false),
            "Ada",
            Box::new(MemoryHistory::default()),
        )
        .unwrap();

        let start = Instant::now();
        app.ticker = Ticker::start(start);
        app.on_tick(start + Duration::from_millis(3_100));
        assert_eq!(app.session.elapsed(), Duration::from_secs(3));

        type_word(&mut app, "slate");
        app.handle_enter();
        assert_eq!(app.session.state(), SessionState::Lost);

        // No ticks once the game is over
        app.on_tick(start + Duration::from_secs(60));
        assert_eq!(app.session.elapsed(), Duration::from_secs(3));

        app.new_game();
        assert_eq!(app.session.state(), SessionState::InProgress);
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.session.elapsed(), Duration::ZERO);
    }

    #[test]
    fn winning_key_keeps_ticks_already_due() {
        let words = single_word_list();
        let mut app = App::new(
            &words,
            GameConfig::default(),
            "Ada",
            Box::new(MemoryHistory::default()),
        )
        .unwrap();

        let start = Instant::now();
        app.ticker = Ticker::start(start);
        type_word(&mut app, "crane");

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(enter, start + Duration::from_millis(2_500));

        assert_eq!(app.session.state(), SessionState::Won);
        assert_eq!(app.session.elapsed(), Duration::from_secs(2));
        assert_eq!(
            app.session.summary().map(|s| s.elapsed),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn keys_drive_game_over_mode() {
        let words = single_word_list();
        let mut app = App::new(
            &words,
            GameConfig::with_attempts(1).existence_check(false),
            "Ada",
            Box::new(MemoryHistory::default()),
        )
        .unwrap();
        let now = Instant::now();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        for c in "slate".chars() {
            app.handle_key(press(KeyCode::Char(c)), now);
        }
        app.handle_key(press(KeyCode::Backspace), now);
        assert_eq!(app.session.buffer().len(), 4);
        app.handle_key(press(KeyCode::Char('e')), now);
        app.handle_key(press(KeyCode::Enter), now);
        assert_eq!(app.input_mode, InputMode::GameOver);

        app.handle_key(press(KeyCode::Char('n')), now);
        assert_eq!(app.input_mode, InputMode::Playing);
        app.handle_key(press(KeyCode::Esc), now);
        assert!(app.should_quit);
    }
}
