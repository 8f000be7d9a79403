//! TUI rendering with ratatui
//!
//! Letter grid, on-screen keyboard and status panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Tag;
use crate::game::SessionState;
use crate::output::{KEYBOARD_ROWS, format_elapsed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Grid + side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let status = match app.session.state() {
        SessionState::Won => Span::styled(
            "YOU WON!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        SessionState::Lost => Span::styled(
            "YOU LOST!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        SessionState::Idle | SessionState::InProgress => Span::raw(format!(
            "Current Player: {} | Elapsed Time: {}",
            app.player,
            format_elapsed(app.session.elapsed())
        )),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORDLE  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        status,
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

const fn tag_style(tag: Tag) -> Style {
    let bg = match tag {
        Tag::Correct => Color::Green,
        Tag::Present => Color::Yellow,
        Tag::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let width = session.word_length();
    let empty_style = Style::default().fg(Color::White).bg(Color::Black);
    let typing_style = Style::default()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines = Vec::with_capacity(session.attempt_cap() * 2);
    for index in 0..session.attempt_cap() {
        let mut spans = Vec::with_capacity(width * 2);

        if let Some(row) = session.rows().get(index) {
            for &(letter, tag) in row.cells() {
                spans.push(Span::styled(format!(" {letter} "), tag_style(tag)));
                spans.push(Span::raw(" "));
            }
        } else if index == session.rows().len() && session.state() == SessionState::InProgress {
            for col in 0..width {
                let cell = session
                    .buffer()
                    .get(col)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(cell, typing_style));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..width {
                spans.push(Span::styled(" · ", empty_style));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Attempt {}/{} ",
                (session.attempts() + 1).min(session.attempt_cap()),
                session.attempt_cap()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win Rate: {win_rate:.0}%",
            app.stats.total_games, app.stats.games_won
        )),
        Line::from(format!(
            "Tries left: {} | Dictionary check: {}",
            app.session.remaining_attempts(),
            if app.config.existence_check {
                "on"
            } else {
                "off"
            }
        )),
    ];

    let stats = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn key_style(app: &App, letter: char) -> Style {
    match app.session.keys().get(letter) {
        Some(tag) if app.is_key_disabled(letter) => tag_style(tag).fg(Color::Gray),
        Some(tag) => tag_style(tag),
        None => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled(
                    " Enter ",
                    Style::default().fg(Color::Black).bg(Color::Green),
                ));
                spans.push(Span::raw(" "));
            }
            for letter in row.chars() {
                spans.push(Span::styled(format!(" {letter} "), key_style(app, letter)));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled(
                    " Delete ",
                    Style::default().fg(Color::White).bg(Color::Red),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "n/Enter: Play Again | q/Esc: Quit",
        InputMode::Playing => "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
