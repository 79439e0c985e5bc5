//! TUI rendering with ratatui

use super::app::App;
use crate::core::LetterMark;
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.game.status() == GameStatus::Lost {
        render_lose_screen(f, app, chunks[1]);
    } else {
        render_grid(f, app, chunks[1]);
    }

    render_status(f, app, chunks[2]);

    if app.game.status() == GameStatus::Won {
        render_win_modal(f, app);
    }

    if app.game.error().is_some() {
        render_error_popup(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟦 M O T U S 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = vec![Line::default()];

    for (index, row) in game.grid().iter().enumerate() {
        let is_current = index == game.current_attempt();
        let spans = match &game.feedback()[index] {
            Some(feedback) => row
                .cells()
                .iter()
                .zip(feedback.marks())
                .map(|(cell, mark)| scored_cell(cell.letter(), *mark))
                .collect::<Vec<_>>(),
            None => row
                .cells()
                .iter()
                .map(|cell| pending_cell(cell.letter(), is_current))
                .collect(),
        };

        let mut line = Vec::with_capacity(spans.len() * 2);
        for span in spans {
            line.push(span);
            line.push(Span::raw(" "));
        }
        lines.push(Line::from(line));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guess the word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

/// Cell of a submitted row, colored by its mark
fn scored_cell(letter: Option<u8>, mark: LetterMark) -> Span<'static> {
    let display = letter.map_or(' ', |l| l.to_ascii_uppercase() as char);
    let style = match mark {
        LetterMark::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterMark::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterMark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    Span::styled(format!(" {display} "), style.add_modifier(Modifier::BOLD))
}

/// Cell of an unsubmitted row
fn pending_cell(letter: Option<u8>, is_current: bool) -> Span<'static> {
    match letter {
        Some(l) => {
            let style = if is_current {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", l.to_ascii_uppercase() as char), style)
        }
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_lose_screen(f: &mut Frame, app: &App, area: Rect) {
    let answer = app.game.secret().text().to_uppercase();
    let content = vec![
        Line::default(),
        Line::from(Span::styled(
            "😔 Out of attempts!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                answer,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from("Press 'n' for a new game or 'q' to quit."),
    ];

    let screen = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Lost ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(screen, area);
}

fn render_win_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(40, 30, f.area());
    let attempts = app
        .game
        .feedback()
        .iter()
        .filter(|feedback| feedback.is_some())
        .count();

    let content = vec![
        Line::default(),
        Line::from(Span::styled(
            "🎉 You found it! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "Solved in {attempts} {}",
            if attempts == 1 { "guess" } else { "guesses" }
        )),
        Line::default(),
        Line::from("Press 'n' for a new game or 'q' to quit."),
    ];

    let modal = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Victory ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

fn render_error_popup(f: &mut Frame) {
    let area = centered_rect(36, 20, f.area());

    let popup = Paragraph::new(vec![
        Line::default(),
        Line::from("The word is too short!"),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Oops ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let game = &app.game;
    let rows = game.max_attempts() + 1;
    let attempts_text = format!(
        "Attempt: {}/{}",
        (game.current_attempt() + 1).min(rows),
        rows
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match game.status() {
        GameStatus::InProgress => "Type letters | Backspace: erase | Enter: submit | Esc: quit",
        GameStatus::Won | GameStatus::Lost => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Centered sub-rectangle taking the given percentages of the frame
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
