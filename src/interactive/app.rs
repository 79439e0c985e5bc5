//! TUI application state and logic

use crate::core::Secret;
use crate::game::{GameState, GameStatus, Intent};
use anyhow::Result;
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

/// How long the "too short" popup stays up before it auto-dismisses
const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

/// How often the event loop wakes up to check timers
const TICK_RATE: Duration = Duration::from_millis(100);

/// Session tallies across games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
///
/// Owns one [`GameState`] plus presentation-only concerns: the popup timer,
/// session statistics and the quit flag. The engine never sees any of these.
pub struct App {
    pub game: GameState,
    pub stats: Statistics,
    pub should_quit: bool,
    error_deadline: Option<Instant>,
}

impl App {
    #[must_use]
    pub fn new(secret: Secret, max_attempts: usize) -> Self {
        Self {
            game: GameState::new(secret, max_attempts),
            stats: Statistics::default(),
            should_quit: false,
            error_deadline: None,
        }
    }

    /// Send an intent to the engine and keep presentation state in sync
    pub fn dispatch(&mut self, intent: Intent) {
        let had_error = self.game.error().is_some();
        let was_in_progress = self.game.status() == GameStatus::InProgress;

        self.game = self.game.apply(intent);

        // The popup timer belongs to the UI: arm it when an error appears,
        // drop it as soon as the error is gone
        match self.game.error() {
            Some(_) if !had_error => self.error_deadline = Some(Instant::now() + ERROR_TIMEOUT),
            None => self.error_deadline = None,
            Some(_) => {}
        }

        if was_in_progress && self.game.status() != GameStatus::InProgress {
            self.stats.total_games += 1;
            if self.game.status() == GameStatus::Won {
                self.stats.games_won += 1;
            }
        }
    }

    pub fn new_game(&mut self) {
        self.dispatch(Intent::Reset);
    }

    /// Auto-dismiss the error once its popup has been up long enough
    fn tick(&mut self) {
        if let Some(deadline) = self.error_deadline
            && Instant::now() >= deadline
        {
            self.dispatch(Intent::DismissError);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.game.status() {
            GameStatus::InProgress => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.dispatch(Intent::Append(c)),
                KeyCode::Backspace => self.dispatch(Intent::Remove),
                KeyCode::Enter => {
                    // Submission is blocked while the error popup is up
                    if self.game.error().is_none() {
                        self.dispatch(Intent::Validate);
                    }
                }
                _ => {}
            },
            GameStatus::Won | GameStatus::Lost => match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Secret::new("bonjour").unwrap(), 5)
    }

    fn type_word(app: &mut App, word: &str) {
        let filled = app.game.current_row().map_or(0, crate::game::Attempt::filled_count);
        for c in word.chars().skip(filled) {
            app.dispatch(Intent::Append(c));
        }
    }

    #[test]
    fn dispatch_arms_error_timer_on_too_short() {
        let mut app = app();
        type_word(&mut app, "bon");
        app.dispatch(Intent::Validate);

        assert!(app.game.error().is_some());
        assert!(app.error_deadline.is_some());
    }

    #[test]
    fn dispatch_drops_error_timer_when_error_clears() {
        let mut app = app();
        type_word(&mut app, "bon");
        app.dispatch(Intent::Validate);
        app.dispatch(Intent::Append('j'));

        assert!(app.game.error().is_none());
        assert!(app.error_deadline.is_none());
    }

    #[test]
    fn stats_updated_on_win() {
        let mut app = app();
        type_word(&mut app, "bonjour");
        app.dispatch(Intent::Validate);

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn stats_updated_once_per_game() {
        let mut app = app();
        type_word(&mut app, "bonjour");
        app.dispatch(Intent::Validate);
        // Stray intents after the game ended change nothing
        app.dispatch(Intent::Validate);
        app.dispatch(Intent::Append('x'));

        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn stats_count_losses() {
        let mut app = app();
        for _ in 0..=5 {
            type_word(&mut app, "bonsoir");
            app.dispatch(Intent::Validate);
        }

        assert_eq!(app.game.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_preserves_stats() {
        let mut app = app();
        type_word(&mut app, "bonjour");
        app.dispatch(Intent::Validate);
        app.new_game();

        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert_eq!(app.game.current_attempt(), 0);
        assert_eq!(app.stats.total_games, 1);
    }
}
