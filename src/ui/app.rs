use crate::config::AppConfig;
use crate::game::{GameSession, GameStatus, MoveError};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Which screen the application is showing.
enum Screen {
    Menu { selected: usize },
    Playing { session: GameSession, cursor: usize },
}

impl Screen {
    fn playing(rows: usize, cols: usize) -> Self {
        Screen::Playing {
            session: GameSession::new(rows, cols),
            // Start in the middle
            cursor: cols / 2,
        }
    }
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Create an app that opens on the board-size menu.
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::Menu { selected: 0 },
            should_quit: false,
            message: None,
        }
    }

    /// Create an app that skips the menu and starts a game directly.
    pub fn with_board(config: AppConfig, rows: usize, cols: usize) -> Self {
        App {
            config,
            screen: Screen::playing(rows, cols),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    *selected = selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected + 1 < self.config.board.presets.len() {
                        *selected += 1;
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    // Number keys pick and start a preset directly
                    let choice = (c as usize).wrapping_sub('1' as usize);
                    if choice < self.config.board.presets.len() {
                        let preset = &self.config.board.presets[choice];
                        self.screen = Screen::playing(preset.rows, preset.cols);
                    } else {
                        self.message = Some(format!(
                            "Invalid choice! Please enter 1-{}",
                            self.config.board.presets.len()
                        ));
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let preset = &self.config.board.presets[*selected];
                    let (rows, cols) = (preset.rows, preset.cols);
                    self.screen = Screen::playing(rows, cols);
                }
                _ => {}
            },
            Screen::Playing { session, cursor } => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Left => {
                    *cursor = cursor.saturating_sub(1);
                }
                KeyCode::Right => {
                    if *cursor + 1 < session.board().cols() {
                        *cursor += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.message = drop_piece(session, *cursor);
                }
                KeyCode::Char('n') => {
                    // Back to the size menu for a fresh round
                    self.screen = Screen::Menu { selected: 0 };
                }
                _ => {}
            },
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Menu { selected } => {
                super::menu_view::render(frame, &self.config.board.presets, *selected, &self.message)
            }
            Screen::Playing { session, cursor } => {
                super::game_view::render(frame, session, *cursor, &self.message)
            }
        }
    }
}

/// Drop the current piece in the selected column, returning the message to
/// show for the attempt, if any.
fn drop_piece(session: &mut GameSession, column: usize) -> Option<String> {
    match session.play(column) {
        Ok(_) => match session.status() {
            GameStatus::Won(piece) => Some(format!("Player {} wins!!!", piece.name())),
            GameStatus::Draw => Some("It's a draw!!!".to_string()),
            GameStatus::InProgress => None,
        },
        Err(MoveError::ColumnFull) => Some("Column is full! Please choose another column".to_string()),
        Err(MoveError::InvalidColumn) => Some("Invalid column!".to_string()),
        Err(MoveError::GameOver) => Some("Game over! Press 'n' for a new game.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Piece;

    #[test]
    fn test_drop_piece_reports_win() {
        let mut session = GameSession::new(6, 7);
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(1).unwrap();
        }
        let msg = drop_piece(&mut session, 0);
        assert_eq!(msg.as_deref(), Some("Player Red wins!!!"));
        assert_eq!(session.status(), GameStatus::Won(Piece::Red));
    }

    #[test]
    fn test_drop_piece_reports_full_column() {
        let mut session = GameSession::new(6, 7);
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(0).unwrap();
        }
        let msg = drop_piece(&mut session, 0);
        assert_eq!(
            msg.as_deref(),
            Some("Column is full! Please choose another column")
        );
    }

    #[test]
    fn test_drop_piece_after_game_over() {
        let mut session = GameSession::new(6, 7);
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(1).unwrap();
        }
        session.play(0).unwrap();
        let msg = drop_piece(&mut session, 3);
        assert_eq!(msg.as_deref(), Some("Game over! Press 'n' for a new game."));
    }

    #[test]
    fn test_drop_piece_quiet_while_in_progress() {
        let mut session = GameSession::new(6, 7);
        assert_eq!(drop_piece(&mut session, 3), None);
    }
}
