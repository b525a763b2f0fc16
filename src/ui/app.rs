use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{Game, GameResult, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    game: Game,
    start_column: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game: Game::new(&config.game),
            start_column: config.ui.start_column,
            selected_column: config.ui.start_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("quit requested");
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Number keys pick a column directly, 1-based like the labels
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
                info!("game reset");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.play(self.selected_column) {
            Ok(outcome) => {
                self.message = match outcome.result {
                    GameResult::Win(player) => Some(format!(
                        "{} ({}) wins!",
                        player.name(),
                        self.game.player(player).mark()
                    )),
                    GameResult::Draw => Some("It's a draw!".to_string()),
                    GameResult::InProgress => None,
                };
            }
            Err(MoveError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full. Try again.", column + 1));
            }
            Err(MoveError::InvalidColumn { column }) => {
                self.message = Some(format!("Column {} is not on the board.", column + 1));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
