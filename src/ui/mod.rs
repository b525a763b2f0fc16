//! Front ends for the engine: an interactive terminal view and a plain
//! line-based prompt. Both only validate input and draw; every rule lives in
//! [`crate::game`].

mod app;
mod game_view;
mod prompt;

pub use app::App;
pub use prompt::PromptShell;

use crate::game::{Board, Cell};

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on in the terminal view.
    pub start_column: usize,
    /// Clear the screen before each turn in the plain prompt.
    pub clear_screen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: 3,
            clear_screen: true,
        }
    }
}

/// The board as text, top row first, cells separated by two spaces.
pub fn board_lines(board: &Board, empty_mark: char) -> Vec<String> {
    board
        .rows()
        .rev()
        .map(|row| {
            row.iter()
                .map(|&cell| match cell {
                    Cell::Empty => empty_mark.to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
