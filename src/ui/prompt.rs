//! Line-based front end: prints the board and reads 1-based column numbers.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tracing::{debug, info, warn};

use super::board_lines;
use crate::error::MoveError;
use crate::game::{Game, GameResult, MoveOutcome, COLS};

const RULE_WIDTH: usize = 80;

pub struct PromptShell<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> PromptShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptShell {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each turn.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until someone wins, the board fills, or input runs out. Returns the
    /// result at that point, which is `InProgress` if input ended early.
    pub fn run(&mut self, game: &mut Game) -> io::Result<GameResult> {
        while !game.is_over() {
            self.draw_turn(game)?;

            let Some(outcome) = self.next_move(game)? else {
                info!(moves = game.move_count(), "input closed, abandoning game");
                return Ok(game.result());
            };
            debug!(
                column = outcome.placed.column,
                row = outcome.placed.row,
                "move accepted"
            );
        }

        self.draw_board(game)?;
        match game.result() {
            GameResult::Win(id) => {
                writeln!(self.output, "Player {} wins!", game.player(id).mark())?
            }
            GameResult::Draw => writeln!(self.output, "The board is full. It's a draw!")?,
            GameResult::InProgress => {}
        }
        self.output.flush()?;
        Ok(game.result())
    }

    fn draw_turn(&mut self, game: &Game) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        let mark = game.player(game.current_player()).mark();

        self.rule()?;
        writeln!(self.output, "It is now Player {mark}'s turn.")?;
        self.draw_board(game)?;
        self.rule()?;
        writeln!(self.output, "Please choose a column to place a piece.")?;
        writeln!(
            self.output,
            "Make sure that the column is not full and is between 1 and {COLS}."
        )?;
        self.output.flush()
    }

    /// Keep asking until a move is accepted. `None` means end of input.
    fn next_move(&mut self, game: &mut Game) -> io::Result<Option<MoveOutcome>> {
        loop {
            let Some(column) = self.read_column()? else {
                return Ok(None);
            };

            match game.play(column) {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(MoveError::ColumnFull { column }) => {
                    writeln!(self.output, "Column {} is full. Try again.", column + 1)?;
                }
                Err(err) => {
                    // read_column range-checks and run stops at game over
                    warn!(column, %err, "prompt move rejected unexpectedly");
                    return Err(io::Error::new(io::ErrorKind::Other, err));
                }
            }
        }
    }

    /// Read lines until one holds a column number in 1..=COLS; returns it zero-based.
    fn read_column(&mut self) -> io::Result<Option<usize>> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            // Undecodable bytes become U+FFFD and fail the parse below
            let line = String::from_utf8_lossy(&buf);
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match text.parse::<i64>() {
                Ok(n) if (1..=COLS as i64).contains(&n) => return Ok(Some(n as usize - 1)),
                Ok(n) => writeln!(
                    self.output,
                    "Column {n} is not a valid column between 1 and {COLS}. Try again."
                )?,
                Err(_) => writeln!(self.output, "'{text}' is not a column number. Try again.")?,
            }
        }
    }

    fn draw_board(&mut self, game: &Game) -> io::Result<()> {
        for line in board_lines(game.board(), game.config().empty_mark) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PlayerId, ROWS};
    use std::io::Cursor;

    fn play_script(script: &str) -> (GameResult, Game, String) {
        play_bytes(script.as_bytes())
    }

    fn play_bytes(script: &[u8]) -> (GameResult, Game, String) {
        let mut game = Game::default();
        let mut shell = PromptShell::new(Cursor::new(script.to_vec()), Vec::new());
        let result = shell.run(&mut game).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (result, game, output)
    }

    #[test]
    fn test_vertical_win_through_prompt() {
        let (result, game, output) = play_script("3\n6\n3\n6\n3\n6\n3\n");
        assert_eq!(result, GameResult::Win(PlayerId::One));
        assert_eq!(game.board().column_height(2), 4);
        assert!(output.contains("It is now Player @'s turn."));
        assert!(output.contains("It is now Player $'s turn."));
        assert!(output.ends_with("Player @ wins!\n"));
    }

    #[test]
    fn test_out_of_range_and_garbage_are_reprompted() {
        let (result, game, output) = play_script("0\n8\nabc\n\n1\n");
        assert_eq!(result, GameResult::InProgress);
        assert_eq!(game.move_count(), 1);
        assert!(output.contains("Column 0 is not a valid column between 1 and 7. Try again."));
        assert!(output.contains("Column 8 is not a valid column between 1 and 7. Try again."));
        assert!(output.contains("'abc' is not a column number. Try again."));
    }

    #[test]
    fn test_invalid_utf8_is_reprompted() {
        let (result, game, output) = play_bytes(&[0xff, 0xfe, b'\n', b'1', b'\n']);
        assert_eq!(result, GameResult::InProgress);
        assert_eq!(game.move_count(), 1);
        assert!(output.contains("is not a column number. Try again."));
    }

    #[test]
    fn test_move_after_game_over_is_an_error() {
        let mut game = Game::default();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.play(col).unwrap();
        }
        let mut shell = PromptShell::new(Cursor::new(b"3\n".to_vec()), Vec::new());

        let err = shell.next_move(&mut game).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "the game is already over");
    }

    #[test]
    fn test_full_column_is_reprompted_without_losing_turn() {
        let mut script = "1\n".repeat(ROWS);
        script.push_str("1\n2\n");
        let (_, game, output) = play_script(&script);

        assert!(output.contains("Column 1 is full. Try again."));
        assert_eq!(game.board().column_height(0), ROWS);
        assert_eq!(game.board().column_height(1), 1);
        // Six pieces in column 1, then the rejected move, then One plays column 2
        assert_eq!(game.player(PlayerId::One).turns(), 4);
        assert_eq!(game.current_player(), PlayerId::Two);
    }

    #[test]
    fn test_end_of_input_abandons_game() {
        let (result, game, _) = play_script("");
        assert_eq!(result, GameResult::InProgress);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_clear_screen_emits_escape_codes() {
        let mut game = Game::default();
        let mut shell =
            PromptShell::new(Cursor::new(String::new()), Vec::new()).with_clear_screen(true);
        shell.run(&mut game).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.starts_with('\u{1b}'));
    }
}
