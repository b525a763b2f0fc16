use tracing::{debug, info, warn};

use super::coord::{Coordinate, COLS, RUN_LENGTH};
use super::player::{Player, PlayerId};
use super::Board;
use crate::config::GameConfig;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(PlayerId),
    /// The board filled up without a run of four.
    Draw,
}

/// Where the turn controller is between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForMove(PlayerId),
    GameOver(GameResult),
}

/// What a successful [`Game::play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placed: Coordinate,
    pub player: PlayerId,
    pub result: GameResult,
}

/// A single game session: owns the board and both players, and alternates
/// turns between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: [Player; 2],
    phase: Phase,
    moves: usize,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Game {
            config: config.clone(),
            board: Board::new(),
            players: [
                Player::new(PlayerId::One, config.mark_of(PlayerId::One)),
                Player::new(PlayerId::Two, config.mark_of(PlayerId::Two)),
            ],
            phase: Phase::WaitingForMove(config.first_player),
            moves: 0,
        }
    }

    /// Start over with the same players and marks.
    pub fn reset(&mut self) {
        *self = Game::new(&self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The player to move, or the player who made the last move once the game
    /// is over.
    pub fn current_player(&self) -> PlayerId {
        match self.phase {
            Phase::WaitingForMove(id) => id,
            Phase::GameOver(GameResult::Win(id)) => id,
            Phase::GameOver(_) => self.last_mover(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> GameResult {
        match self.phase {
            Phase::WaitingForMove(_) => GameResult::InProgress,
            Phase::GameOver(result) => result,
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Number of pieces placed so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Columns that still accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The four pieces that won the game, if it was won.
    pub fn winning_run(&self) -> Option<[Coordinate; RUN_LENGTH]> {
        match self.result() {
            GameResult::Win(id) => self.player(id).pieces().winning_run(),
            _ => None,
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A rejected move changes nothing: the same player is still to move.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let mover = match self.phase {
            Phase::WaitingForMove(id) => id,
            Phase::GameOver(_) => {
                warn!(column, "move attempted after game over");
                return Err(MoveError::GameOver);
            }
        };

        let player = &mut self.players[mover.index()];
        let placed = self.board.place(column, player.mark()).map_err(|err| {
            warn!(player = mover.name(), column, %err, "move rejected");
            err
        })?;

        player.record(placed);
        self.moves += 1;
        debug!(
            player = mover.name(),
            column = placed.column,
            row = placed.row,
            turn = player.turns(),
            "piece placed"
        );

        let result = if player.pieces().has_run_through(placed) {
            GameResult::Win(mover)
        } else if self.board.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        };

        self.phase = match result {
            GameResult::InProgress => Phase::WaitingForMove(mover.other()),
            finished => {
                info!(result = ?finished, moves = self.moves, "game over");
                Phase::GameOver(finished)
            }
        };

        Ok(MoveOutcome {
            placed,
            player: mover,
            result,
        })
    }

    fn last_mover(&self) -> PlayerId {
        // Players alternate, so an odd move count means the first player moved last
        if self.moves % 2 == 1 {
            self.config.first_player
        } else {
            self.config.first_player.other()
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(&GameConfig::default())
    }
}
