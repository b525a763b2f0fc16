use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::pieces::PieceSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::One => "Player One",
            PlayerId::Two => "Player Two",
        }
    }
}

/// A participant: identity, display mark, turn counter and the pieces they
/// have placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    mark: char,
    turns: u32,
    pieces: PieceSet,
}

impl Player {
    pub fn new(id: PlayerId, mark: char) -> Self {
        Player {
            id,
            mark,
            turns: 0,
            pieces: PieceSet::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn mark(&self) -> char {
        self.mark
    }

    /// Number of pieces this player has placed.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    /// Record a placed piece and count the turn.
    pub(crate) fn record(&mut self, coord: Coordinate) {
        if self.pieces.insert(coord) {
            self.turns += 1;
        }
    }

    pub fn has_won(&self) -> bool {
        self.pieces.has_won()
    }
}
