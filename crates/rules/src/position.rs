use chess::Board;
use chess::Color;
use std::str::FromStr;

/// Complete authoritative game state at a point in time.
///
/// Owned exclusively by one room and only ever replaced through
/// [`crate::Rules::apply`] on accepted moves. Serializes as FEN; the
/// grammar belongs to this crate, not the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
}

impl Position {
    /// The side whose turn it is to move.
    pub fn turn(&self) -> Color {
        self.board.side_to_move()
    }
    /// Compact board-state notation for the wire.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }
    pub(crate) fn advance(board: Board) -> Self {
        Self { board }
    }
}

/// Game-start position.
impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::default(),
        }
    }
}

impl FromStr for Position {
    type Err = chess::Error;
    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            board: Board::from_str(fen)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}
