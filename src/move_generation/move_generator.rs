use crate::errors::CheckersResult;
use crate::game_state::board_state::BoardQuery;
use crate::game_state::checkers_types::{Piece, Position};

/// Ordered landings of one turn's chain of jumps.
///
/// Each consecutive pair of squares (starting from the piece's origin) has
/// exactly one captured enemy at its midpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapturePath {
    landings: Vec<Position>,
}

impl CapturePath {
    pub fn new(landings: Vec<Position>) -> Self {
        Self { landings }
    }

    pub fn landings(&self) -> &[Position] {
        &self.landings
    }

    pub fn len(&self) -> usize {
        self.landings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landings.is_empty()
    }

    /// Squares of the pieces this path removes when started from `origin`.
    pub fn captured_squares(&self, origin: Position) -> Vec<Position> {
        let mut from = origin;
        self.landings
            .iter()
            .map(|&to| {
                let mid = from.midpoint(to);
                from = to;
                mid
            })
            .collect()
    }

    pub fn into_landings(self) -> Vec<Position> {
        self.landings
    }
}

impl From<Vec<Position>> for CapturePath {
    fn from(landings: Vec<Position>) -> Self {
        Self::new(landings)
    }
}

/// Everything a single piece may do this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegalMoves {
    /// Jumps are available, so simple moves are forbidden.
    Captures(Vec<CapturePath>),
    Simple(Vec<Position>),
}

impl LegalMoves {
    pub fn is_empty(&self) -> bool {
        match self {
            LegalMoves::Captures(paths) => paths.is_empty(),
            LegalMoves::Simple(moves) => moves.is_empty(),
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, LegalMoves::Captures(_))
    }
}

/// One complete turn: which piece moves and where it lands, in order.
///
/// Simple moves have one landing; capture chains have one per jump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TurnSelection {
    pub origin: Position,
    pub landings: Vec<Position>,
}

impl TurnSelection {
    pub fn new(origin: Position, landings: Vec<Position>) -> Self {
        Self { origin, landings }
    }

    pub fn is_capture(&self) -> bool {
        self.landings
            .first()
            .is_some_and(|to| (to.row - self.origin.row).abs() == 2)
    }

    pub fn destination(&self) -> Option<Position> {
        self.landings.last().copied()
    }
}

/// The rules engine seam: pure computation over a read-only board.
///
/// Implementations never mutate the board and never fail on a well-formed
/// board; the `Result` only carries `OutOfBounds` raised by a faulty
/// `BoardQuery`.
pub trait RulesEngine {
    /// One-step diagonal moves onto empty squares, in direction order.
    fn simple_moves(&self, board: &dyn BoardQuery, piece: &Piece) -> CheckersResult<Vec<Position>>;

    /// Every maximal jump chain available to `piece` from where it stands.
    fn capture_sequences(
        &self,
        board: &dyn BoardQuery,
        piece: &Piece,
    ) -> CheckersResult<Vec<CapturePath>>;

    /// Whether landing on `destination` crowns `piece`.
    fn is_promotion(&self, board: &dyn BoardQuery, piece: &Piece, destination: Position) -> bool;

    /// Captures when any exist, otherwise simple moves.
    fn legal_moves(&self, board: &dyn BoardQuery, piece: &Piece) -> CheckersResult<LegalMoves> {
        let captures = self.capture_sequences(board, piece)?;
        if !captures.is_empty() {
            return Ok(LegalMoves::Captures(captures));
        }
        Ok(LegalMoves::Simple(self.simple_moves(board, piece)?))
    }
}
