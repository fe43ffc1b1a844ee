//! Board state: an 8x8 grid of optional pieces.
//!
//! `BoardState` is pure data plus mutation. It knows nothing about which
//! moves are legal; the one rule it needs while moving (promotion) is
//! delegated to a `RulesEngine`. Everything outside this module reads the
//! board through the `BoardQuery` trait and writes to it only through
//! `apply_move`.

use tracing::debug;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{
    is_playable_square, BOARD_SIZE, DARK_START_ROWS, LIGHT_START_ROWS,
};
use crate::game_state::checkers_types::{Color, Piece, PieceId, Position};
use crate::move_generation::move_generator::RulesEngine;

const GRID: usize = BOARD_SIZE as usize;

/// Read-only view of a board, the only capability the rules engine gets.
pub trait BoardQuery {
    /// True iff both coordinates lie in `0..8`.
    fn in_bounds(&self, pos: Position) -> bool {
        (0..BOARD_SIZE).contains(&pos.row) && (0..BOARD_SIZE).contains(&pos.col)
    }

    /// Occupant of `pos`. Off-board positions are a caller bug and yield
    /// `CheckersError::OutOfBounds`.
    fn piece_at(&self, pos: Position) -> CheckersResult<Option<&Piece>>;
}

/// Outcome of one single-landing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The moved piece as it stands after the move.
    pub piece: Piece,
    pub from: Position,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl AppliedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    grid: [[Option<Piece>; GRID]; GRID],
    next_id: u16,
}

impl BoardQuery for BoardState {
    fn piece_at(&self, pos: Position) -> CheckersResult<Option<&Piece>> {
        if !self.in_bounds(pos) {
            return Err(CheckersError::OutOfBounds(pos));
        }
        Ok(self.grid[pos.row as usize][pos.col as usize].as_ref())
    }
}

impl BoardState {
    /// A board with no pieces, for building custom positions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: twelve men per side on the dark squares.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (color, rows) in [(Color::Dark, DARK_START_ROWS), (Color::Light, LIGHT_START_ROWS)] {
            for row in rows {
                for col in 0..BOARD_SIZE {
                    if is_playable_square(row, col) {
                        board.spawn(color, Position::new(row, col), false);
                    }
                }
            }
        }
        board
    }

    /// Put a new man on an empty dark square.
    pub fn place(&mut self, color: Color, pos: Position) -> CheckersResult<PieceId> {
        self.place_piece(color, pos, false)
    }

    /// Put a new king on an empty dark square.
    pub fn place_king(&mut self, color: Color, pos: Position) -> CheckersResult<PieceId> {
        self.place_piece(color, pos, true)
    }

    fn place_piece(&mut self, color: Color, pos: Position, is_king: bool) -> CheckersResult<PieceId> {
        if self.piece_at(pos)?.is_some() {
            return Err(CheckersError::OccupiedSquare(pos));
        }
        if !is_playable_square(pos.row, pos.col) {
            return Err(CheckersError::UnplayableSquare(pos));
        }
        Ok(self.spawn(color, pos, is_king))
    }

    /// Write a fresh piece into an in-bounds cell without validation.
    fn spawn(&mut self, color: Color, pos: Position, is_king: bool) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        let mut piece = Piece::new_man(id, color, pos);
        if is_king {
            piece.promote();
        }
        *self.cell_mut(pos) = Some(piece);
        id
    }

    /// Every piece on the board, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn piece_by_id(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id == id)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Move the piece standing on `from` to `to`, one landing only.
    ///
    /// Order of effects: clear the origin, update the piece's position,
    /// store it on the destination, crown it if `rules` says so, then remove
    /// the jumped piece when the move spans two rows. A multi-jump turn is
    /// one call per landing.
    pub fn apply_move<R: RulesEngine + ?Sized>(
        &mut self,
        rules: &R,
        from: Position,
        to: Position,
    ) -> CheckersResult<AppliedMove> {
        let mut piece = *self.piece_at(from)?.ok_or(CheckersError::EmptySquare(from))?;
        if self.piece_at(to)?.is_some() {
            return Err(CheckersError::OccupiedSquare(to));
        }
        let d_row = (to.row - from.row).abs();
        let d_col = (to.col - from.col).abs();
        if d_row != d_col || !(1..=2).contains(&d_row) {
            return Err(CheckersError::IllegalSelection(format!(
                "{from} to {to} is not a one- or two-step diagonal"
            )));
        }

        let promotes = rules.is_promotion(&*self, &piece, to);

        *self.cell_mut(from) = None;
        piece.position = to;
        if promotes {
            piece.promote();
        }
        *self.cell_mut(to) = Some(piece);

        let captured = if d_row == 2 {
            self.cell_mut(from.midpoint(to)).take()
        } else {
            None
        };

        debug!(
            piece = piece.id.0,
            color = %piece.color,
            %from,
            %to,
            captured = ?captured.map(|c| c.id.0),
            promoted = promotes,
            "applied move"
        );

        Ok(AppliedMove {
            piece,
            from,
            captured,
            promoted: promotes,
        })
    }

    /// Callers check bounds first.
    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.grid[pos.row as usize][pos.col as usize]
    }
}
