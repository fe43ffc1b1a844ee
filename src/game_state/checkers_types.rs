//! Value types shared by the board, the rules engine and the players.

use std::fmt;

use crate::game_state::checkers_rules::{
    DARK_MAN_DIRECTIONS, KING_DIRECTIONS, LIGHT_MAN_DIRECTIONS,
};

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-indexed `(row, col)` square. Row 0 is the dark side's back rank.
///
/// Coordinates are signed so that stepping off the edge during move
/// generation yields a representable (out-of-bounds) value instead of an
/// underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Square reached by moving `steps` times along `(d_row, d_col)`.
    #[inline]
    pub const fn offset(self, (d_row, d_col): (i8, i8), steps: i8) -> Self {
        Self {
            row: self.row + d_row * steps,
            col: self.col + d_col * steps,
        }
    }

    /// Square halfway between two squares two diagonal steps apart.
    #[inline]
    pub const fn midpoint(self, other: Position) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stable identity of a piece across moves.
///
/// Players hold ids rather than references; the board is the only owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

/// A man or a king. Kings differ only by their direction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub position: Position,
    pub is_king: bool,
}

impl Piece {
    pub const fn new_man(id: PieceId, color: Color, position: Position) -> Self {
        Self {
            id,
            color,
            position,
            is_king: false,
        }
    }

    /// Diagonal steps this piece may advance along right now.
    ///
    /// Queried on every use because promotion can happen mid-game.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        if self.is_king {
            return &KING_DIRECTIONS;
        }
        match self.color {
            Color::Light => &LIGHT_MAN_DIRECTIONS,
            Color::Dark => &DARK_MAN_DIRECTIONS,
        }
    }

    /// Crown the piece. Calling it on a king is a no-op.
    #[inline]
    pub fn promote(&mut self) {
        self.is_king = true;
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}
