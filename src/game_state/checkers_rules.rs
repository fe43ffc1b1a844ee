//! Canonical American-checkers rule constants.
//!
//! Board geometry, starting rows and the promotion rows for each color live
//! here so the board, the rules engine and the renderer agree on them.

use crate::game_state::checkers_types::Color;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Rows holding dark men at the start of a game.
pub const DARK_START_ROWS: std::ops::Range<i8> = 0..3;

/// Rows holding light men at the start of a game.
pub const LIGHT_START_ROWS: std::ops::Range<i8> = 5..8;

/// All four diagonal steps, in the order kings iterate them.
pub const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Forward steps for light men (toward row 0).
pub const LIGHT_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Forward steps for dark men (toward row 7).
pub const DARK_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Row on which a man of `color` is crowned.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => BOARD_SIZE - 1,
    }
}

/// Playable squares are the dark ones, where `row + col` is odd.
#[inline]
pub const fn is_playable_square(row: i8, col: i8) -> bool {
    (row + col) % 2 == 1
}
