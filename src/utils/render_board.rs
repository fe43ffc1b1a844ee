//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 is printed at the top as rank 8. Highlighted squares get a `*`
//! after their symbol in place of the separating space.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Color, Piece, Position};

const FILES: &str = "  a b c d e f g h";

/// Render the board to a string for terminal output.
pub fn render_board(board: &BoardState, highlights: &[Position]) -> String {
    let mut grid: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] = Default::default();
    for piece in board.pieces() {
        grid[piece.position.row as usize][piece.position.col as usize] = Some(*piece);
    }

    let mut out = String::new();
    out.push_str(FILES);
    out.push('\n');
    out.push_str(" +----------------\n");

    for (row, cells) in grid.iter().enumerate() {
        let rank = BOARD_SIZE as usize - row;
        out.push_str(&format!("{rank}|"));
        for (col, cell) in cells.iter().enumerate() {
            out.push(cell.as_ref().map_or('.', piece_to_unicode));
            let here = Position::new(row as i8, col as i8);
            out.push(if highlights.contains(&here) { '*' } else { ' ' });
        }
        out.push_str(&format!("|{rank}\n"));
    }

    out.push_str(" +----------------\n");
    out.push_str(FILES);
    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color, piece.is_king) {
        (Color::Dark, false) => '●',
        (Color::Light, false) => '○',
        (Color::Dark, true) => '♚',
        (Color::Light, true) => '♔',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::checkers_types::{Color, Position};

    #[test]
    fn start_position_rows() {
        let text = render_board(&BoardState::new_game(), &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[2], "8|. ● . ● . ● . ● |8");
        assert_eq!(lines[5], "5|. . . . . . . . |5");
        assert_eq!(lines[9], "1|○ . ○ . ○ . ○ . |1");
    }

    #[test]
    fn kings_and_highlights() {
        let mut board = BoardState::empty();
        board.place_king(Color::Light, Position::new(0, 1)).expect("place");
        board.place(Color::Dark, Position::new(7, 6)).expect("place");
        let text = render_board(&board, &[Position::new(7, 6)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "8|. ♔ . . . . . . |8");
        assert_eq!(lines[9], "1|. . . . . . ●*. |1");
    }
}
