//! Square conversions for human-readable coordinates.
//!
//! Columns map to files `a`..`h`, rows map to ranks `8`..`1` (row 0 is the
//! top rank as printed), so `(5, 2)` is `c3`.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::Position;

/// Convert a coordinate such as `"c3"` to a board position.
pub fn algebraic_to_position(square: &str) -> CheckersResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(CheckersError::MalformedInput(format!(
            "invalid square '{square}', expected a file a-h and a rank 1-8"
        )));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(CheckersError::MalformedInput(format!(
            "invalid file '{}'",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(CheckersError::MalformedInput(format!(
            "invalid rank '{}'",
            rank as char
        )));
    }

    let col = (file - b'a') as i8;
    let row = BOARD_SIZE - (rank - b'0') as i8;
    Ok(Position::new(row, col))
}

/// Convert a board position to a coordinate such as `"c3"`.
pub fn position_to_algebraic(pos: Position) -> CheckersResult<String> {
    if !(0..BOARD_SIZE).contains(&pos.row) || !(0..BOARD_SIZE).contains(&pos.col) {
        return Err(CheckersError::OutOfBounds(pos));
    }

    let file_char = char::from(b'a' + pos.col as u8);
    let rank_char = char::from(b'0' + (BOARD_SIZE - pos.row) as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Space-separated coordinates for a sequence of squares.
pub fn path_to_algebraic(path: &[Position]) -> CheckersResult<String> {
    let squares = path
        .iter()
        .map(|&p| position_to_algebraic(p))
        .collect::<CheckersResult<Vec<_>>>()?;
    Ok(squares.join(" "))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, path_to_algebraic, position_to_algebraic};
    use crate::errors::CheckersError;
    use crate::game_state::checkers_types::Position;

    #[test]
    fn corners_and_a_light_man_square() {
        assert_eq!(algebraic_to_position("a8").expect("a8"), Position::new(0, 0));
        assert_eq!(algebraic_to_position("h1").expect("h1"), Position::new(7, 7));
        assert_eq!(algebraic_to_position("C3").expect("C3"), Position::new(5, 2));
        assert_eq!(position_to_algebraic(Position::new(5, 2)).expect("c3"), "c3");
        assert_eq!(position_to_algebraic(Position::new(0, 7)).expect("h8"), "h8");
    }

    #[test]
    fn bad_squares_are_malformed_input() {
        for bad in ["", "a", "i3", "a9", "a0", "3c", "c33"] {
            assert!(matches!(
                algebraic_to_position(bad),
                Err(CheckersError::MalformedInput(_))
            ));
        }
        assert!(matches!(
            position_to_algebraic(Position::new(8, 0)),
            Err(CheckersError::OutOfBounds(_))
        ));
    }

    #[test]
    fn paths_render_as_space_separated_squares() {
        let path = [Position::new(3, 4), Position::new(1, 6)];
        assert_eq!(path_to_algebraic(&path).expect("path"), "e5 g7");
    }
}
