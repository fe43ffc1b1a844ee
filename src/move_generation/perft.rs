//! Turn-tree node counting for validating the move generator.
//!
//! A node is one complete turn (a simple move or a whole capture chain), so
//! the counts match the published checkers perft tables.

use crate::errors::CheckersResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Color;
use crate::move_generation::move_generator::{RulesEngine, TurnSelection};
use crate::move_generation::rules_engine::legal_turns;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub pieces_captured: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.pieces_captured += rhs.pieces_captured;
        self.promotions += rhs.promotions;
    }
}

/// Board after playing every landing of `turn`.
pub fn apply_turn<R: RulesEngine + ?Sized>(
    rules: &R,
    board: &BoardState,
    turn: &TurnSelection,
) -> CheckersResult<(BoardState, PerftCounts)> {
    let mut next = board.clone();
    let mut from = turn.origin;
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    for &to in &turn.landings {
        let applied = next.apply_move(rules, from, to)?;
        if applied.is_capture() {
            counts.pieces_captured += 1;
        }
        if applied.promoted {
            counts.promotions += 1;
        }
        from = to;
    }
    if turn.is_capture() {
        counts.captures = 1;
    }
    Ok((next, counts))
}

/// Count leaf turns `depth` plies below `board` with `side` to move.
pub fn perft<R: RulesEngine + ?Sized>(
    rules: &R,
    board: &BoardState,
    side: Color,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for turn in legal_turns(rules, board, side)? {
        let (next, counts) = apply_turn(rules, board, &turn)?;
        if depth == 1 {
            total.merge(counts);
        } else {
            total.merge(perft(rules, &next, side.opposite(), depth - 1)?);
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::checkers_types::{Color, Position};
    use crate::move_generation::rules_engine::AmericanCheckersRules;

    #[test]
    fn start_position_node_counts() {
        let board = BoardState::new_game();
        for (depth, expected) in [(1u8, 7usize), (2, 49), (3, 302)] {
            let counts =
                perft(&AmericanCheckersRules, &board, Color::Dark, depth).expect("perft should run");
            assert_eq!(counts.nodes, expected, "depth {depth}");
        }
    }

    #[test]
    fn counts_are_symmetric_between_sides() {
        let board = BoardState::new_game();
        let dark = perft(&AmericanCheckersRules, &board, Color::Dark, 3).expect("perft");
        let light = perft(&AmericanCheckersRules, &board, Color::Light, 3).expect("perft");
        assert_eq!(dark, light);
    }

    #[test]
    fn forced_double_jump_is_one_node_with_two_pieces_captured() {
        let mut board = BoardState::empty();
        board.place(Color::Light, Position::new(5, 2)).expect("place");
        board.place(Color::Dark, Position::new(4, 3)).expect("place");
        board.place(Color::Dark, Position::new(2, 5)).expect("place");
        let counts = perft(&AmericanCheckersRules, &board, Color::Light, 1).expect("perft");
        assert_eq!(counts.nodes, 1);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.pieces_captured, 2);
    }
}
