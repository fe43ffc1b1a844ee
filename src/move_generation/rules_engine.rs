//! American checkers rules: simple moves, jump chains and promotion.
//!
//! The capture search is an exhaustive depth-first walk over jump chains.
//! Pieces jumped earlier in the current chain are kept on an explicit
//! backtracking stack, so sibling branches never see each other's state.
//! The board is never touched during the search: the moving piece still
//! stands on its origin square and jumped pieces are still present, which
//! means neither square can serve as a landing later in the same chain.
//!
//! Revisiting an earlier *landing* square is not forbidden; only re-jumping
//! the same captured piece is.

use crate::errors::CheckersResult;
use crate::game_state::board_state::{BoardQuery, BoardState};
use crate::game_state::checkers_rules::promotion_row;
use crate::game_state::checkers_types::{Color, Piece, Position};
use crate::move_generation::move_generator::{CapturePath, RulesEngine, TurnSelection};

#[derive(Debug, Clone, Copy, Default)]
pub struct AmericanCheckersRules;

impl RulesEngine for AmericanCheckersRules {
    fn simple_moves(&self, board: &dyn BoardQuery, piece: &Piece) -> CheckersResult<Vec<Position>> {
        let mut moves = Vec::with_capacity(4);
        for &dir in piece.directions() {
            let to = piece.position.offset(dir, 1);
            if board.in_bounds(to) && board.piece_at(to)?.is_none() {
                moves.push(to);
            }
        }
        Ok(moves)
    }

    fn capture_sequences(
        &self,
        board: &dyn BoardQuery,
        piece: &Piece,
    ) -> CheckersResult<Vec<CapturePath>> {
        let mut jumped = Vec::new();
        let tails = jump_chains_from(board, piece, piece.position, &mut jumped)?;
        Ok(tails.into_iter().map(CapturePath::new).collect())
    }

    fn is_promotion(&self, _board: &dyn BoardQuery, piece: &Piece, destination: Position) -> bool {
        !piece.is_king && destination.row == promotion_row(piece.color)
    }
}

/// Maximal jump chains for `piece` as if it stood on `from`.
///
/// `jumped` holds the squares already captured on the current chain.
fn jump_chains_from(
    board: &dyn BoardQuery,
    piece: &Piece,
    from: Position,
    jumped: &mut Vec<Position>,
) -> CheckersResult<Vec<Vec<Position>>> {
    let mut chains = Vec::new();

    for &dir in piece.directions() {
        let over = from.offset(dir, 1);
        let landing = from.offset(dir, 2);
        if !board.in_bounds(over) || !board.in_bounds(landing) {
            continue;
        }
        let Some(victim) = board.piece_at(over)? else {
            continue;
        };
        if !victim.is_enemy_of(piece) || board.piece_at(landing)?.is_some() || jumped.contains(&over) {
            continue;
        }

        jumped.push(over);
        let continuations = jump_chains_from(board, piece, landing, jumped);
        jumped.pop();

        let continuations = continuations?;
        if continuations.is_empty() {
            chains.push(vec![landing]);
        } else {
            for tail in continuations {
                let mut chain = Vec::with_capacity(tail.len() + 1);
                chain.push(landing);
                chain.extend(tail);
                chains.push(chain);
            }
        }
    }

    Ok(chains)
}

/// Complete turns available to `pieces`, with capture forced across the
/// whole group: if any piece can jump, only jump chains are returned.
pub fn legal_turns_for<'a, R, I>(
    rules: &R,
    board: &BoardState,
    pieces: I,
) -> CheckersResult<Vec<TurnSelection>>
where
    R: RulesEngine + ?Sized,
    I: IntoIterator<Item = &'a Piece>,
{
    let mut captures = Vec::new();
    let mut simple = Vec::new();

    for piece in pieces {
        let paths = rules.capture_sequences(board, piece)?;
        if !paths.is_empty() {
            captures.extend(
                paths
                    .into_iter()
                    .map(|p| TurnSelection::new(piece.position, p.into_landings())),
            );
        } else if captures.is_empty() {
            simple.extend(
                rules
                    .simple_moves(board, piece)?
                    .into_iter()
                    .map(|to| TurnSelection::new(piece.position, vec![to])),
            );
        }
    }

    Ok(if captures.is_empty() { simple } else { captures })
}

/// Complete turns for every piece of `color` on the board.
pub fn legal_turns<R: RulesEngine + ?Sized>(
    rules: &R,
    board: &BoardState,
    color: Color,
) -> CheckersResult<Vec<TurnSelection>> {
    legal_turns_for(rules, board, board.pieces_of(color))
}
