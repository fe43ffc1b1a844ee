//! A side in the match: its color and the roster of its live pieces.
//!
//! The roster holds `PieceId`s; the board stays the sole owner of piece
//! data, so every query resolves ids against the current board.

use std::collections::BTreeSet;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::{BoardQuery, BoardState};
use crate::game_state::checkers_types::{Color, Piece, PieceId, Position};
use crate::move_generation::move_generator::{RulesEngine, TurnSelection};
use crate::move_generation::rules_engine::legal_turns_for;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    roster: BTreeSet<PieceId>,
}

impl Player {
    /// Roster populated from the pieces of `color` currently on `board`.
    pub fn from_board(color: Color, board: &BoardState) -> Self {
        Self {
            color,
            roster: board.pieces_of(color).map(|p| p.id).collect(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn roster(&self) -> &BTreeSet<PieceId> {
        &self.roster
    }

    pub fn owns(&self, id: PieceId) -> bool {
        self.roster.contains(&id)
    }

    /// Drop a captured piece. Returns whether it was on the roster.
    pub fn remove_piece(&mut self, id: PieceId) -> bool {
        self.roster.remove(&id)
    }

    /// Current state of every rostered piece.
    pub fn pieces(&self, board: &BoardState) -> CheckersResult<Vec<Piece>> {
        self.roster
            .iter()
            .map(|&id| board.piece_by_id(id).copied().ok_or(CheckersError::UnknownPiece(id)))
            .collect()
    }

    pub fn has_any_legal_move<R: RulesEngine + ?Sized>(
        &self,
        board: &BoardState,
        rules: &R,
    ) -> CheckersResult<bool> {
        for piece in self.pieces(board)? {
            if !rules.legal_moves(board, &piece)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Pieces with at least one jump available. When non-empty, only these
    /// may move this turn.
    pub fn pieces_that_must_capture<R: RulesEngine + ?Sized>(
        &self,
        board: &BoardState,
        rules: &R,
    ) -> CheckersResult<Vec<Piece>> {
        let mut forced = Vec::new();
        for piece in self.pieces(board)? {
            if !rules.capture_sequences(board, &piece)?.is_empty() {
                forced.push(piece);
            }
        }
        Ok(forced)
    }

    /// Every complete turn this player may play.
    pub fn legal_turns<R: RulesEngine + ?Sized>(
        &self,
        board: &BoardState,
        rules: &R,
    ) -> CheckersResult<Vec<TurnSelection>> {
        let pieces = self.pieces(board)?;
        legal_turns_for(rules, board, &pieces)
    }

    /// Accept `selection` only if it is one of this player's legal turns.
    ///
    /// A capture selection must name a whole path; see
    /// `utils::console_io` for prefix completion of typed paths.
    pub fn check_selection<R: RulesEngine + ?Sized>(
        &self,
        board: &BoardState,
        rules: &R,
        selection: &TurnSelection,
    ) -> CheckersResult<()> {
        let piece = self.owned_piece_at(board, selection.origin)?;
        let forced = self.pieces_that_must_capture(board, rules)?;
        if !forced.is_empty() && !forced.iter().any(|p| p.id == piece.id) {
            return Err(CheckersError::IllegalSelection(
                "a capture is available; you must play a piece that can capture".to_owned(),
            ));
        }
        if self.legal_turns(board, rules)?.contains(selection) {
            Ok(())
        } else {
            Err(CheckersError::IllegalSelection(format!(
                "{:?} is not a legal move for the piece on {}",
                selection.landings, selection.origin
            )))
        }
    }

    /// The piece on `pos`, provided it belongs to this player.
    pub fn owned_piece_at(&self, board: &BoardState, pos: Position) -> CheckersResult<Piece> {
        match board.piece_at(pos)? {
            Some(piece) if piece.color == self.color && self.owns(piece.id) => Ok(*piece),
            _ => Err(CheckersError::IllegalSelection(format!(
                "there is no {} piece at the starting position",
                self.color
            ))),
        }
    }
}
