//! Contracts for the collaborators that feed moves in and show the board.
//!
//! Implementations live outside the match loop: `utils::console_io` for a
//! human at a terminal and `utils::random_playout` for soak testing.

use crate::errors::CheckersResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::{Piece, Position};
use crate::move_generation::move_generator::{RulesEngine, TurnSelection};
use crate::players::player::Player;

/// What an input provider hands back for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Move(TurnSelection),
}

/// Everything an input provider may consult while choosing a move.
pub struct TurnContext<'a> {
    pub board: &'a BoardState,
    pub player: &'a Player,
    /// Pieces that must capture this turn; empty when none can.
    pub must_capture: &'a [Piece],
    pub rules: &'a dyn RulesEngine,
}

pub trait InputProvider {
    /// Block until a legal turn or a quit request is available.
    ///
    /// Implementations re-prompt on bad input themselves and only return
    /// selections that are legal for `ctx`.
    fn next_move(&mut self, ctx: &TurnContext<'_>) -> CheckersResult<InputEvent>;
}

pub trait DisplayProvider {
    /// Show the board. `highlights` are shown for this call only.
    fn display(&mut self, board: &BoardState, highlights: &[Position]) -> CheckersResult<()>;

    /// Show a one-line status message.
    fn announce(&mut self, _message: &str) -> CheckersResult<()> {
        Ok(())
    }
}

/// Display that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplayProvider for NullDisplay {
    fn display(&mut self, _board: &BoardState, _highlights: &[Position]) -> CheckersResult<()> {
        Ok(())
    }
}
