//! Turn-by-turn match driver.
//!
//! The controller owns the board, both players and the rules engine, and
//! moves through two states: `AwaitingMove(color)` and `GameOver(reason)`.
//! Turns are committed all-or-nothing: every landing of a selection is
//! applied to a scratch copy of the board, which replaces the live board
//! only once the whole path has gone through.

use std::fmt;

use tracing::{debug, info};

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::{BoardQuery, BoardState};
use crate::game_state::checkers_types::{Color, Piece, Position};
use crate::match_control::match_config::{CaptureContinuation, MatchConfig};
use crate::match_control::providers::{DisplayProvider, InputEvent, InputProvider, TurnContext};
use crate::move_generation::move_generator::{RulesEngine, TurnSelection};
use crate::move_generation::rules_engine::AmericanCheckersRules;
use crate::players::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    NoLegalMoves { loser: Color },
    UserQuit { by: Color },
    TurnLimit { turns: u32 },
}

impl GameOverReason {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOverReason::NoLegalMoves { loser } => Some(loser.opposite()),
            GameOverReason::UserQuit { .. } | GameOverReason::TurnLimit { .. } => None,
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::NoLegalMoves { loser } => write!(f, "{loser} cannot move. Game over."),
            GameOverReason::UserQuit { .. } => f.write_str("Game ended by user."),
            GameOverReason::TurnLimit { turns } => {
                write!(f, "Turn limit of {turns} reached. Game over.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingMove(Color),
    GameOver(GameOverReason),
}

/// What one committed turn did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub color: Color,
    pub selection: TurnSelection,
    /// Landings played after the chosen path under `AutoContinue`.
    pub continued: Vec<Position>,
    pub captured: Vec<Piece>,
    pub promoted: bool,
}

pub struct Match<R: RulesEngine = AmericanCheckersRules> {
    board: BoardState,
    players: [Player; 2],
    rules: R,
    config: MatchConfig,
    state: MatchState,
    turns_played: u32,
    highlights: Vec<Position>,
}

impl Match<AmericanCheckersRules> {
    /// Standard opening position under American rules.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_board(BoardState::new_game(), AmericanCheckersRules, config)
    }
}

impl<R: RulesEngine> Match<R> {
    /// Start from an arbitrary position. Rosters are taken from `board`.
    pub fn with_board(board: BoardState, rules: R, config: MatchConfig) -> Self {
        let players = [
            Player::from_board(Color::Light, &board),
            Player::from_board(Color::Dark, &board),
        ];
        Self {
            state: MatchState::AwaitingMove(config.first_player),
            board,
            players,
            rules,
            config,
            turns_played: 0,
            highlights: Vec::new(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Squares queued for the next render. Taking them clears the queue.
    pub fn take_highlights(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.highlights)
    }

    /// Enter the current turn: ends the game when the side to move has no
    /// legal move or the turn cap is hit, otherwise queues highlights for
    /// pieces that must capture.
    pub fn begin_turn(&mut self) -> CheckersResult<MatchState> {
        let MatchState::AwaitingMove(color) = self.state else {
            return Ok(self.state);
        };

        let player = &self.players[color.index()];
        if !player.has_any_legal_move(&self.board, &self.rules)? {
            return Ok(self.finish(GameOverReason::NoLegalMoves { loser: color }));
        }

        if let Some(limit) = self.config.max_turns {
            if self.turns_played >= limit {
                return Ok(self.finish(GameOverReason::TurnLimit { turns: limit }));
            }
        }

        let player = &self.players[color.index()];

        if self.config.highlight_forced_captures {
            self.highlights = player
                .pieces_that_must_capture(&self.board, &self.rules)?
                .iter()
                .map(|p| p.position)
                .collect();
        }
        Ok(self.state)
    }

    /// End the game at the request of the side to move.
    pub fn quit(&mut self) -> MatchState {
        match self.state {
            MatchState::AwaitingMove(color) => self.finish(GameOverReason::UserQuit { by: color }),
            MatchState::GameOver(_) => self.state,
        }
    }

    /// Validate and commit one complete turn, then hand the move over.
    pub fn play_turn(&mut self, selection: &TurnSelection) -> CheckersResult<TurnReport> {
        let MatchState::AwaitingMove(color) = self.state else {
            return Err(CheckersError::IllegalSelection("the game is over".to_owned()));
        };
        self.players[color.index()].check_selection(&self.board, &self.rules, selection)?;

        let mut next = self.board.clone();
        let mut report = TurnReport {
            color,
            selection: selection.clone(),
            continued: Vec::new(),
            captured: Vec::new(),
            promoted: false,
        };

        let mut at = selection.origin;
        for &to in &selection.landings {
            self.land(&mut next, at, to, &mut report)?;
            at = to;
        }

        if selection.is_capture() && self.config.continuation == CaptureContinuation::AutoContinue {
            loop {
                let piece = *next.piece_at(at)?.ok_or(CheckersError::EmptySquare(at))?;
                let Some(path) = self.rules.capture_sequences(&next, &piece)?.into_iter().next()
                else {
                    break;
                };
                debug!(%color, from = %at, landings = path.len(), "continuing capture");
                for &to in path.landings() {
                    self.land(&mut next, at, to, &mut report)?;
                    report.continued.push(to);
                    at = to;
                }
            }
        }

        self.board = next;
        for captured in &report.captured {
            self.players[captured.color.index()].remove_piece(captured.id);
        }
        self.turns_played += 1;
        self.state = MatchState::AwaitingMove(color.opposite());
        self.highlights.clear();

        info!(
            turn = self.turns_played,
            %color,
            from = %selection.origin,
            to = ?report.selection.destination(),
            captured = report.captured.len(),
            promoted = report.promoted,
            "turn played"
        );
        Ok(report)
    }

    /// Drive the match until it ends.
    pub fn run(
        &mut self,
        input: &mut dyn InputProvider,
        display: &mut dyn DisplayProvider,
    ) -> CheckersResult<GameOverReason> {
        info!(first = %self.config.first_player, "starting checkers match");
        loop {
            let state = self.begin_turn()?;
            let highlights = self.take_highlights();
            display.display(&self.board, &highlights)?;

            let color = match state {
                MatchState::GameOver(reason) => {
                    display.announce(&reason.to_string())?;
                    return Ok(reason);
                }
                MatchState::AwaitingMove(color) => color,
            };

            let player = &self.players[color.index()];
            let must_capture = player.pieces_that_must_capture(&self.board, &self.rules)?;
            let ctx = TurnContext {
                board: &self.board,
                player,
                must_capture: &must_capture,
                rules: &self.rules,
            };

            let event = input.next_move(&ctx)?;
            match event {
                InputEvent::Quit => {
                    self.quit();
                }
                InputEvent::Move(selection) => {
                    self.play_turn(&selection)?;
                }
            }
        }
    }

    fn land(
        &self,
        board: &mut BoardState,
        from: Position,
        to: Position,
        report: &mut TurnReport,
    ) -> CheckersResult<()> {
        let applied = board.apply_move(&self.rules, from, to)?;
        report.captured.extend(applied.captured);
        report.promoted |= applied.promoted;
        Ok(())
    }

    fn finish(&mut self, reason: GameOverReason) -> MatchState {
        info!(%reason, turns = self.turns_played, "game over");
        self.highlights.clear();
        self.state = MatchState::GameOver(reason);
        self.state
    }
}
