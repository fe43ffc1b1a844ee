//! Seeded random self-play for soak testing the rules and the match loop.
//!
//! Every turn is drawn uniformly from the legal turns of the side to move,
//! and after each turn the board and rosters are checked for consistency.
//! This is a test harness, not an opponent.

use std::collections::BTreeSet;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::BoardQuery;
use crate::game_state::checkers_rules::is_playable_square;
use crate::game_state::checkers_types::{Color, PieceId, Position};
use crate::match_control::match_config::MatchConfig;
use crate::match_control::match_controller::{GameOverReason, Match, MatchState};
use crate::match_control::providers::{InputEvent, InputProvider, TurnContext};
use crate::move_generation::move_generator::RulesEngine;

/// Input provider that picks a uniformly random legal turn.
pub struct RandomInput {
    rng: StdRng,
}

impl RandomInput {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl InputProvider for RandomInput {
    fn next_move(&mut self, ctx: &TurnContext<'_>) -> CheckersResult<InputEvent> {
        let turns = ctx.player.legal_turns(ctx.board, ctx.rules)?;
        Ok(match turns.as_slice().choose(&mut self.rng) {
            Some(turn) => InputEvent::Move(turn.clone()),
            None => InputEvent::Quit,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: GameOverReason,
    pub turns: u32,
    pub light_remaining: usize,
    pub dark_remaining: usize,
}

#[derive(Debug, Clone)]
pub struct PlayoutSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for PlayoutSeriesConfig {
    fn default() -> Self {
        Self {
            games: 20,
            base_seed: 0,
            per_game: MatchConfig {
                max_turns: Some(300),
                ..MatchConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSeriesStats {
    pub games: u16,
    pub light_wins: u16,
    pub dark_wins: u16,
    pub unfinished: u16,
    pub total_turns: u64,
}

impl PlayoutSeriesStats {
    pub fn report(&self) -> String {
        let avg_turns = if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        };
        format!(
            "games={} light_wins={} dark_wins={} unfinished={} avg_turns={:.1}",
            self.games, self.light_wins, self.dark_wins, self.unfinished, avg_turns
        )
    }
}

/// Play one random game from the opening position, verifying invariants
/// after every turn.
pub fn play_random_game(seed: u64, config: MatchConfig) -> CheckersResult<PlayoutResult> {
    let mut game = Match::new(config);
    let mut input = RandomInput::seeded(seed);
    check_invariants(&game)?;

    let outcome = loop {
        let color = match game.begin_turn()? {
            MatchState::GameOver(reason) => break reason,
            MatchState::AwaitingMove(color) => color,
        };
        let kings_before = kings_of(&game, color);

        let player = game.player(color);
        let must_capture = player.pieces_that_must_capture(game.board(), game.rules())?;
        let ctx = TurnContext {
            board: game.board(),
            player,
            must_capture: &must_capture,
            rules: game.rules(),
        };
        let event = input.next_move(&ctx)?;
        match event {
            InputEvent::Quit => {
                game.quit();
            }
            InputEvent::Move(selection) => {
                let report = game.play_turn(&selection)?;
                debug!(seed, turn = game.turns_played(), captured = report.captured.len(), "playout turn");
            }
        }

        check_invariants(&game)?;
        if !kings_before.is_subset(&kings_of(&game, color)) {
            return Err(invariant("a king lost its crown"));
        }
    };

    Ok(PlayoutResult {
        outcome,
        turns: game.turns_played(),
        light_remaining: game.board().count(Color::Light),
        dark_remaining: game.board().count(Color::Dark),
    })
}

pub fn play_random_series(config: &PlayoutSeriesConfig) -> CheckersResult<PlayoutSeriesStats> {
    let mut stats = PlayoutSeriesStats::default();
    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(game as u64);
        let result = play_random_game(seed, config.per_game.clone())?;
        stats.games += 1;
        stats.total_turns += result.turns as u64;
        match result.outcome.winner() {
            Some(Color::Light) => stats.light_wins += 1,
            Some(Color::Dark) => stats.dark_wins += 1,
            None => stats.unfinished += 1,
        }
    }
    Ok(stats)
}

/// Structural checks that must hold between any two turns.
pub fn check_invariants<R: RulesEngine>(game: &Match<R>) -> CheckersResult<()> {
    let board = game.board();
    let mut seen = BTreeSet::new();
    for row in 0..8 {
        for col in 0..8 {
            let pos = Position::new(row, col);
            let Some(piece) = board.piece_at(pos)? else {
                continue;
            };
            if !is_playable_square(row, col) {
                return Err(invariant("piece on a light square"));
            }
            if piece.position != pos {
                return Err(invariant("piece position does not match its cell"));
            }
            if !seen.insert(piece.id) {
                return Err(invariant("one piece stored in two cells"));
            }
        }
    }

    for color in [Color::Light, Color::Dark] {
        let on_board: BTreeSet<PieceId> = board.pieces_of(color).map(|p| p.id).collect();
        if &on_board != game.player(color).roster() {
            return Err(invariant("roster out of sync with the board"));
        }
    }
    Ok(())
}

fn kings_of<R: RulesEngine>(game: &Match<R>, color: Color) -> BTreeSet<PieceId> {
    game.board()
        .pieces_of(color)
        .filter(|p| p.is_king)
        .map(|p| p.id)
        .collect()
}

fn invariant(what: &str) -> CheckersError {
    CheckersError::InvariantViolated(what.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_control::match_config::CaptureContinuation;
    use crate::match_control::providers::NullDisplay;

    #[test]
    fn random_games_keep_the_board_consistent() {
        let stats = play_random_series(&PlayoutSeriesConfig {
            games: 12,
            base_seed: 7,
            ..PlayoutSeriesConfig::default()
        })
        .expect("playouts should not break invariants");
        assert_eq!(stats.games, 12);
        assert_eq!(stats.light_wins + stats.dark_wins + stats.unfinished, 12);
    }

    #[test]
    fn auto_continue_playouts_keep_the_board_consistent() {
        let config = PlayoutSeriesConfig {
            games: 12,
            base_seed: 99,
            per_game: MatchConfig {
                continuation: CaptureContinuation::AutoContinue,
                max_turns: Some(300),
                ..MatchConfig::default()
            },
        };
        play_random_series(&config).expect("playouts should not break invariants");
    }

    #[test]
    fn same_seed_same_game() {
        let config = MatchConfig {
            max_turns: Some(80),
            ..MatchConfig::default()
        };
        let a = play_random_game(42, config.clone()).expect("game");
        let b = play_random_game(42, config).expect("game");
        assert_eq!(a.turns, b.turns);
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.light_remaining, b.light_remaining);
    }

    #[test]
    fn random_input_drives_the_match_loop_to_an_end() {
        let mut game = Match::new(MatchConfig {
            max_turns: Some(120),
            ..MatchConfig::default()
        });
        let reason = game
            .run(&mut RandomInput::seeded(5), &mut NullDisplay)
            .expect("run");
        assert!(game.turns_played() <= 120);
        assert_eq!(game.state(), MatchState::GameOver(reason));
        check_invariants(&game).expect("consistent after the last turn");
    }
}
