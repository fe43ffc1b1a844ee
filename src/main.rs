//! Two-player checkers at the terminal.
//!
//! Run with:
//! `cargo run --release -- --first-player dark --auto-continue`

use clap::{Parser, ValueEnum};
use tracing::info;

use plum_checkers::errors::CheckersResult;
use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::match_control::match_config::{CaptureContinuation, MatchConfig};
use plum_checkers::match_control::match_controller::Match;
use plum_checkers::utils::console_io::{ConsoleDisplay, ConsoleInput};
use plum_checkers::utils::logging::init_logging;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Light,
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "plum_checkers", about = "Play American checkers in the terminal")]
struct Cli {
    /// Side that makes the first move.
    #[arg(long, value_enum, default_value_t = Side::Light)]
    first_player: Side,

    /// Keep jumping after a capture path when the piece (e.g. a new king)
    /// can capture again.
    #[arg(long)]
    auto_continue: bool,

    /// End the game after this many turns.
    #[arg(long)]
    max_turns: Option<u32>,

    /// Do not mark pieces that are forced to capture.
    #[arg(long)]
    no_highlights: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn match_config(&self) -> MatchConfig {
        MatchConfig {
            first_player: self.first_player.into(),
            continuation: if self.auto_continue {
                CaptureContinuation::AutoContinue
            } else {
                CaptureContinuation::StopAfterPath
            },
            max_turns: self.max_turns,
            highlight_forced_captures: !self.no_highlights,
        }
    }
}

fn main() -> CheckersResult<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    println!("Starting Checkers game!");
    let mut game = Match::new(cli.match_config());
    let reason = game.run(&mut ConsoleInput::stdio(), &mut ConsoleDisplay::stdout())?;
    info!(%reason, turns = game.turns_played(), "match finished");
    Ok(())
}
