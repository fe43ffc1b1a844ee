//! Seeded random self-play series for soak testing.
//!
//! Run with:
//! `cargo run --release --bin playout_series -- --games 200 --seed 1234`

use clap::Parser;

use plum_checkers::errors::CheckersResult;
use plum_checkers::match_control::match_config::{CaptureContinuation, MatchConfig};
use plum_checkers::utils::logging::init_logging;
use plum_checkers::utils::random_playout::{play_random_series, PlayoutSeriesConfig};

#[derive(Debug, Parser)]
#[command(name = "playout_series", about = "Random self-play with invariant checks")]
struct Cli {
    #[arg(long, default_value_t = 100)]
    games: u16,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 300)]
    max_turns: u32,

    #[arg(long)]
    auto_continue: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> CheckersResult<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let stats = play_random_series(&PlayoutSeriesConfig {
        games: cli.games,
        base_seed: cli.seed,
        per_game: MatchConfig {
            continuation: if cli.auto_continue {
                CaptureContinuation::AutoContinue
            } else {
                CaptureContinuation::StopAfterPath
            },
            max_turns: Some(cli.max_turns),
            ..MatchConfig::default()
        },
    })?;

    println!("{}", stats.report());
    Ok(())
}
