//! Match configuration.

use crate::game_state::checkers_types::Color;

/// What happens when a finished capture path leaves the moving piece with
/// further jumps (typically because it was just crowned).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureContinuation {
    /// The turn ends with the last landing of the chosen path.
    #[default]
    StopAfterPath,
    /// Keep jumping along the first available path until none remain.
    AutoContinue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub first_player: Color,
    pub continuation: CaptureContinuation,
    /// End the game after this many completed turns.
    pub max_turns: Option<u32>,
    /// Hand the display the squares of pieces that must capture.
    pub highlight_forced_captures: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_player: Color::Light,
            continuation: CaptureContinuation::default(),
            max_turns: None,
            highlight_forced_captures: true,
        }
    }
}
