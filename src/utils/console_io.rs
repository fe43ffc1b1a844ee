//! Console input and display providers.
//!
//! Input grammar, one turn per line:
//! - `gg` quits,
//! - `<from> <to> [<to> ...]` names a piece and its landings, e.g. `c3 d4`
//!   or `c3 e5 g7`. For a capture, the typed landings may stop early as
//!   long as they single out one legal path.
//!
//! Malformed or illegal lines print the reason and ask again.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::Position;
use crate::match_control::providers::{DisplayProvider, InputEvent, InputProvider, TurnContext};
use crate::move_generation::move_generator::{LegalMoves, TurnSelection};
use crate::utils::algebraic::{algebraic_to_position, path_to_algebraic};
use crate::utils::render_board::render_board;

const QUIT_COMMAND: &str = "gg";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Quit,
    /// Origin followed by at least one landing.
    Squares(Vec<Position>),
}

pub fn parse_command(line: &str) -> CheckersResult<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(QUIT_COMMAND) {
        return Ok(ConsoleCommand::Quit);
    }

    let squares = trimmed
        .split_whitespace()
        .map(algebraic_to_position)
        .collect::<CheckersResult<Vec<_>>>()?;
    if squares.len() < 2 {
        return Err(CheckersError::MalformedInput(
            "use 'from to' format, e.g. c3 d4".to_owned(),
        ));
    }
    Ok(ConsoleCommand::Squares(squares))
}

fn decode_line(raw: &[u8]) -> CheckersResult<&str> {
    std::str::from_utf8(raw)
        .map_err(|_| CheckersError::MalformedInput("input is not valid UTF-8".to_owned()))
}

/// Match typed squares against the legal moves of the named piece.
pub fn resolve_selection(ctx: &TurnContext<'_>, squares: &[Position]) -> CheckersResult<TurnSelection> {
    let Some((&origin, typed)) = squares.split_first() else {
        return Err(CheckersError::MalformedInput("no squares given".to_owned()));
    };
    let piece = ctx.player.owned_piece_at(ctx.board, origin)?;

    if !ctx.must_capture.is_empty() && !ctx.must_capture.iter().any(|p| p.id == piece.id) {
        return Err(CheckersError::IllegalSelection(
            "you must make a capture if available".to_owned(),
        ));
    }

    match ctx.rules.legal_moves(ctx.board, &piece)? {
        LegalMoves::Simple(moves) => match typed {
            [to] if moves.contains(to) => Ok(TurnSelection::new(origin, vec![*to])),
            _ => Err(CheckersError::IllegalSelection("invalid simple move".to_owned())),
        },
        LegalMoves::Captures(paths) => {
            if let Some(exact) = paths.iter().find(|p| p.landings() == typed) {
                return Ok(TurnSelection::new(origin, exact.landings().to_vec()));
            }
            let candidates: Vec<_> = paths
                .iter()
                .filter(|p| p.landings().starts_with(typed))
                .collect();
            match candidates.as_slice() {
                [] => Err(CheckersError::IllegalSelection(
                    "invalid capture move, select a valid jump destination".to_owned(),
                )),
                [only] => Ok(TurnSelection::new(origin, only.landings().to_vec())),
                many => {
                    let options = many
                        .iter()
                        .map(|p| path_to_algebraic(p.landings()))
                        .collect::<CheckersResult<Vec<_>>>()?;
                    Err(CheckersError::IllegalSelection(format!(
                        "ambiguous capture, type the full path: {}",
                        options.join(" | ")
                    )))
                }
            }
        }
    }
}

/// Reads turns from a line-oriented reader, prompting on `out`.
pub struct ConsoleInput<Rd, W> {
    reader: Rd,
    out: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<Rd: BufRead, W: Write> ConsoleInput<Rd, W> {
    pub fn new(reader: Rd, out: W) -> Self {
        Self { reader, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<Rd: BufRead, W: Write> InputProvider for ConsoleInput<Rd, W> {
    fn next_move(&mut self, ctx: &TurnContext<'_>) -> CheckersResult<InputEvent> {
        loop {
            write!(
                self.out,
                "Player {}, enter your piece then your move (e.g., c3 d4) or '{QUIT_COMMAND}' to quit: ",
                ctx.player.color()
            )?;
            self.out.flush()?;

            let mut raw = Vec::new();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                // End of input is treated like typing the quit command.
                return Ok(InputEvent::Quit);
            }

            let attempt = decode_line(&raw)
                .and_then(parse_command)
                .and_then(|command| match command {
                    ConsoleCommand::Quit => Ok(InputEvent::Quit),
                    ConsoleCommand::Squares(squares) => {
                        resolve_selection(ctx, &squares).map(InputEvent::Move)
                    }
                });

            match attempt {
                Ok(event) => return Ok(event),
                Err(err) if err.is_recoverable() => {
                    let shown = String::from_utf8_lossy(&raw);
                    warn!(input = shown.trim(), %err, "rejected console input");
                    writeln!(self.out, "{err}. Try again.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Prints the board and status lines to a writer.
pub struct ConsoleDisplay<W> {
    out: W,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayProvider for ConsoleDisplay<W> {
    fn display(&mut self, board: &BoardState, highlights: &[Position]) -> CheckersResult<()> {
        writeln!(self.out, "{}", render_board(board, highlights))?;
        self.out.flush()?;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> CheckersResult<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::game_state::checkers_types::{Color, Piece};
    use crate::move_generation::rules_engine::AmericanCheckersRules;
    use crate::players::player::Player;

    fn p(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn ask(board: &BoardState, color: Color, script: &str) -> (CheckersResult<InputEvent>, String) {
        let player = Player::from_board(color, board);
        let must_capture: Vec<Piece> = player
            .pieces_that_must_capture(board, &AmericanCheckersRules)
            .expect("query");
        let ctx = TurnContext {
            board,
            player: &player,
            must_capture: &must_capture,
            rules: &AmericanCheckersRules,
        };
        let mut input = ConsoleInput::new(Cursor::new(script.to_owned()), Vec::new());
        let event = input.next_move(&ctx);
        let printed = String::from_utf8(input.into_output()).expect("utf8 output");
        (event, printed)
    }

    #[test]
    fn parses_quit_and_square_lists() {
        assert_eq!(parse_command("  GG \n").expect("quit"), ConsoleCommand::Quit);
        assert_eq!(
            parse_command("c3 e5 g7").expect("squares"),
            ConsoleCommand::Squares(vec![p(5, 2), p(3, 4), p(1, 6)])
        );
        assert!(matches!(parse_command("c3"), Err(CheckersError::MalformedInput(_))));
        assert!(matches!(parse_command("c3 z9"), Err(CheckersError::MalformedInput(_))));
    }

    #[test]
    fn simple_move_from_the_start_position() {
        let board = BoardState::new_game();
        let (event, _) = ask(&board, Color::Light, "c3 d4\n");
        assert_eq!(
            event.expect("event"),
            InputEvent::Move(TurnSelection::new(p(5, 2), vec![p(4, 3)]))
        );
    }

    #[test]
    fn reprompts_until_the_move_is_legal() {
        let board = BoardState::new_game();
        let (event, printed) = ask(&board, Color::Light, "nonsense\nc3 c4\nd6 c5\ne3 f4\n");
        assert_eq!(
            event.expect("event"),
            InputEvent::Move(TurnSelection::new(p(5, 4), vec![p(4, 5)]))
        );
        assert_eq!(printed.matches("Try again.").count(), 3);
        assert_eq!(printed.matches("Player light").count(), 4);
    }

    #[test]
    fn first_landing_completes_a_unique_capture_path() {
        let mut board = BoardState::empty();
        board.place(Color::Light, p(5, 2)).expect("place");
        board.place(Color::Dark, p(4, 3)).expect("place");
        board.place(Color::Dark, p(2, 5)).expect("place");
        let (event, _) = ask(&board, Color::Light, "c3 e5\n");
        assert_eq!(
            event.expect("event"),
            InputEvent::Move(TurnSelection::new(p(5, 2), vec![p(3, 4), p(1, 6)]))
        );
    }

    #[test]
    fn ambiguous_capture_prefix_lists_the_options() {
        let mut board = BoardState::empty();
        board.place(Color::Light, p(5, 2)).expect("place");
        board.place(Color::Dark, p(4, 3)).expect("place");
        board.place(Color::Dark, p(2, 3)).expect("place");
        board.place(Color::Dark, p(2, 5)).expect("place");
        let (event, printed) = ask(&board, Color::Light, "c3 e5\nc3 e5 c7\n");
        assert_eq!(
            event.expect("event"),
            InputEvent::Move(TurnSelection::new(p(5, 2), vec![p(3, 4), p(1, 2)]))
        );
        assert!(printed.contains("e5 c7 | e5 g7"));
    }

    #[test]
    fn non_capturing_piece_is_refused_while_a_capture_exists() {
        let mut board = BoardState::empty();
        board.place(Color::Light, p(5, 2)).expect("place");
        board.place(Color::Light, p(5, 6)).expect("place");
        board.place(Color::Dark, p(4, 3)).expect("place");
        let (event, printed) = ask(&board, Color::Light, "g3 f4\ngg\n");
        assert_eq!(event.expect("event"), InputEvent::Quit);
        assert!(printed.contains("you must make a capture if available"));
    }

    #[test]
    fn undecodable_bytes_are_rejected_and_reprompted() {
        let board = BoardState::new_game();
        let player = Player::from_board(Color::Light, &board);
        let ctx = TurnContext {
            board: &board,
            player: &player,
            must_capture: &[],
            rules: &AmericanCheckersRules,
        };
        let mut script = vec![0xff, 0xfe, b'\n'];
        script.extend_from_slice(b"c3 d4\n");
        let mut input = ConsoleInput::new(Cursor::new(script), Vec::new());
        let event = input.next_move(&ctx).expect("bad bytes are recoverable");
        assert_eq!(
            event,
            InputEvent::Move(TurnSelection::new(p(5, 2), vec![p(4, 3)]))
        );
        let printed = String::from_utf8(input.into_output()).expect("utf8 output");
        assert!(printed.contains("input is not valid UTF-8"));
    }

    #[test]
    fn end_of_input_quits() {
        let board = BoardState::new_game();
        let (event, _) = ask(&board, Color::Dark, "");
        assert_eq!(event.expect("event"), InputEvent::Quit);
    }

    #[test]
    fn display_writes_the_board_and_messages() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display
            .display(&BoardState::new_game(), &[])
            .expect("display");
        display.announce("Game ended by user.").expect("announce");
        let text = String::from_utf8(display.into_output()).expect("utf8 output");
        assert!(text.starts_with("  a b c d e f g h\n"));
        assert!(text.ends_with("Game ended by user.\n"));
    }
}
