//! Line-oriented text console
//!
//! Reads whitespace-separated commands and prints the board after every
//! change. See [`command::HELP`] for the command set.

pub mod command;
pub mod render;

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use tracing::{info, warn};

use crate::error::CommandError;
use crate::game::Game;

pub use command::{Command, Tokens, HELP};
pub use render::render_board;

/// Console session over any reader and writer
pub struct Console<R, W> {
    game: Game,
    tokens: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: Game, input: R, out: W) -> Self {
        Self {
            game,
            tokens: Tokens::new(input),
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Process commands until `q` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        info!(depth = self.game.depth(), "console started");
        while let Some(verb) = self.tokens.next_token()? {
            let flow = match Command::parse(&verb, &mut self.tokens) {
                Ok(command) => self.execute(command)?,
                Err(CommandError::Io(err)) => return Err(err),
                Err(err) => {
                    warn!(%err, "rejected input");
                    writeln!(self.out, "{err}")?;
                    if !matches!(err, CommandError::InvalidDepth { .. }) {
                        writeln!(self.out, "{HELP}")?;
                    }
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                break;
            }
        }
        self.out.flush()
    }

    fn print(&mut self, marked: bool) -> io::Result<()> {
        let last = marked
            .then(|| self.game.last_move())
            .flatten()
            .map(|mv| mv.pos);
        write!(self.out, "{}", render_board(self.game.board(), last))
    }

    /// Run one command; `Break` ends the session
    fn execute(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        let written = match command {
            Command::Quit => {
                writeln!(self.out, "Quit game.")?;
                return Ok(ControlFlow::Break(()));
            }
            Command::Print => self.print(false),
            Command::Depth(depth) => {
                self.game.set_depth(depth);
                writeln!(self.out, "Set depth {depth}.")
            }
            Command::Start => {
                self.game.reset();
                self.print(false)
            }
            Command::Next => match self.game.engine_move() {
                Some(_) => self.print(true),
                None => writeln!(self.out, "No move."),
            },
            Command::Undo => {
                self.game.undo();
                self.print(false)
            }
            Command::Play { color, row, col } => {
                if self.game.play(row, col, color) == 0 {
                    writeln!(self.out, "Illegal Move. Skip.")
                } else {
                    self.print(true)
                }
            }
            Command::Save(path) => match self.game.save(&path) {
                Ok(()) => writeln!(
                    self.out,
                    "Saved {} moves to {}.",
                    self.game.history().len(),
                    path.display()
                ),
                Err(err) => {
                    warn!(%err, path = %path.display(), "save failed");
                    writeln!(self.out, "Cannot save {}: {err}", path.display())
                }
            },
            Command::Load(path) => match self.game.load(&path) {
                Ok(()) => {
                    writeln!(
                        self.out,
                        "Loaded {} moves from {}.",
                        self.game.history().len(),
                        path.display()
                    )?;
                    self.print(true)
                }
                Err(err) => {
                    warn!(%err, path = %path.display(), "load failed");
                    writeln!(self.out, "Cannot load {}: {err}", path.display())
                }
            },
        };
        written.map(|()| ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Pos};
    use crate::engine::EngineConfig;

    fn session(input: &str) -> (String, Game) {
        let game = Game::new(EngineConfig { depth: 2 });
        let mut console = Console::new(game, input.as_bytes(), Vec::new());
        console.run().unwrap();
        let Console { game, out, .. } = console;
        (String::from_utf8(out).unwrap(), game)
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, game) = session("q b 3 4");
        assert_eq!(out, "Quit game.\n");
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_input_error_ends_session() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("stream closed"))
            }
        }

        let input = io::BufReader::new(io::Read::chain("b 3\n".as_bytes(), Broken));
        let game = Game::new(EngineConfig { depth: 2 });
        let mut console = Console::new(game, input, Vec::new());
        assert!(console.run().is_err());
        assert!(console.game().history().is_empty());
        let Console { out, .. } = console;
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_initial() {
        let (out, _) = session("p");
        assert_eq!(out, render_board(&Board::new(), None));
    }

    #[test]
    fn test_human_moves() {
        let (out, game) = session("b 3 4\nw 3 3\n");
        assert!(out.contains(" 3 . . . X . . . . 3"));
        assert!(out.contains(" 3 . . X * . . . . 3"));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_illegal_move() {
        let (out, game) = session("b 1 1 w 12 0");
        assert_eq!(out, "Illegal Move. Skip.\nIllegal Move. Skip.\n");
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_depth_commands() {
        let (out, game) = session("d 3 d 0");
        assert!(out.starts_with("Set depth 3.\n"));
        assert!(out.ends_with("Can NOT set depth to 0.\n"));
        assert_eq!(game.depth(), 3);
    }

    #[test]
    fn test_unknown_input_prints_help() {
        let (out, _) = session("x");
        assert!(out.starts_with("Error Input: x\n"));
        assert!(out.contains("b x y     - move black x y"));
    }

    #[test]
    fn test_engine_move_and_undo() {
        let (out, game) = session("n u");
        assert!(out.contains(" Black 4 - White 1"));
        assert!(out.ends_with(&render_board(&Board::new(), None)));
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_engine_moves_for_side_to_move() {
        let mut game = Game::new(EngineConfig { depth: 2 });
        game.play(3, 4, Color::Black);
        game.play(3, 3, Color::White);
        let mut console = Console::new(game, "n n".as_bytes(), Vec::new());
        console.run().unwrap();
        let moves = console.game().history().moves().to_vec();
        assert_eq!(moves.len(), 4);
        assert_eq!(moves[2].color, Color::Black);
        assert_eq!(moves[3].color, Color::White);
    }

    #[test]
    fn test_start_resets() {
        let (out, game) = session("b 3 4 s");
        assert!(out.ends_with(&render_board(&Board::new(), None)));
        assert!(game.history().is_empty());
        assert_eq!(game.board().get(Pos::new(3, 4)), crate::board::Cell::Empty);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("reversi-console-{}.json", std::process::id()));
        let script = format!("b 3 4 w 3 3 save {p} s load {p}", p = path.display());
        let (out, game) = session(&script);
        let _ = std::fs::remove_file(&path);

        assert!(out.contains("Saved 2 moves to"));
        assert!(out.contains("Loaded 2 moves from"));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_load_missing_file() {
        let (out, game) = session("load /nonexistent/reversi.json");
        assert!(out.starts_with("Cannot load /nonexistent/reversi.json:"));
        assert!(game.history().is_empty());
    }
}
