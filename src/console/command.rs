//! Console command parsing

use std::io::BufRead;
use std::path::PathBuf;

use crate::board::Color;
use crate::error::CommandError;

pub const HELP: &str = "\
q/p/d/s/n/u/w/b/save/load
          q         - quit game
          p         - print board
          d x       - depth x
          s         - start game
          n         - next move
          u         - move undo
          b x y     - move black x y
          w x y     - move white x y
          save file - save moves to file
          load file - load moves from file";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Print,
    Depth(u8),
    Start,
    Next,
    Undo,
    Play { color: Color, row: i32, col: i32 },
    Save(PathBuf),
    Load(PathBuf),
}

/// Whitespace-separated tokens pulled from a reader on demand.
///
/// Commands and their arguments may span lines.
pub struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
        Ok(self.pending.pop())
    }
}

fn argument<R: BufRead>(
    tokens: &mut Tokens<R>,
    command: &str,
) -> Result<String, CommandError> {
    tokens
        .next_token()?
        .ok_or_else(|| CommandError::MissingArgument {
            command: command.to_string(),
        })
}

fn number<R: BufRead>(tokens: &mut Tokens<R>, command: &str) -> Result<i64, CommandError> {
    let token = argument(tokens, command)?;
    token
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber { token })
}

fn coordinate<R: BufRead>(tokens: &mut Tokens<R>, command: &str) -> Result<i32, CommandError> {
    let token = argument(tokens, command)?;
    token
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidNumber { token })
}

impl Command {
    /// Parse the command named by `verb`, pulling its arguments from `tokens`
    pub fn parse<R: BufRead>(verb: &str, tokens: &mut Tokens<R>) -> Result<Self, CommandError> {
        let command = match verb {
            "q" => Command::Quit,
            "p" => Command::Print,
            "s" => Command::Start,
            "n" => Command::Next,
            "u" => Command::Undo,
            "d" => {
                let depth = number(tokens, verb)?;
                match u8::try_from(depth) {
                    Ok(d) if d > 0 => Command::Depth(d),
                    _ => return Err(CommandError::InvalidDepth { depth }),
                }
            }
            "b" | "w" => {
                let color = if verb == "b" { Color::Black } else { Color::White };
                let row = coordinate(tokens, verb)?;
                let col = coordinate(tokens, verb)?;
                Command::Play { color, row, col }
            }
            "save" => Command::Save(PathBuf::from(argument(tokens, verb)?)),
            "load" => Command::Load(PathBuf::from(argument(tokens, verb)?)),
            _ => {
                return Err(CommandError::UnknownCommand {
                    token: verb.to_string(),
                })
            }
        };
        Ok(command)
    }
}
