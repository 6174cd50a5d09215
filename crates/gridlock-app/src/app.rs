//! REPL command loop over a play session.

use std::io::{self, BufRead as _, Write as _};

use gridlock_game::Session;

use crate::render;

const HELP: &str = "\
commands (rows and columns are 0-based):
  set R C V   enter value V at row R, column C (0 clears)
  clear R C   clear the cell at row R, column C
  show        print the board
  check       print the state of every row, column, and region
  play        lock the entered givens and start playing
  help        print this message
  quit        exit";

/// The terminal application: one session plus the command loop.
pub(crate) struct App {
    session: Session,
}

/// One parsed REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Set {
        row: usize,
        column: usize,
        value: usize,
    },
    Clear {
        row: usize,
        column: usize,
    },
    Show,
    Check,
    Play,
    Help,
    Quit,
}

impl App {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            session: Session::new(rows, columns),
        }
    }

    /// Runs the command loop until `quit` or end of input.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        println!("enter the puzzle's givens, then `play` (`help` for commands)");
        println!("{}", render::board(self.session.board()));

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut line = String::new();
        loop {
            print!("> ");
            stdout.flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            match parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.dispatch(command),
                Ok(None) => {}
                Err(message) => println!("error: {message}"),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) {
        log::debug!("dispatching {command:?}");
        match command {
            Command::Set { row, column, value } => {
                match self.session.set_value(row, column, value) {
                    Ok(()) => {
                        println!("{}", render::board(self.session.board()));
                        if self.session.phase().is_play() && self.session.is_solved() {
                            println!("solved!");
                        }
                    }
                    // The failed write leaves the board as displayed.
                    Err(err) => println!("error: {err}"),
                }
            }
            Command::Clear { row, column } => match self.session.clear(row, column) {
                Ok(()) => println!("{}", render::board(self.session.board())),
                Err(err) => println!("error: {err}"),
            },
            Command::Show => println!("{}", render::board(self.session.board())),
            Command::Check => print!("{}", render::report(&self.session)),
            Command::Play => match self.session.begin_play() {
                Ok(()) => println!("givens locked, good luck"),
                Err(err) => println!("error: {err}"),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => unreachable!("quit is handled by the loop"),
        }
    }
}

/// Parses one input line; `Ok(None)` for a blank line.
fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "set" => Command::Set {
            row: number(words.next(), "row")?,
            column: number(words.next(), "column")?,
            value: number(words.next(), "value")?,
        },
        "clear" => Command::Clear {
            row: number(words.next(), "row")?,
            column: number(words.next(), "column")?,
        },
        "show" => Command::Show,
        "check" => Command::Check,
        "play" => Command::Play,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };

    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument: {extra}"));
    }
    Ok(Some(command))
}

fn number(word: Option<&str>, name: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("missing {name}"))?;
    word.parse()
        .map_err(|_| format!("{name} must be a number, got {word}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            parse("set 1 2 3\n"),
            Ok(Some(Command::Set {
                row: 1,
                column: 2,
                value: 3
            }))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("\n"), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse("show"), Ok(Some(Command::Show)));
        assert_eq!(parse("check"), Ok(Some(Command::Check)));
        assert_eq!(parse("play"), Ok(Some(Command::Play)));
        assert_eq!(parse("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("set 1 2").is_err());
        assert!(parse("set 1 2 x").is_err());
        assert!(parse("set 1 2 3 4").is_err());
        assert!(parse("frobnicate").is_err());
    }
}
