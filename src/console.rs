//! Terminal presentation layer.
//!
//! Maps one line of input to one engine call and re-renders the board
//! and status line afterwards. All game rules live in `xo_engine`.

use crate::config::{IndexBase, XoConfig};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument, warn};
use xo_engine::{Game, Placement, RejectReason};

const HELP: &str = "\
Commands:
  <cell>     place your mark on a cell
  reset, r   start a new game
  board, b   show the board again
  help, h    show this help
  quit, q    leave";

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark on the cell with this number (as the player sees it).
    Place(usize),
    /// Start a fresh game.
    Reset,
    /// Render the board again.
    Board,
    /// Show the command list.
    Help,
    /// Leave the console.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input: {input:?}")]
pub struct ParseCommandError {
    /// The offending line, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(number) = input.parse::<usize>() {
            return Ok(Command::Place(number));
        }
        match input.to_ascii_lowercase().as_str() {
            "reset" | "r" => Ok(Command::Reset),
            "board" | "b" => Ok(Command::Board),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError {
                input: input.to_string(),
            }),
        }
    }
}

/// Interactive console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    game: Game,
    config: XoConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with a fresh game.
    pub fn new(config: XoConfig, input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            config,
            input,
            output,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!(error = %e, "Ignoring input");
                    writeln!(self.output, "{e}. Type \"help\" for commands.")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Applies one command and renders its effect.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Place(number) => self.place(number),
            Command::Reset => {
                self.game.reset();
                self.render()
            }
            Command::Board => self.render(),
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn place(&mut self, number: usize) -> anyhow::Result<()> {
        let base = *self.config.index_base();
        let placement = match base.to_index(number) {
            Some(index) => self.game.place(index),
            None => Placement::Rejected(RejectReason::OutOfRange(number)),
        };

        match placement {
            Placement::Applied { .. } => self.render(),
            Placement::Rejected(reason) => {
                if *self.config.report_rejections() {
                    writeln!(self.output, "{}", describe_rejection(reason, number, base))?;
                }
                Ok(())
            }
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let frame = render_frame(&self.game, *self.config.index_base());
        writeln!(self.output, "{frame}")?;
        Ok(())
    }
}

/// Board grid followed by the status line.
pub fn render_frame(game: &Game, base: IndexBase) -> String {
    format!(
        "{}\n{}",
        game.board().display(base.offset()),
        game.status_line()
    )
}

/// Rejection message in the player's numbering.
fn describe_rejection(reason: RejectReason, number: usize, base: IndexBase) -> String {
    match reason {
        RejectReason::OutOfRange(_) => format!(
            "Cell {} is not on the board ({}-{}).",
            number,
            base.to_number(0),
            base.to_number(8)
        ),
        RejectReason::Occupied(position) => format!(
            "Cell {} ({}) is already taken.",
            base.to_number(position.to_index()),
            position.label()
        ),
        RejectReason::GameOver(status) => {
            format!("The game is over ({status}). Type \"reset\" to play again.")
        }
    }
}

/// Applies cell numbers in order and writes the final frame.
///
/// Rejected numbers are skipped, as in the console. With `json` the
/// output is the engine snapshot instead of the text frame.
#[instrument(skip(config, output))]
pub fn replay<W: Write>(
    numbers: &[usize],
    config: &XoConfig,
    json: bool,
    mut output: W,
) -> anyhow::Result<Game> {
    let base = *config.index_base();
    let mut game = Game::new();

    for &number in numbers {
        let placement = match base.to_index(number) {
            Some(index) => game.place(index),
            None => Placement::Rejected(RejectReason::OutOfRange(number)),
        };
        if let Some(reason) = placement.rejection() {
            warn!(number, %reason, "Skipping rejected move");
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut output, &game.snapshot())?;
        writeln!(output)?;
    } else {
        writeln!(output, "{}", render_frame(&game, base))?;
    }
    Ok(game)
}
