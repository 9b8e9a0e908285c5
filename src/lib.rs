//! xo - terminal tic-tac-toe.
//!
//! The rules live in [`xo_engine`]; this crate adds the pieces around
//! them: configuration and a line-oriented console that turns each input
//! line into one `place` or `reset` call.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use xo::{Console, GameStatus, Player, XoConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = Cursor::new("0\n4\n1\n5\n2\n");
//! let mut console = Console::new(XoConfig::default(), input, Vec::new());
//! console.run()?;
//! assert_eq!(console.game().status(), GameStatus::Won(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
pub mod logging;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, IndexBase, XoConfig};

// Crate-level exports - Presentation layer
pub use console::{Command, Console, ParseCommandError, render_frame, replay};

// Crate-level exports - Game types
pub use xo_engine::{
    Board, Game, GameState, GameStatus, Placement, Player, Position, RejectReason, Snapshot,
    Square,
};
