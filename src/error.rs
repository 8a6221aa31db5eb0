//! Error types.

use derive_more::Display;
use tracing::instrument;

/// What was wrong with the tournament configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The player key did not name a known strategy.
    #[display("unknown player kind {_0:?}, expected human, whatever, clever or genius")]
    UnknownPlayer(String),
    /// The renderer key did not name a known renderer.
    #[display("unknown renderer kind {_0:?}, expected console or void")]
    UnknownRenderer(String),
    /// The win streak can never be reached on the board.
    #[display("win streak {streak} cannot be greater than the board size {size}")]
    StreakExceedsBoard {
        /// Requested streak length.
        streak: usize,
        /// Requested board size.
        size: usize,
    },
    /// A board needs at least one cell.
    #[display("board size must be at least 1")]
    EmptyBoard,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Everything that can stop a tournament.
#[derive(Debug, Display, derive_more::Error, derive_more::From)]
pub enum Error {
    /// The tournament was configured with values it cannot run.
    #[display("{_0}")]
    Config(ConfigError),
    /// The human player's input stream failed or closed.
    #[display("input error: {_0}")]
    Input(std::io::Error),
    /// A player was asked to move on a board with no blank cells.
    #[display("no blank cell left to play")]
    #[from(ignore)]
    BoardFull,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_error_records_location() {
        let err = ConfigError::new(ConfigErrorKind::EmptyBoard);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
        assert!(err.to_string().starts_with("Config error: board size must be at least 1 at "));
    }

    #[test]
    fn crate_error_wraps_sources() {
        let err: Error = ConfigError::new(ConfigErrorKind::UnknownRenderer("vga".into())).into();
        assert!(err.to_string().contains("unknown renderer kind \"vga\""));
        assert!(err.source().is_some());

        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io.into();
        assert_eq!(err.to_string(), "input error: stdin closed");
        assert!(Error::BoardFull.source().is_none());
    }
}
