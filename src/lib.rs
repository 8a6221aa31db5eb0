//! n x n tic-tac-toe with configurable win streaks, lookahead players and a tournament runner.
//!
//! A [`Tournament`] plays a number of [`Game`]s between two [`BoardGameAgent`]s, swapping who
//! plays X every round. Each game runs on a fresh [`Board`] and ends once
//! [`streak::find_winner`] reports a streak of the configured length or the board fills up.
pub mod agents;
pub mod board_game;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod streak;
pub mod tic_tac_toe;
pub mod tournament;

pub use agents::{BoardGameAgent, HumanAgent, LookaheadAgent, PlayerKind, RandomAgent};
pub use board_game::{EndState, GameState, Mark};
pub use config::{Cli, TournamentConfig};
pub use error::{ConfigError, ConfigErrorKind, Error, Result};
pub use game::Game;
pub use render::{ConsoleRenderer, Renderer, RendererKind, VoidRenderer};
pub use tic_tac_toe::Board;
pub use tournament::{Contestant, Tally, Tournament};
