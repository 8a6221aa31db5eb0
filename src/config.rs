//! Command-line interface and tournament configuration.

use clap::Parser;

use crate::agents::PlayerKind;
use crate::error::{ConfigError, ConfigErrorKind};
use crate::render::RendererKind;
use crate::tournament::Tournament;

/// Play a tournament of n x n tic-tac-toe between two computer or human players
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "streak-tournament")]
#[command(version)]
pub struct Cli {
    /// Number of rounds to play
    pub rounds: usize,

    /// Board size (the board is size x size)
    pub size: usize,

    /// Marks in a row needed to win
    pub win_streak: usize,

    /// Renderer: console or void
    pub renderer: String,

    /// First player: human, whatever, clever or genius
    pub player1: String,

    /// Second player: human, whatever, clever or genius
    pub player2: String,

    /// Seed for the computer players' random moves
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Validated settings for a tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentConfig {
    pub rounds: usize,
    pub size: usize,
    pub win_streak: usize,
    pub renderer: RendererKind,
    pub player1: PlayerKind,
    pub player2: PlayerKind,
    // names the players were given on the command line, used in the results
    pub player1_name: String,
    pub player2_name: String,
    pub seed: Option<u64>,
}

impl TournamentConfig {
    /// Check the settings before any round is played.
    pub fn new(
        rounds: usize,
        size: usize,
        win_streak: usize,
        renderer: &str,
        player1: &str,
        player2: &str,
    ) -> Result<TournamentConfig, ConfigError> {
        if size == 0 {
            return Err(ConfigError::new(ConfigErrorKind::EmptyBoard));
        }
        if win_streak > size {
            return Err(ConfigError::new(ConfigErrorKind::StreakExceedsBoard {
                streak: win_streak,
                size,
            }));
        }
        Ok(TournamentConfig {
            rounds,
            size,
            win_streak,
            renderer: renderer.parse()?,
            player1: player1.parse()?,
            player2: player2.parse()?,
            player1_name: player1.to_string(),
            player2_name: player2.to_string(),
            seed: None,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<TournamentConfig, ConfigError> {
        let config = TournamentConfig::new(
            cli.rounds,
            cli.size,
            cli.win_streak,
            &cli.renderer,
            &cli.player1,
            &cli.player2,
        )?;
        Ok(config.with_seed(cli.seed))
    }

    pub fn with_seed(self, seed: Option<u64>) -> TournamentConfig {
        TournamentConfig { seed, ..self }
    }

    /// Build the tournament. With a seed, the second player's generator gets `seed + 1` so
    /// the two never mirror each other.
    pub fn build(&self) -> Tournament {
        Tournament::new(
            self.rounds,
            self.size,
            self.win_streak,
            self.renderer.build(),
            self.player1.build(self.seed),
            self.player2.build(self.seed.map(|seed| seed.wrapping_add(1))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("streak-tournament").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn parses_positionals_and_seed() {
        let cli = cli(&["10", "4", "3", "void", "genius", "Whatever", "--seed", "9"]);
        let config = TournamentConfig::from_cli(&cli).unwrap();
        assert_eq!(config.rounds, 10);
        assert_eq!(config.size, 4);
        assert_eq!(config.win_streak, 3);
        assert_eq!(config.renderer, RendererKind::Void);
        assert_eq!(config.player1, PlayerKind::Genius);
        assert_eq!(config.player2, PlayerKind::Whatever);
        assert_eq!(config.player2_name, "Whatever");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn missing_positional_is_rejected() {
        let parsed = Cli::try_parse_from(["streak-tournament", "10", "4", "3", "void", "genius"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_streak_longer_than_board() {
        let err = TournamentConfig::new(1, 3, 4, "void", "whatever", "whatever").unwrap_err();
        assert_eq!(
            err.kind,
            ConfigErrorKind::StreakExceedsBoard { streak: 4, size: 3 }
        );
    }

    #[test]
    fn rejects_unknown_kinds() {
        let err = TournamentConfig::new(1, 3, 3, "void", "whatever", "alphazero").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::UnknownPlayer("alphazero".to_string()));
        let err = TournamentConfig::new(1, 3, 3, "hologram", "whatever", "clever").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::UnknownRenderer("hologram".to_string()));
        let err = TournamentConfig::new(1, 0, 0, "void", "whatever", "clever").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::EmptyBoard);
    }

    #[test]
    fn short_streak_is_left_to_the_game() {
        // streaks below 2 are not a configuration error, each game falls back to 3
        let config = TournamentConfig::new(2, 3, 1, "void", "whatever", "whatever").unwrap();
        assert_eq!(config.win_streak, 1);
        let tally = config.with_seed(Some(5)).build().play().unwrap();
        assert_eq!(tally.rounds(), 2);
    }
}
