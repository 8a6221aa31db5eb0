//! Multi-round tournament between two contestants.
use std::fmt;

use tracing::info;

use crate::agents::BoardGameAgent;
use crate::board_game::Mark;
use crate::error::Result;
use crate::game::Game;
use crate::render::Renderer;

/// One of the two players entered in a tournament, independent of the seat it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Contestant {
    First,
    Second,
}

impl Contestant {
    /// Who holds the X seat in `round` (0-based): the first contestant on even rounds.
    pub fn x_seat_in_round(round: usize) -> Contestant {
        if round % 2 == 0 {
            Contestant::First
        } else {
            Contestant::Second
        }
    }

    pub fn other(self) -> Contestant {
        match self {
            Contestant::First => Contestant::Second,
            Contestant::Second => Contestant::First,
        }
    }
}

impl fmt::Display for Contestant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Contestant::First => write!(f, "player 1"),
            Contestant::Second => write!(f, "player 2"),
        }
    }
}

/// Running score of a tournament, kept per contestant rather than per seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
}

impl Tally {
    /// Credit the result of one game. `winner` is the game's winning mark (Blank for a tie)
    /// and `x_seat` the contestant that played X in it.
    pub fn record(&mut self, winner: Mark, x_seat: Contestant) {
        let credited = match winner {
            Mark::X => x_seat,
            Mark::O => x_seat.other(),
            Mark::Blank => {
                self.ties += 1;
                return;
            }
        };
        match credited {
            Contestant::First => self.first_wins += 1,
            Contestant::Second => self.second_wins += 1,
        }
    }

    pub fn wins(&self, contestant: Contestant) -> usize {
        match contestant {
            Contestant::First => self.first_wins,
            Contestant::Second => self.second_wins,
        }
    }

    pub fn rounds(&self) -> usize {
        self.first_wins + self.second_wins + self.ties
    }

    /// Results block printed at the end of a tournament.
    pub fn report(&self, first_name: &str, second_name: &str) -> String {
        format!(
            "######### Results #########\n\
             Player 1, {} won: {} rounds\n\
             Player 2, {} won: {} rounds\n\
             Ties: {}",
            first_name, self.first_wins, second_name, self.second_wins, self.ties
        )
    }
}

/// Plays a fixed number of games between two agents, swapping who starts every round.
pub struct Tournament {
    rounds: usize,
    board_size: usize,
    win_streak: usize,
    renderer: Box<dyn Renderer>,
    player1: Box<dyn BoardGameAgent>,
    player2: Box<dyn BoardGameAgent>,
    tally: Tally,
}

impl Tournament {
    pub fn new(
        rounds: usize,
        board_size: usize,
        win_streak: usize,
        renderer: Box<dyn Renderer>,
        player1: Box<dyn BoardGameAgent>,
        player2: Box<dyn BoardGameAgent>,
    ) -> Tournament {
        Tournament {
            rounds,
            board_size,
            win_streak,
            renderer,
            player1,
            player2,
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Play a single round on a fresh board and credit the result. Returns the winning mark.
    pub fn play_round(&mut self, round: usize) -> Result<Mark> {
        let x_seat = Contestant::x_seat_in_round(round);
        let (player_x, player_o) = match x_seat {
            Contestant::First => (&mut self.player1, &mut self.player2),
            Contestant::Second => (&mut self.player2, &mut self.player1),
        };

        info!(round, %x_seat, "round started");
        let winner = Game::new(
            &mut **player_x,
            &mut **player_o,
            self.board_size,
            self.win_streak,
            &mut *self.renderer,
        )
        .run()?;
        self.tally.record(winner, x_seat);
        info!(round, %winner, "round finished");

        Ok(winner)
    }

    /// Play every round in order and return the final tally.
    pub fn play(&mut self) -> Result<Tally> {
        for round in 0..self.rounds {
            self.play_round(round)?;
        }
        info!(
            first_wins = self.tally.first_wins,
            second_wins = self.tally.second_wins,
            ties = self.tally.ties,
            "tournament finished"
        );
        Ok(self.tally)
    }
}
