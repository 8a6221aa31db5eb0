//! Players for n x n tic-tac-toe.
mod lookahead_agent;
pub use lookahead_agent::{LookaheadAgent, LOOKAHEAD_STREAK};

use std::io::{self, BufRead};
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::board_game::Mark;
use crate::error::{ConfigError, ConfigErrorKind, Error, Result};
use crate::tic_tac_toe::Board;

/// An agent that places exactly one mark on the board each time it is asked to play. The
/// board always has at least one blank cell when a game controller calls it.
pub trait BoardGameAgent {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()>;
}

/// Seed the agent's own generator, from entropy unless a seed is given.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draw random coordinates until one lands on a blank cell, and mark it.
pub(crate) fn place_randomly(
    rng: &mut impl Rng,
    board: &mut Board,
    mark: Mark,
) -> Result<(usize, usize)> {
    if board.is_full() {
        return Err(Error::BoardFull);
    }
    let size = board.size();
    loop {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        if board.mark_at(row, col).is_blank() && board.put_mark(mark, row, col) {
            return Ok((row, col));
        }
    }
}

/*
 * -----------
 * Human Agent
 * -----------
 */

const INVALID_NUMBER: &str = "Invalid input, please enter a number:";
const INVALID_POSITION: &str = "Invalid mark position. Please choose a different position:";
const CELL_TAKEN: &str = "Mark position is already occupied. Please choose a different position:";

/// Where a human player's numbers come from.
pub trait MoveSource {
    /// Block until the next integer arrives. Lines that are not integers are skipped.
    fn read_int(&mut self) -> io::Result<i64>;
}

/// Parse one line of input. None if it is not an integer.
fn parse_int(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Reads numbers from the process's stdin.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinSource;

impl MoveSource for StdinSource {
    fn read_int(&mut self) -> io::Result<i64> {
        loop {
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
            }
            match parse_int(&input) {
                Some(value) => return Ok(value),
                None => println!("{}", INVALID_NUMBER),
            }
        }
    }
}

/// Reads numbers from any buffered reader, one per line.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> LineSource<R> {
        LineSource { reader }
    }
}

impl<R: BufRead> MoveSource for LineSource<R> {
    fn read_int(&mut self) -> io::Result<i64> {
        loop {
            let mut input = String::new();
            if self.reader.read_line(&mut input)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }
            if let Some(value) = parse_int(&input) {
                return Ok(value);
            }
        }
    }
}

/// An agent controlled by the user running the program.
///
/// A move is typed as a two digit number: the tens digit is the row, the units digit the
/// column, so "12" means row 1, column 2. Bad input is rejected and asked for again.
pub struct HumanAgent<S: MoveSource = StdinSource> {
    source: S,
}

impl HumanAgent {
    pub fn new() -> HumanAgent {
        HumanAgent {
            source: StdinSource,
        }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSource> HumanAgent<S> {
    pub fn with_source(source: S) -> HumanAgent<S> {
        HumanAgent { source }
    }
}

impl<S: MoveSource> BoardGameAgent for HumanAgent<S> {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        if board.is_full() {
            return Err(Error::BoardFull);
        }
        println!("Player {}, type coordinates: ", mark);
        loop {
            let value = self.source.read_int()?;
            if !(0..=99).contains(&value) {
                println!("{}", INVALID_POSITION);
                continue;
            }
            let (row, col) = ((value / 10) as usize, (value % 10) as usize);
            if !board.contains(row, col) {
                println!("{}", INVALID_POSITION);
                continue;
            }
            if board.put_mark(mark, row, col) {
                debug!(%mark, row, col, "human placed mark");
                return Ok(());
            }
            println!("{}", CELL_TAKEN);
        }
    }
}

/*
 * ------------
 * Random Agent
 * ------------
 */

/// Agent that marks a uniformly random blank cell, with no lookahead.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(rng: ChaCha8Rng) -> RandomAgent {
        RandomAgent { rng }
    }
}

impl BoardGameAgent for RandomAgent {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        let (row, col) = place_randomly(&mut self.rng, board, mark)?;
        debug!(%mark, row, col, "random agent placed mark");
        Ok(())
    }
}

/*
 * -------
 * Factory
 * -------
 */

/// Player strategy selected by name on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Whatever,
    Clever,
    Genius,
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(key: &str) -> std::result::Result<Self, Self::Err> {
        match key.to_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "whatever" => Ok(PlayerKind::Whatever),
            "clever" => Ok(PlayerKind::Clever),
            "genius" => Ok(PlayerKind::Genius),
            _ => Err(ConfigError::new(ConfigErrorKind::UnknownPlayer(
                key.to_string(),
            ))),
        }
    }
}

impl PlayerKind {
    /// Build the agent. Automated agents draw from their own generator, seeded with `seed`
    /// when one is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn BoardGameAgent> {
        match self {
            PlayerKind::Human => Box::new(HumanAgent::new()),
            PlayerKind::Whatever => Box::new(RandomAgent::new(seeded_rng(seed))),
            PlayerKind::Clever => Box::new(LookaheadAgent::clever(seeded_rng(seed))),
            PlayerKind::Genius => Box::new(LookaheadAgent::genius(seeded_rng(seed))),
        }
    }
}
