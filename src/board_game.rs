//! Shared vocabulary for n x n streak games: marks and game states.
use std::fmt;

use Mark::{Blank, O, X};

/// Did the game end in a draw or was there a winner?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndState {
    Winner(Mark),
    Draw,
}

/// Has the game ended or is it ongoing?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Ended(EndState),
    Ongoing,
}

/// The content of a single board cell. X always makes the first move of a game.
#[derive(Eq, Hash, Clone, Copy, Debug, PartialEq)]
pub enum Mark {
    Blank,
    X,
    O,
}

impl Mark {
    /// The mark of the other seat. Blank has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            X => O,
            O => X,
            Blank => Blank,
        }
    }

    pub fn is_blank(self) -> bool {
        self == Blank
    }

    /// Single character used when drawing a board.
    pub fn symbol(self) -> char {
        match self {
            Blank => '.',
            X => 'X',
            O => 'O',
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Blank
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Blank => write!(f, "blank"),
            X => write!(f, "X"),
            O => write!(f, "O"),
        }
    }
}

impl From<EndState> for Mark {
    /// A draw is reported as Blank, a win as the winning mark.
    fn from(end: EndState) -> Self {
        match end {
            EndState::Winner(mark) => mark,
            EndState::Draw => Blank,
        }
    }
}

#[test]
fn test_opponent() {
    assert_eq!(X.opponent(), O);
    assert_eq!(O.opponent(), X);
    assert_eq!(Blank.opponent(), Blank);
    assert_eq!(X.opponent().opponent(), X);
}

#[test]
fn test_end_state_into_mark() {
    assert_eq!(Mark::from(EndState::Winner(O)), O);
    assert_eq!(Mark::from(EndState::Draw), Blank);
    assert_eq!(Mark::default(), Blank);
}
