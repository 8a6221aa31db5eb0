//! One-ply lookahead agents.
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::agents::{place_randomly, BoardGameAgent};
use crate::board_game::Mark;
use crate::error::{Error, Result};
use crate::streak::completes_streak;
use crate::tic_tac_toe::Board;

/// Streak length the lookahead agents aim for, whatever the game's win streak is.
pub const LOOKAHEAD_STREAK: usize = 3;

/// Agent that looks exactly one move ahead.
///
/// It takes the first blank cell (row-major) that completes a streak of `LOOKAHEAD_STREAK`
/// for itself. The genius variant otherwise takes the first cell that would complete one for
/// the opponent. Failing both it plays a random blank cell.
#[derive(Clone, Debug)]
pub struct LookaheadAgent {
    rng: ChaCha8Rng,
    // also deny the opponent's immediate wins?
    blocks: bool,
}

impl LookaheadAgent {
    /// Looks for its own immediate wins only.
    pub fn clever(rng: ChaCha8Rng) -> LookaheadAgent {
        LookaheadAgent { rng, blocks: false }
    }

    /// Looks for its own immediate wins, then for the opponent's.
    pub fn genius(rng: ChaCha8Rng) -> LookaheadAgent {
        LookaheadAgent { rng, blocks: true }
    }

    /// The cell the lookahead settles on, or None if only a random move is left.
    pub fn find_move(&self, board: &Board, mark: Mark) -> Option<(usize, usize)> {
        let blanks = board.blank_cells();

        if let Some((row, col)) = first_completing(board, &blanks, mark) {
            debug!(%mark, row, col, "lookahead found a winning cell");
            return Some((row, col));
        }
        if self.blocks {
            if let Some((row, col)) = first_completing(board, &blanks, mark.opponent()) {
                debug!(%mark, row, col, "lookahead blocks the opponent");
                return Some((row, col));
            }
        }
        None
    }
}

/// First of `blanks` where `mark` would complete a lookahead streak.
fn first_completing(
    board: &Board,
    blanks: &[(usize, usize)],
    mark: Mark,
) -> Option<(usize, usize)> {
    blanks
        .iter()
        .copied()
        .find(|&(row, col)| completes_streak(board, row, col, mark, LOOKAHEAD_STREAK))
}

impl BoardGameAgent for LookaheadAgent {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        if board.is_full() {
            return Err(Error::BoardFull);
        }
        if let Some((row, col)) = self.find_move(board, mark) {
            // find_move only ever offers blank cells
            let placed = board.put_mark(mark, row, col);
            debug_assert!(placed);
            return Ok(());
        }
        let (row, col) = place_randomly(&mut self.rng, board, mark)?;
        debug!(%mark, row, col, "lookahead fell back to a random cell");
        Ok(())
    }
}
