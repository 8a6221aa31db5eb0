//! Streak detection shared by the game controller and the lookahead agents.
//!
//! Both callers ask the same question at different lengths: does a run of `k` identical marks
//! exist along one of the four line directions? The controller asks it for the configured win
//! streak over the whole board, the lookahead agents ask it for a streak of 3 through one
//! candidate cell.
use crate::board_game::Mark;
use crate::tic_tac_toe::Board;

/// Line directions as (row delta, col delta), in scan order: right, down, down-right,
/// down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Step `steps` cells from (row, col) along (dr, dc). None once the walk leaves the board.
fn step(
    board: &Board,
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
    steps: usize,
) -> Option<(usize, usize)> {
    let steps = steps as isize;
    let r = row.checked_add_signed(dr.checked_mul(steps)?)?;
    let c = col.checked_add_signed(dc.checked_mul(steps)?)?;
    if board.contains(r, c) {
        Some((r, c))
    } else {
        None
    }
}

/// Count the cells holding `mark` that follow (row, col) along `direction`, not counting the
/// starting cell. Stops at the first mismatch or board edge, and never counts past `limit`.
pub fn run_length(
    board: &Board,
    origin: (usize, usize),
    mark: Mark,
    direction: (isize, isize),
    limit: usize,
) -> usize {
    let mut run = 0;
    while run < limit {
        match step(board, origin, direction, run + 1) {
            Some((r, c)) if board.mark_at(r, c) == mark => run += 1,
            _ => break,
        }
    }
    run
}

/// Return the mark owning a streak of `streak` cells, if any.
///
/// Every occupied cell is tried as the start of a line in row-major order, and from each the
/// four directions in `DIRECTIONS` order. The first complete streak found wins.
pub fn find_winner(board: &Board, streak: usize) -> Option<Mark> {
    let steps = streak.saturating_sub(1);
    for row in 0..board.size() {
        for col in 0..board.size() {
            let mark = board.mark_at(row, col);
            if mark.is_blank() {
                continue;
            }
            for &direction in DIRECTIONS.iter() {
                if run_length(board, (row, col), mark, direction, steps) == steps {
                    return Some(mark);
                }
            }
        }
    }
    None
}

/// Would `mark` placed at (row, col) sit inside a streak of at least `streak` cells?
///
/// The cell itself is assumed to hold `mark`; its current content is not read.
pub fn completes_streak(
    board: &Board,
    row: usize,
    col: usize,
    mark: Mark,
    streak: usize,
) -> bool {
    let reach = streak.saturating_sub(1);
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, (row, col), mark, (dr, dc), reach);
        let backward = run_length(board, (row, col), mark, (-dr, -dc), reach);
        1 + forward + backward >= streak
    })
}
