use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use streak_tournament::agents::seeded_rng;
use streak_tournament::{
    Board, BoardGameAgent, Contestant, LookaheadAgent, Mark, RandomAgent, Result, Tally,
    Tournament, VoidRenderer,
};

/// Fills a 3x3 board into a layout with no three in a row, whichever mark it is given.
///
/// X O X
/// X O O
/// O X X
struct DrawAgent;

const DRAW_LAYOUT: [[Mark; 3]; 3] = [
    [Mark::X, Mark::O, Mark::X],
    [Mark::X, Mark::O, Mark::O],
    [Mark::O, Mark::X, Mark::X],
];

impl BoardGameAgent for DrawAgent {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        for (row, line) in DRAW_LAYOUT.iter().enumerate() {
            for (col, &target) in line.iter().enumerate() {
                if target == mark && board.put_mark(mark, row, col) {
                    return Ok(());
                }
            }
        }
        panic!("draw layout has no cell left for {}", mark);
    }
}

/// Marks the first blank cell in row-major order, and remembers which mark it played.
struct FirstBlankAgent {
    marks: Rc<RefCell<Vec<Mark>>>,
}

impl FirstBlankAgent {
    fn new() -> (FirstBlankAgent, Rc<RefCell<Vec<Mark>>>) {
        let marks = Rc::new(RefCell::new(Vec::new()));
        (
            FirstBlankAgent {
                marks: Rc::clone(&marks),
            },
            marks,
        )
    }
}

impl BoardGameAgent for FirstBlankAgent {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        let (row, col) = board.blank_cells()[0];
        assert!(board.put_mark(mark, row, col));
        self.marks.borrow_mut().push(mark);
        Ok(())
    }
}

#[test]
fn always_drawing_players_tie_every_round() {
    let mut tournament = Tournament::new(
        2,
        3,
        3,
        Box::new(VoidRenderer),
        Box::new(DrawAgent),
        Box::new(DrawAgent),
    );
    let tally = tournament.play().unwrap();
    assert_eq!(
        tally,
        Tally {
            first_wins: 0,
            second_wins: 0,
            ties: 2
        }
    );
}

#[test]
fn wins_are_credited_to_the_contestant() {
    // on 3x3 with a streak of 2, first-blank play always ends with O taking (1, 0)
    let (first, _) = FirstBlankAgent::new();
    let (second, _) = FirstBlankAgent::new();
    let mut tournament = Tournament::new(
        5,
        3,
        2,
        Box::new(VoidRenderer),
        Box::new(first),
        Box::new(second),
    );
    assert_eq!(tournament.play_round(0).unwrap(), Mark::O);
    assert_eq!(tournament.tally().second_wins, 1);
    assert_eq!(tournament.play_round(1).unwrap(), Mark::O);
    assert_eq!(tournament.tally().first_wins, 1);

    let mut tournament = Tournament::new(
        5,
        3,
        2,
        Box::new(VoidRenderer),
        Box::new(FirstBlankAgent::new().0),
        Box::new(FirstBlankAgent::new().0),
    );
    let tally = tournament.play().unwrap();
    assert_eq!(tally.first_wins, 2);
    assert_eq!(tally.second_wins, 3);
    assert_eq!(tally.ties, 0);
}

#[test]
fn seeded_random_tournament_is_reproducible() {
    let run = || {
        Tournament::new(
            20,
            4,
            3,
            Box::new(VoidRenderer),
            Box::new(RandomAgent::new(seeded_rng(Some(1)))),
            Box::new(LookaheadAgent::clever(seeded_rng(Some(2)))),
        )
        .play()
        .unwrap()
    };
    let tally = run();
    assert_eq!(tally.rounds(), 20);
    assert_eq!(tally, run());
}

proptest! {
    #[test]
    fn contestant_one_starts_every_other_round(rounds in 0usize..30) {
        let (first, first_marks) = FirstBlankAgent::new();
        let (second, second_marks) = FirstBlankAgent::new();
        let mut tournament = Tournament::new(
            rounds,
            3,
            3,
            Box::new(VoidRenderer),
            Box::new(first),
            Box::new(second),
        );

        let mut x_rounds = 0;
        let mut expected = Tally::default();
        for round in 0..rounds {
            let winner = tournament.play_round(round).unwrap();
            let first_mark = *first_marks.borrow().last().unwrap();
            let second_mark = *second_marks.borrow().last().unwrap();
            prop_assert_eq!(first_mark, second_mark.opponent());
            prop_assert_eq!(first_mark == Mark::X, Contestant::x_seat_in_round(round) == Contestant::First);
            if first_mark == Mark::X {
                x_rounds += 1;
            }
            // the winner's mark belongs to whichever contestant held it this round
            if winner == first_mark {
                expected.first_wins += 1;
            } else if winner == second_mark {
                expected.second_wins += 1;
            } else {
                expected.ties += 1;
            }
            prop_assert_eq!(tournament.tally(), expected);
        }
        prop_assert_eq!(x_rounds, (rounds + 1) / 2);
        prop_assert_eq!(tournament.tally().rounds(), rounds);
    }
}
