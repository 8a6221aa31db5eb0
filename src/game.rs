//! A single game: two agents take turns on a fresh board until someone wins or the board fills.
use tracing::{debug, instrument};

use crate::agents::BoardGameAgent;
use crate::board_game::EndState::{Draw, Winner};
use crate::board_game::GameState::{Ended, Ongoing};
use crate::board_game::{GameState, Mark};
use crate::error::Result;
use crate::render::Renderer;
use crate::streak::find_winner;
use crate::tic_tac_toe::Board;

use Mark::{O, X};

/// Win streak used when the requested one does not fit the board.
pub const DEFAULT_WIN_STREAK: usize = 3;

/// Turn controller for one game. The agent in the X seat moves first.
pub struct Game<'a> {
    board: Board,
    player_x: &'a mut dyn BoardGameAgent,
    player_o: &'a mut dyn BoardGameAgent,
    renderer: &'a mut dyn Renderer,
    win_streak: usize,
    next_turn: Mark,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Set up a game on an empty `size` x `size` board.
    ///
    /// A `win_streak` outside `2..=size` is silently replaced by `DEFAULT_WIN_STREAK`.
    pub fn new(
        player_x: &'a mut dyn BoardGameAgent,
        player_o: &'a mut dyn BoardGameAgent,
        size: usize,
        win_streak: usize,
        renderer: &'a mut dyn Renderer,
    ) -> Game<'a> {
        let win_streak = if (2..=size).contains(&win_streak) {
            win_streak
        } else {
            DEFAULT_WIN_STREAK
        };
        Game {
            board: Board::new(size),
            player_x,
            player_o,
            renderer,
            win_streak,
            next_turn: X,
            state: Ongoing,
        }
    }

    pub fn win_streak(&self) -> usize {
        self.win_streak
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Play one turn: the seat to move places a mark, the board is rendered and checked.
    /// Does nothing once the game has ended.
    pub fn step(&mut self) -> Result<GameState> {
        if let Ended(_) = self.state {
            return Ok(self.state);
        }
        // a board with no cells at all can only be a draw
        if self.board.is_full() {
            self.state = Ended(Draw);
            return Ok(self.state);
        }

        let mark = self.next_turn;
        match mark {
            O => self.player_o.play_turn(&mut self.board, mark)?,
            _ => self.player_x.play_turn(&mut self.board, mark)?,
        }
        debug!(%mark, board = ?self.board, "turn played");
        self.renderer.render_board(&self.board);

        self.state = if let Some(winner) = find_winner(&self.board, self.win_streak) {
            Ended(Winner(winner))
        } else if self.board.is_full() {
            Ended(Draw)
        } else {
            self.next_turn = mark.opponent();
            Ongoing
        };
        Ok(self.state)
    }

    /// Play until the game ends. Returns the winning mark, or Blank for a tie.
    #[instrument(skip(self), fields(size = self.board.size(), win_streak = self.win_streak))]
    pub fn run(&mut self) -> Result<Mark> {
        loop {
            if let Ended(end) = self.step()? {
                debug!(?end, "game over");
                return Ok(end.into());
            }
        }
    }
}
