//! Tic-tac-toe behind the core [`Environment`] trait.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use cognitive_cycle_core::traits::{Environment, RenderMode, StepInfo, StepOutcome};

use crate::board::{Board, Mark, CELL_COUNT};

/// Reward for winning.
pub const WIN_REWARD: f32 = 1.0;
/// Reward for losing.
pub const LOSE_REWARD: f32 = -1.0;
/// Reward for a draw.
pub const DRAW_REWARD: f32 = 0.0;
/// Penalty for an illegal move.
pub const ILLEGAL_MOVE_PENALTY: f32 = -0.1;

/// Tic-tac-toe against a uniform-random opponent. The agent plays `X`;
/// after each legal agent move the opponent marks one random blank cell
/// with `O`. A finished game accepts further steps as soft no-ops, and
/// `step(None)` is a sense-only step at any point.
pub struct TicTacToeEnv {
    board: Board,
    rng: ChaCha8Rng,
    done: bool,
}

impl TicTacToeEnv {
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            done: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn outcome(&self, reward: f32, comment: &str) -> StepOutcome<[i8; CELL_COUNT]> {
        StepOutcome {
            observation: self.board.as_observation(),
            reward,
            done: self.done,
            info: StepInfo {
                state: self.board.to_string(),
                done: self.done,
                comment: comment.into(),
            },
        }
    }
}

impl Environment for TicTacToeEnv {
    type Obs = [i8; CELL_COUNT];

    fn reset(&mut self) {
        self.board = Board::new();
        self.done = false;
    }

    fn step(&mut self, action: Option<i64>) -> StepOutcome<[i8; CELL_COUNT]> {
        if self.done {
            warn!("step on a finished game; call reset() to start a new episode");
            return self.outcome(0.0, "post-game action");
        }

        let Some(requested) = action else {
            return self.outcome(0.0, "");
        };

        let cell = usize::try_from(requested)
            .ok()
            .filter(|&cell| self.board.is_blank(cell));
        let Some(cell) = cell else {
            warn!(action = requested, "illegal action");
            return self.outcome(ILLEGAL_MOVE_PENALTY, "illegal action");
        };

        self.board[cell] = Mark::X;
        if self.board.winner() == Some(Mark::X) {
            self.done = true;
            return self.outcome(WIN_REWARD, "player wins");
        }
        if self.board.is_full() {
            self.done = true;
            return self.outcome(DRAW_REWARD, "draw");
        }

        let blanks = self.board.blanks();
        if let Some(&opponent) = blanks.choose(&mut self.rng) {
            self.board[opponent] = Mark::O;
            debug!(agent = cell, opponent, "moves played");
            if self.board.winner() == Some(Mark::O) {
                self.done = true;
                return self.outcome(LOSE_REWARD, "opponent wins");
            }
        }
        self.outcome(0.0, "")
    }

    fn render(&mut self, mode: RenderMode) -> Option<[i8; CELL_COUNT]> {
        match mode {
            RenderMode::Human => {
                println!("{}", self.board);
                None
            }
            RenderMode::Observation => Some(self.board.as_observation()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_only_steps_leave_the_board_alone() {
        let mut env = TicTacToeEnv::new(42);
        let outcome = env.step(None);
        assert_eq!(outcome.observation, [0; 9]);
        assert_eq!(outcome.reward, 0.0);
        assert!(!outcome.done);
        assert_eq!(outcome.info.comment, "");
    }

    #[test]
    fn a_legal_move_places_x_and_the_opponent_answers_with_o() {
        let mut env = TicTacToeEnv::new(42);
        let outcome = env.step(Some(4));
        assert_eq!(outcome.observation[4], 1);
        assert_eq!(outcome.observation.iter().filter(|&&c| c == -1).count(), 1);
        assert_eq!(outcome.observation.iter().filter(|&&c| c == 0).count(), 7);
    }

    #[test]
    fn illegal_moves_are_penalized_without_touching_the_board() {
        let mut env = TicTacToeEnv::new(42);
        let before = env.step(Some(4)).observation;

        for illegal in [Some(4), Some(9), Some(-1)] {
            let outcome = env.step(illegal);
            assert_eq!(outcome.reward, ILLEGAL_MOVE_PENALTY);
            assert_eq!(outcome.info.comment, "illegal action");
            assert_eq!(outcome.observation, before);
            assert!(!outcome.done);
        }
    }

    #[test]
    fn finished_games_step_as_soft_noops() {
        let mut env = TicTacToeEnv::new(42);
        env.board = Board::try_from([1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();

        // completing the top row wins regardless of the opponent seed
        let winning = env.step(Some(2));
        assert!(winning.done);
        assert_eq!(winning.reward, WIN_REWARD);
        assert_eq!(winning.info.comment, "player wins");

        let after = env.step(Some(5));
        assert_eq!(after.reward, 0.0);
        assert!(after.done);
        assert_eq!(after.info.comment, "post-game action");
        assert_eq!(after.observation, winning.observation);
    }

    #[test]
    fn filling_the_last_cell_without_a_win_is_a_draw() {
        let mut env = TicTacToeEnv::new(42);
        // X O X / X O O / O X _ with X to move at 8
        env.board = Board::try_from([1, -1, 1, 1, -1, -1, -1, 1, 0]).unwrap();

        let outcome = env.step(Some(8));
        assert!(outcome.done);
        assert_eq!(outcome.reward, DRAW_REWARD);
        assert_eq!(outcome.info.comment, "draw");
    }

    #[test]
    fn an_opponent_win_is_reported_as_a_loss() {
        let mut env = TicTacToeEnv::new(42);
        // O threatens both the top row (cell 2) and the left column
        // (cell 6); after X takes 7, either opponent reply wins
        env.board = Board::try_from([-1, -1, 0, -1, 1, 1, 0, 0, 1]).unwrap();

        let outcome = env.step(Some(7));
        assert!(outcome.done);
        assert_eq!(outcome.reward, LOSE_REWARD);
        assert_eq!(outcome.info.comment, "opponent wins");
        assert!(outcome.observation[2] == -1 || outcome.observation[6] == -1);
    }

    #[test]
    fn reset_restores_a_blank_live_board() {
        let mut env = TicTacToeEnv::new(42);
        env.board = Board::try_from([1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        let outcome = env.step(Some(2));
        assert!(outcome.done);

        env.reset();
        assert!(env.board().is_empty());
        assert!(!env.is_done());
        let outcome = env.step(None);
        assert!(!outcome.done);
    }

    #[test]
    fn render_returns_the_observation_but_prints_for_humans() {
        let mut env = TicTacToeEnv::new(42);
        assert_eq!(env.render(RenderMode::Observation), Some([0; 9]));
        assert_eq!(env.render(RenderMode::Human), None);
    }
}
