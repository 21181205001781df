//! Turn alternation between the human and the computer

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Mark, Move, cell_to_position},
    outcome::{Outcome, evaluate},
    search::best_move,
};

/// Which side moves next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Computer,
}

impl Turn {
    fn other(self) -> Turn {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Won(Mark),
    Drawn,
    /// The search reported no available move mid-round
    Aborted,
}

/// The I/O boundary between the game loop and the terminal.
///
/// Rendering and move collection are the only capabilities the loop
/// consumes; styling, screen clearing, and re-prompting on invalid input all
/// belong behind this trait. `prompt_move` blocks until the human supplies a
/// move addressing an empty cell.
pub trait Ui {
    /// Draw the board. `last_computer_position` carries the linear position
    /// of the computer's most recent move once it has made one.
    fn render(&mut self, board: &Board, last_computer_position: Option<usize>)
    -> crate::Result<()>;

    /// Collect a validated move for `mark` from the human.
    fn prompt_move(&mut self, board: &Board, mark: Mark) -> crate::Result<Move>;
}

/// One round of human versus computer.
///
/// The session owns the live board exclusively; the search borrows it during
/// the computer's turns and restores every cell it touches.
pub struct Session<'a, U: Ui> {
    board: Board,
    human: Mark,
    computer: Mark,
    ui: &'a mut U,
}

impl<'a, U: Ui> Session<'a, U> {
    pub fn new(rows: usize, cols: usize, human: Mark, ui: &'a mut U) -> Self {
        Session {
            board: Board::new(rows, cols),
            human,
            computer: human.opponent(),
            ui,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Mark {
        self.human
    }

    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// Run the round to completion.
    ///
    /// X moves first, so the human opens the round exactly when they chose
    /// X. The outcome is re-evaluated after every placement and a decided
    /// board ends the round before the turn alternates.
    pub fn run(&mut self) -> crate::Result<GameResult> {
        let mut turn = if self.human == Mark::X {
            Turn::Human
        } else {
            Turn::Computer
        };
        let mut last_computer = None;
        let total = self.board.rows() * self.board.cols();

        while self.board.filled() < total {
            match turn {
                Turn::Human => {
                    self.ui.render(&self.board, last_computer)?;
                    let mv = self.ui.prompt_move(&self.board, self.human)?;
                    if !self.board.place(mv.row, mv.col, self.human) {
                        // Stale move from the Ui; ask again
                        continue;
                    }
                }
                Turn::Computer => {
                    let Some(mv) = best_move(&mut self.board, self.computer, self.human) else {
                        return Ok(GameResult::Aborted);
                    };
                    self.board.place(mv.row, mv.col, self.computer);
                    last_computer = Some(cell_to_position(mv, self.board.cols()));
                }
            }

            match evaluate(&self.board) {
                Outcome::Win(mark) => return Ok(GameResult::Won(mark)),
                Outcome::Draw => return Ok(GameResult::Drawn),
                Outcome::InProgress => {}
            }

            turn = turn.other();
        }

        Ok(GameResult::Drawn)
    }
}
