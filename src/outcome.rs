//! Win and draw detection

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, Move};

/// Result of evaluating a board.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

/// Determine whether the board is won, drawn, or still in progress.
///
/// X is checked before O so the result is deterministic; in a legal game at
/// most one mark holds a completed line. This is a pure read of the grid and
/// makes no assumption that the position was reached by alternating play, so
/// it is safe to call on boards mid-exploration.
pub fn evaluate(board: &Board) -> Outcome {
    for mark in [Mark::X, Mark::O] {
        if has_line(board, mark) {
            return Outcome::Win(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Check whether `mark` fills an entire row, column, or diagonal.
///
/// The row and column scans work on any grid; the diagonal scan applies only
/// to square boards, checking the primary diagonal `(i, i)` and the
/// anti-diagonal `(i, n-1-i)`.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let target = mark.cell();
    let (rows, cols) = (board.rows(), board.cols());

    for row in 0..rows {
        if (0..cols).all(|col| board.get(row, col) == target) {
            return true;
        }
    }

    for col in 0..cols {
        if (0..rows).all(|row| board.get(row, col) == target) {
            return true;
        }
    }

    rows == cols
        && ((0..rows).all(|i| board.get(i, i) == target)
            || (0..rows).all(|i| board.get(i, cols - 1 - i) == target))
}

/// Empty cells that would complete a line for `mark` if filled this turn
pub fn winning_cells(board: &Board, mark: Mark) -> Vec<Move> {
    let mut wins = Vec::new();
    for mv in board.empty_cells() {
        let mut test = board.clone();
        test.place(mv.row, mv.col, mark);
        if has_line(&test, mark) {
            wins.push(mv);
        }
    }
    wins
}
