//! Exhaustive minimax move selection for the computer opponent
//!
//! The search explores every legal continuation of the current board,
//! assuming both sides play perfectly, and picks the move with the best
//! depth-adjusted score. The 3x3 game tree is small enough that no pruning,
//! memoization, or alpha-beta cutoff is needed.
//!
//! Exploration mutates the board in place with a place/recurse/restore
//! bracket instead of copying it per branch; every placement is undone on
//! every path out of the recursion, so the board comes back byte-for-byte
//! identical.

use crate::{
    board::{Board, Mark, Move},
    outcome::{Outcome, evaluate},
};

/// Score of a terminal state won by the computer
pub const WIN: i32 = 100;
/// Score of a terminal state won by the human
pub const LOSS: i32 = -100;

/// A candidate move together with its depth-adjusted minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    pub score: i32,
}

/// Depth-adjusted minimax value of the current position.
///
/// Terminal positions score their raw value (draw 0, computer win [`WIN`],
/// human win [`LOSS`]). Every non-terminal level returns its best child score
/// reduced by the current depth, which biases ties toward the fastest win
/// and the slowest loss; it is a tie-break, not a correctness requirement.
fn minimax(board: &mut Board, maximizing: bool, depth: i32, computer: Mark, human: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Draw => return 0,
        Outcome::Win(mark) => {
            return if mark == computer { WIN } else { LOSS };
        }
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best = LOSS;
        for mv in board.empty_cells() {
            board.place(mv.row, mv.col, computer);
            let score = minimax(board, false, depth + 1, computer, human);
            board.clear(mv.row, mv.col);
            best = best.max(score);
        }
        best - depth
    } else {
        let mut best = WIN;
        for mv in board.empty_cells() {
            board.place(mv.row, mv.col, human);
            let score = minimax(board, true, depth + 1, computer, human);
            board.clear(mv.row, mv.col);
            best = best.min(score);
        }
        best - depth
    }
}

/// Score every empty cell as a computer move, in row-major order.
///
/// Each hypothetical placement is undone before the next candidate is tried,
/// so the board is unchanged when this returns.
pub fn evaluate_moves(board: &mut Board, computer: Mark, human: Mark) -> Vec<SearchResult> {
    let mut results = Vec::new();
    for mv in board.empty_cells() {
        board.place(mv.row, mv.col, computer);
        let score = minimax(board, false, 0, computer, human);
        board.clear(mv.row, mv.col);
        results.push(SearchResult { mv, score });
    }
    results
}

/// Pick the computer's optimal move, or `None` when no cell is empty.
///
/// The comparison is strict, so among equally-scored candidates the first
/// one in row-major order wins. Callers must handle `None` before applying
/// the move.
pub fn best_move(board: &mut Board, computer: Mark, human: Mark) -> Option<Move> {
    let mut best_score = LOSS;
    let mut best = None;

    for SearchResult { mv, score } in evaluate_moves(board, computer, human) {
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    best
}
