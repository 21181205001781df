//! Terminal Tic-Tac-Toe with a perfect computer opponent
//!
//! This crate provides:
//! - A board model with a single mutation primitive and 1-indexed linear
//!   position addressing
//! - A pure win/draw evaluator
//! - An exhaustive minimax search that always plays optimally, with a depth
//!   penalty that prefers the fastest win and the slowest loss
//! - A game loop that talks to the terminal through a narrow `Ui` boundary

pub mod board;
pub mod cli;
pub mod console;
pub mod error;
pub mod game;
pub mod outcome;
pub mod search;

pub use board::{Board, Cell, Mark, Move, cell_to_position, position_to_cell};
pub use console::Console;
pub use error::{Error, Result};
pub use game::{GameResult, Session, Turn, Ui};
pub use outcome::{Outcome, evaluate, has_line, winning_cells};
pub use search::{SearchResult, best_move, evaluate_moves};
