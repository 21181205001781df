//! Analyze command - minimax evaluation of positions and policy export
//!
//! For a given position this reports the depth-adjusted minimax score of
//! every candidate move. With `--export` it walks every position reachable
//! by alternating play from the empty board and writes the optimal move for
//! each of the computer's decision states as JSON.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    path::PathBuf,
};

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::{
    Board, Mark, Outcome,
    board::cell_to_position,
    cli::output,
    outcome::evaluate,
    search::evaluate_moves,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyMode {
    /// Encode a single optimal move per position
    Single,
    /// Encode all moves tied at the optimal score
    Full,
}

impl PolicyMode {
    fn as_str(&self) -> &'static str {
        match self {
            PolicyMode::Single => "single",
            PolicyMode::Full => "full",
        }
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board position as 9 characters of `.`/`X`/`O` (default: empty board)
    pub board: Option<String>,

    /// Mark the computer plays
    #[arg(long, default_value = "X")]
    pub mark: Mark,

    /// Write the optimal policy for every reachable decision state to this file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export granularity
    #[arg(long, value_enum, default_value_t = PolicyMode::Single)]
    pub mode: PolicyMode,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s)?,
        None => Board::new(3, 3),
    };
    let computer = args.mark;

    output::print_section("Minimax analysis");
    println!("{board}\n");

    match evaluate(&board) {
        Outcome::Win(mark) => println!("Position is terminal: {mark} has won."),
        Outcome::Draw => println!("Position is terminal: draw."),
        Outcome::InProgress => analyze_position(board.clone(), computer, args.mode),
    }

    if let Some(path) = &args.export {
        export_policy(path, computer, args.mode)?;
        println!("\nOptimal policy exported to: {}", path.display());
    }

    Ok(())
}

/// Print per-candidate scores and the optimal choice for one position
fn analyze_position(mut board: Board, computer: Mark, mode: PolicyMode) {
    let n = board.cols();
    let human = computer.opponent();
    let results = evaluate_moves(&mut board, computer, human);

    println!("Candidate moves for {computer}:");
    for r in &results {
        let pos = cell_to_position(r.mv, n);
        println!(
            "  position {pos} (row {}, col {}) -> score {}",
            r.mv.row, r.mv.col, r.score
        );
    }

    match mode {
        PolicyMode::Single => {
            if let Some(r) = top_candidate(&results) {
                output::print_kv("Optimal move", &cell_to_position(r.mv, n).to_string());
            }
        }
        PolicyMode::Full => {
            if let Some(best) = results.iter().map(|r| r.score).max() {
                let tied: Vec<usize> = results
                    .iter()
                    .filter(|r| r.score == best)
                    .map(|r| cell_to_position(r.mv, n))
                    .collect();
                output::print_kv("Optimal moves", &format!("{tied:?} (score {best})"));
            }
        }
    }
}

/// First candidate carrying the maximum score. Candidates arrive in
/// row-major order, so ties resolve the same way the game loop does.
fn top_candidate(results: &[crate::SearchResult]) -> Option<&crate::SearchResult> {
    let best = results.iter().map(|r| r.score).max()?;
    results.iter().find(|r| r.score == best)
}

#[derive(Serialize)]
struct PolicyExport {
    description: &'static str,
    computer: String,
    mode: &'static str,
    total_positions: usize,
    policy: HashMap<String, PolicyEntry>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PolicyEntry {
    Single(usize),
    Multiple(Vec<usize>),
}

fn encode_state(board: &Board, to_move: Mark) -> String {
    format!("{}_{}", board.encode(), to_move)
}

/// Every position reachable by alternating play from the empty board with X
/// opening, paired with the mark to move. Terminal positions are collected
/// but not expanded.
pub(crate) fn reachable_positions() -> Vec<(Board, Mark)> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut positions = Vec::new();

    let root = (Board::new(3, 3), Mark::X);
    visited.insert(encode_state(&root.0, root.1));
    queue.push_back(root);

    while let Some((board, to_move)) = queue.pop_front() {
        if evaluate(&board) == Outcome::InProgress {
            for mv in board.empty_cells() {
                let mut next = board.clone();
                next.place(mv.row, mv.col, to_move);
                let key = encode_state(&next, to_move.opponent());
                if visited.insert(key) {
                    queue.push_back((next, to_move.opponent()));
                }
            }
        }
        positions.push((board, to_move));
    }

    positions
}

/// Compute the optimal move for every reachable state where `computer` is to
/// move and write the policy as JSON
fn export_policy(path: &PathBuf, computer: Mark, mode: PolicyMode) -> Result<()> {
    let spinner = output::create_spinner("Enumerating reachable positions...");
    let positions = reachable_positions();
    spinner.finish_with_message(format!("{} reachable positions", positions.len()));

    let human = computer.opponent();
    let decisions: Vec<Board> = positions
        .iter()
        .filter(|(board, to_move)| *to_move == computer && evaluate(board) == Outcome::InProgress)
        .map(|(board, _)| board.clone())
        .collect();

    let bar = output::create_solve_progress(decisions.len() as u64);
    let mut policy = HashMap::new();

    for board in &decisions {
        let mut scratch = board.clone();
        let n = scratch.cols();
        let results = evaluate_moves(&mut scratch, computer, human);
        let entry = match mode {
            PolicyMode::Single => {
                let Some(r) = top_candidate(&results) else {
                    continue;
                };
                PolicyEntry::Single(cell_to_position(r.mv, n))
            }
            PolicyMode::Full => {
                let Some(best) = results.iter().map(|r| r.score).max() else {
                    continue;
                };
                PolicyEntry::Multiple(
                    results
                        .iter()
                        .filter(|r| r.score == best)
                        .map(|r| cell_to_position(r.mv, n))
                        .collect(),
                )
            }
        };
        policy.insert(encode_state(board, computer), entry);
        bar.inc(1);
    }
    bar.finish();

    let export = PolicyExport {
        description: "Optimal (minimax) policy for Tic-Tac-Toe",
        computer: computer.to_string(),
        mode: mode.as_str(),
        total_positions: policy.len(),
        policy,
    };

    let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(file, &export).map_err(crate::Error::from)?;

    Ok(())
}
