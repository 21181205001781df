//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player's mark, chosen at game start and fixed for the game's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to the cell it occupies
    pub fn cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            _ => Err(crate::Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A (row, column) coordinate on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

/// Map a 1-indexed, row-major linear position (`1..=n*n`) to a coordinate.
///
/// This mapping is the contract between the engine and the input/rendering
/// layer: it defines what "typing 5" means to the player.
pub fn position_to_cell(position: usize, n: usize) -> Move {
    Move {
        row: (position - 1) / n,
        col: (position - 1) % n,
    }
}

/// Inverse of [`position_to_cell`].
pub fn cell_to_position(mv: Move, n: usize) -> usize {
    mv.row * n + mv.col + 1
}

/// The playing grid.
///
/// [`Board::new`] is the only constructor that builds a grid from scratch, so
/// a malformed board (ragged rows, partial grid) is unrepresentable. A cell
/// transitions from [`Cell::Empty`] to a mark exactly once over a game; the
/// search is the only code that writes `Empty` back, and it restores every
/// cell it touches before returning.
///
/// The board is not thread-safe. All mutation belongs on one logical thread
/// of control; a server hosting simultaneous games must give each game its
/// own instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a fresh board with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Parse a board from a compact string of `.`/`X`/`O` characters.
    ///
    /// Whitespace is filtered out; the remaining characters must form a
    /// square grid (9 characters for the standard board).
    ///
    /// # Errors
    ///
    /// Returns an error if the character count is not a perfect square or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let n = integer_sqrt(chars.len());
        if chars.is_empty() || n * n != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = vec![Cell::Empty; chars.len()];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board {
            rows: n,
            cols: n,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a coordinate.
    ///
    /// Coordinates are validated by callers (the linear-position check in the
    /// input layer guarantees range); out-of-range access panics.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Check if a coordinate holds no mark
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Place a mark, succeeding only if the cell is currently empty.
    ///
    /// This is the only public mutation primitive. An attempt on an occupied
    /// cell returns `false` and changes nothing; the caller decides whether
    /// to retry.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        let idx = self.index(row, col);
        if self.cells[idx] == Cell::Empty {
            self.cells[idx] = mark.cell();
            true
        } else {
            false
        }
    }

    /// Restore a cell to empty. Only the search uses this, to undo
    /// hypothetical placements while exploring.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
    }

    /// Count the occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All empty coordinates in row-major order (row 0 left-to-right, then
    /// row 1, and so on). The search depends on this order for its
    /// first-encountered tie-break.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut cells = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.is_empty(row, col) {
                    cells.push(Move { row, col });
                }
            }
        }
        cells
    }

    /// Compact single-line string representation, the inverse of
    /// [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                write!(f, "{}", self.get(row, col).to_char())?;
            }
        }
        Ok(())
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Guard against float rounding on exact squares
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    while root * root > n {
        root -= 1;
    }
    root
}
