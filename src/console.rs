//! Terminal presentation and input collection
//!
//! Everything that touches stdin and stdout lives here; the game loop only
//! sees this layer through the [`Ui`] trait.

use std::io::{self, BufRead, Write};

use crate::{
    board::{Board, Cell, Mark, Move, cell_to_position, position_to_cell},
    game::{GameResult, Ui},
};

/// ANSI styling constants used by the renderer.
///
/// Stateless by design: the engine never depends on these, and plain mode
/// skips them entirely.
pub mod style {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const DIM: &str = "\x1b[2m";
}

/// The move-input contract: the line parses as an integer, lies within
/// `1..=n*n`, and addresses a currently empty cell.
pub fn valid_position(board: &Board, input: &str) -> bool {
    let n = board.cols();
    match input.trim().parse::<usize>() {
        Ok(pos) if (1..=n * n).contains(&pos) => {
            let mv = position_to_cell(pos, n);
            board.is_empty(mv.row, mv.col)
        }
        _ => false,
    }
}

/// Terminal front end. Construct with `styled = false` for plain output
/// without colors or screen clearing.
pub struct Console {
    styled: bool,
}

impl Console {
    pub fn new(styled: bool) -> Self {
        Console { styled }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.styled {
            format!("{code}{text}{}", style::RESET)
        } else {
            text.to_string()
        }
    }

    fn mark_glyph(&self, mark: Mark) -> String {
        match mark {
            Mark::X => self.paint("X", style::RED),
            Mark::O => self.paint("O", style::BLUE),
        }
    }

    pub fn clear_screen(&self) {
        if self.styled {
            print!("\x1b[2J\x1b[1;1H");
            let _ = io::stdout().flush();
        }
    }

    /// Render the grid with box-drawing borders. Empty cells show their
    /// linear position as a placement hint.
    pub fn draw(&self, board: &Board) -> String {
        let n = board.cols();
        let rows = board.rows();

        let edge = |left: &str, mid: &str, right: &str| {
            let mut line = String::from(left);
            for col in 0..n {
                line.push_str("───");
                line.push_str(if col + 1 == n { right } else { mid });
            }
            line.push('\n');
            line
        };

        let mut out = edge("╭", "┬", "╮");
        for row in 0..rows {
            out.push('│');
            for col in 0..n {
                let symbol = match board.get(row, col) {
                    Cell::X => self.mark_glyph(Mark::X),
                    Cell::O => self.mark_glyph(Mark::O),
                    Cell::Empty => {
                        let hint = cell_to_position(Move { row, col }, n).to_string();
                        self.paint(&hint, style::DIM)
                    }
                };
                out.push(' ');
                out.push_str(&symbol);
                out.push_str(" │");
            }
            out.push('\n');
            if row + 1 < rows {
                out.push_str(&edge("├", "┼", "┤"));
            }
        }
        out.push_str(&edge("╰", "┴", "╯"));
        out
    }

    /// Read stdin lines until `accept` approves one.
    ///
    /// A rejected line prints `error_message` and prompts again; the
    /// accepted line is returned trimmed.
    pub fn prompt<F>(&self, message: &str, accept: F, error_message: &str) -> crate::Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let stdin = io::stdin();
        loop {
            print!("{message}");
            io::stdout().flush().map_err(|source| crate::Error::Io {
                operation: "flush prompt".to_string(),
                source,
            })?;

            let mut line = String::new();
            let bytes = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|source| crate::Error::Io {
                    operation: "read player input".to_string(),
                    source,
                })?;
            if bytes == 0 {
                return Err(crate::Error::Io {
                    operation: "read player input".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"),
                });
            }

            let line = line.trim().to_string();
            if accept(&line) {
                return Ok(line);
            }
            println!("{}", self.paint(error_message, style::RED));
        }
    }

    /// Ask which mark the human wants to play
    pub fn choose_mark(&self) -> crate::Result<Mark> {
        let answer = self.prompt(
            "[*] Choose your mark (X/O): ",
            |line| line.parse::<Mark>().is_ok(),
            "Invalid mark, please try again.",
        )?;
        answer.parse()
    }

    /// Print the verdict from the human's perspective
    pub fn announce(&self, result: GameResult, human: Mark) {
        let message = match result {
            GameResult::Won(mark) if mark == human => "[*] You won! [*]",
            GameResult::Won(_) => "[*] You lost! [*]",
            GameResult::Drawn => "[*] Tie! [*]",
            GameResult::Aborted => "[*] No moves left, round abandoned. [*]",
        };
        println!("{message}");
    }
}

impl Ui for Console {
    fn render(
        &mut self,
        board: &Board,
        last_computer_position: Option<usize>,
    ) -> crate::Result<()> {
        self.clear_screen();
        print!("{}", self.draw(board));
        match last_computer_position {
            Some(pos) => println!("[*] Computer move -> {pos}"),
            None => println!("[*] Waiting for your move..."),
        }
        Ok(())
    }

    fn prompt_move(&mut self, board: &Board, mark: Mark) -> crate::Result<Move> {
        let n = board.cols();
        let message = format!("[*] Your move {} -> (1-{})?: ", self.mark_glyph(mark), n * n);

        loop {
            let answer = self.prompt(
                &message,
                |line| valid_position(board, line),
                "Invalid move, please try again.",
            )?;
            // The predicate guarantees this parses; loop instead of panicking
            if let Ok(pos) = answer.parse::<usize>() {
                return Ok(position_to_cell(pos, n));
            }
        }
    }
}
