//! Test suite for the board model and outcome evaluator
//! Validates the placement contract, the evaluator truth table, and the
//! linear-position mapping the input layer relies on

use oxo::{Board, Cell, Mark, Move, Outcome, cell_to_position, evaluate, position_to_cell};

mod board_model {
    use super::*;

    #[test]
    fn place_on_empty_cell_changes_exactly_that_cell() {
        let mut board = Board::new(3, 3);
        assert!(board.place(1, 2, Mark::X));

        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 2) {
                    Cell::X
                } else {
                    Cell::Empty
                };
                assert_eq!(board.get(row, col), expected);
            }
        }
    }

    #[test]
    fn place_on_occupied_cell_fails_and_changes_nothing() {
        let mut board = Board::new(3, 3);
        assert!(board.place(0, 0, Mark::O));
        let before = board.clone();

        for _ in 0..3 {
            assert!(!board.place(0, 0, Mark::X));
            assert_eq!(board, before, "repeated failed place must stay a no-op");
        }
    }

    #[test]
    fn fresh_board_is_a_full_grid_of_empty_cells() {
        let board = Board::new(3, 3);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.filled(), 0);
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn from_string_and_encode_are_inverses() {
        for s in ["XOXXOOOXX", ".........", "X...O...."] {
            let board = Board::from_string(s).unwrap();
            assert_eq!(board.encode(), s);
        }
    }

    #[test]
    fn from_string_rejects_malformed_input() {
        assert!(Board::from_string("XOX").is_err());
        assert!(Board::from_string("XOZ......").is_err());
        assert!(Board::from_string("").is_err());
    }
}

mod outcome_evaluator {
    use super::*;

    #[test]
    fn no_line_with_empty_cells_is_in_progress() {
        for s in [".........", "X........", "XO..X.O..", "XOXXOO.XX"] {
            let board = Board::from_string(s).unwrap();
            assert_eq!(evaluate(&board), Outcome::InProgress, "board {s}");
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn full_row_wins_regardless_of_other_cells() {
        for s in ["XXXOO....", "OO.XXX.O.", ".O.O..XXX"] {
            let board = Board::from_string(s).unwrap();
            assert_eq!(evaluate(&board), Outcome::Win(Mark::X), "board {s}");
        }
    }

    #[test]
    fn full_column_wins() {
        // O down the left column
        let board = Board::from_string("OX.OX.O..").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));

        // X down the right column
        let board = Board::from_string("O.XO.X..X").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn diagonals_win() {
        let primary = Board::from_string("XO..XO..X").unwrap();
        assert_eq!(evaluate(&primary), Outcome::Win(Mark::X));

        let anti = Board::from_string("X.O.O.O.X").unwrap();
        assert_eq!(evaluate(&anti), Outcome::Win(Mark::O));
    }

    #[test]
    fn win_beats_draw_on_a_full_board() {
        // Full board where X completed the bottom row with the last move
        let board = Board::from_string("XOOOOXXXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn evaluation_never_mutates_the_board() {
        let board = Board::from_string("XX.OO....").unwrap();
        let before = board.clone();
        evaluate(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}

mod position_mapping {
    use super::*;

    #[test]
    fn positions_are_one_indexed_row_major() {
        assert_eq!(position_to_cell(1, 3), Move { row: 0, col: 0 });
        assert_eq!(position_to_cell(3, 3), Move { row: 0, col: 2 });
        assert_eq!(position_to_cell(4, 3), Move { row: 1, col: 0 });
        assert_eq!(position_to_cell(9, 3), Move { row: 2, col: 2 });
    }

    #[test]
    fn mapping_round_trips_for_every_cell() {
        for pos in 1..=9 {
            let mv = position_to_cell(pos, 3);
            assert_eq!(cell_to_position(mv, 3), pos);
        }
    }
}
