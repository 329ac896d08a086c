//! Exercises in conditions and loops: numeric puzzles, string utilities,
//! plane geometry, matrix multiplication and tic-tac-toe evaluation.
//!
//! Every function is pure and independent of the others.

#![forbid(unsafe_code)]

mod geometry;
mod matrix;
mod numbers;
mod strings;
mod tic_tac_toe;

pub use geometry::{CanvasRect, Circle, Point, do_rectangles_overlap, is_inside_circle, is_triangle};
pub use matrix::{Matrix, get_matrix_product};
pub use numbers::{
    FizzBuzz, get_digital_root, get_factorial, get_fizz_buzz, get_sum_between_numbers,
    is_credit_card_number, reverse_integer, to_nary_string,
};
pub use strings::{
    find_first_single_char, get_common_directory_path, get_interval_string, is_brackets_balanced,
    reverse_string,
};
pub use tic_tac_toe::{Board, Mark, evaluate_tic_tac_toe_position};
