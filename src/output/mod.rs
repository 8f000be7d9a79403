//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    KEYBOARD_ROWS, print_board, print_check_result, print_history, print_keyboard, print_summary,
};
pub use formatters::format_elapsed;
