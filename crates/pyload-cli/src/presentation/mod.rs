//! Presentation helpers for terminal output.

mod tables;

pub use tables::{format_optional, format_speed, print_separator, truncate_string};
