//! Shared command handler patterns

pub mod search;

pub use search::{print_output, render_search};
