//! Helper functions for terminal and HTML output

mod date;
mod html;

pub use date::*;
pub use html::*;
