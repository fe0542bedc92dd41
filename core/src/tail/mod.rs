//! Bounded tail capture with live pass-through.
//!
//! [`capture`] drains one child stream line by line, mirrors every line to an
//! echo destination, and keeps only the most recent lines in a [`LineTail`].

mod buffer;
mod tee;

pub use buffer::LineTail;
pub use tee::{capture, MAX_LINE_BYTES};
