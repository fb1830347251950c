//! Text buffers and line tables for linemap.
//!
//! A [`TextBuffer`] owns the characters of one document together with a
//! [`LineIndex`] over them. Everything that needs line information goes through
//! the [`LineTable`] trait so that hosts can plug in their own document model.

mod buffer;
mod line_index;
mod line_table;
mod span;

pub use buffer::TextBuffer;
pub use line_index::{LineCol, LineIndex};
pub use line_table::{LineTable, LineTableError};
pub use span::{ByteOffset, Span};
