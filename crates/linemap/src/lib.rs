//! Line and offset queries over syntax trees and their text buffers.
//!
//! Three coordinate spaces meet here: byte offsets, zero-based line numbers,
//! and the ranges of syntax tree elements. This crate answers questions that
//! cross between them without owning any of them:
//!
//! - [`accessor`]: line ↔ offset lookups on a [`LineTable`], returning `None`
//!   instead of failing.
//! - [`LineMapping::line_start_offset`]: line starts that optionally skip
//!   leading whitespace and comments by walking forward through siblings.
//! - [`LineMapping::line_count`] and [`line_count_in_range`]: how many lines
//!   an element or a range occupies.
//!
//! The tree and the buffer are reached through the [`SourceFile`] and
//! [`TreeElement`] traits. [`ParsedFile`] implements them for the `syntax`
//! crate.
//!
//! # Example
//!
//! ```
//! use linemap::{LineMapping, ParsedFile, Project, ProjectId, FileId};
//! use std::sync::Arc;
//! use text_size::TextSize;
//!
//! let project = Arc::new(Project::new(ProjectId(0), "demo"));
//! let file = ParsedFile::new(FileId(0), project, "foo\n  // c\nbar()\n");
//!
//! assert_eq!(file.line_start_offset_with(1, false), Some(TextSize::from(4)));
//! assert_eq!(file.line_start_offset(1), Some(TextSize::from(11)));
//! ```
//!
//! [`LineTable`]: text_buffer::LineTable

pub mod accessor;
mod host;
mod mapping;
mod span;
mod syntax_impl;
mod tree;
mod trivia;

pub use host::{DocumentManager, FileId, ParsedFile, Project, ProjectId};
pub use mapping::LineMapping;
pub use span::{contains_line_break, count_line_breaks, line_count_in_range};
pub use tree::{Edge, SourceFile, TreeElement};
pub use trivia::skip_trivia_forward;
