//! Running queries against a parsed file.

use crate::cli::Command;
use crate::config::Config;
use crate::error::CliError;
use camino::Utf8Path;
use linemap::{
    contains_line_break, line_count_in_range, Edge, FileId, LineMapping, ParsedFile, Project,
    ProjectId,
};
use serde::Serialize;
use std::fs;
use std::sync::Arc;
use syntax::SyntaxKind;
use text_buffer::{Span, TextBuffer};
use text_size::TextSize;

/// The answer to one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "kebab-case")]
pub enum Report {
    /// `line-start`
    #[serde(rename_all = "camelCase")]
    LineStart {
        line: u32,
        skip_trivia: bool,
        offset: Option<u32>,
    },
    /// `line-end`
    LineEnd { line: u32, offset: Option<u32> },
    /// `line-of`
    LineOf { offset: u32, line: Option<u32> },
    /// `range`
    #[serde(rename_all = "camelCase")]
    Range {
        start: u32,
        end: u32,
        line_count: Option<u32>,
        contains_line_break: Option<bool>,
    },
    /// `items`
    Items { items: Vec<Item> },
}

/// A top-level item and the lines it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub kind: String,
    pub start: u32,
    pub end: u32,
    pub start_line: Option<u32>,
    pub line_count: u32,
    pub multi_line: bool,
}

/// A parse error, located for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column.
    pub column: u32,
    pub message: String,
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutput {
    pub file: String,
    pub result: Report,
    pub warnings: Vec<Warning>,
}

/// Reads the command's file and answers its query.
pub fn run(command: &Command, config: &Config) -> Result<QueryOutput, CliError> {
    let path = command.file();
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.clone(),
        source,
    })?;
    Ok(answer(path, &text, command, config))
}

/// Answers a query over `text`.
pub fn answer(path: &Utf8Path, text: &str, command: &Command, config: &Config) -> QueryOutput {
    let project = Arc::new(Project::new(ProjectId(0), "cli"));
    let file = ParsedFile::new(FileId(0), project, text);

    let result = match *command {
        Command::LineStart { line, .. } => Report::LineStart {
            line,
            skip_trivia: config.skip_trivia,
            offset: file
                .line_start_offset_with(line, config.skip_trivia)
                .map(u32::from),
        },
        Command::LineEnd { line, .. } => Report::LineEnd {
            line,
            offset: file.line_end_offset(line).map(u32::from),
        },
        Command::LineOf { offset, .. } => Report::LineOf {
            offset,
            line: file.line_of_offset(TextSize::from(offset)),
        },
        Command::Range { start, end, .. } => {
            let span = Span::new(start, end);
            let buffer = file.resolved_buffer();
            Report::Range {
                start,
                end,
                line_count: buffer.and_then(|b| line_count_in_range(b, span)),
                contains_line_break: buffer.and_then(|b| contains_line_break(b, span)),
            }
        }
        Command::Items { .. } => Report::Items {
            items: items(&file),
        },
    };

    QueryOutput {
        file: path.to_string(),
        result,
        warnings: warnings(&file),
    }
}

fn items(file: &ParsedFile) -> Vec<Item> {
    file.root()
        .children_with_tokens()
        .filter(|element| !element.kind().is_trivia())
        .map(|element| {
            let range = element.text_range();
            let line_count = file.line_count(&element);
            Item {
                kind: kind_name(element.kind()),
                start: u32::from(range.start()),
                end: u32::from(range.end()),
                start_line: file.element_line(&element, Edge::Start),
                line_count,
                multi_line: line_count > 1,
            }
        })
        .collect()
}

fn kind_name(kind: SyntaxKind) -> String {
    format!("{kind:?}")
}

fn warnings(file: &ParsedFile) -> Vec<Warning> {
    let Some(index) = file.resolved_buffer().map(TextBuffer::index) else {
        return Vec::new();
    };
    file.parse()
        .errors
        .iter()
        .map(|error| {
            let position = index.line_col(error.span.start).unwrap_or_default();
            Warning {
                line: position.line,
                column: position.col,
                message: error.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(text: &str, command: Command) -> QueryOutput {
        answer(Utf8Path::new("test.lm"), text, &command, &Config::default())
    }

    #[test]
    fn test_line_start_skips_trivia_by_default() {
        let output = query(
            "foo\n  // c\nbar()\n",
            Command::LineStart {
                file: "test.lm".into(),
                line: 1,
                keep_trivia: false,
            },
        );
        assert_eq!(
            output.result,
            Report::LineStart {
                line: 1,
                skip_trivia: true,
                offset: Some(11),
            }
        );
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_items_report_line_spans() {
        let output = query(
            "let a = 1;\nf(\n  a)\n",
            Command::Items {
                file: "test.lm".into(),
            },
        );
        assert_eq!(
            output.result,
            Report::Items {
                items: vec![
                    Item {
                        kind: "LetStmt".to_string(),
                        start: 0,
                        end: 10,
                        start_line: Some(0),
                        line_count: 1,
                        multi_line: false,
                    },
                    Item {
                        kind: "ExprStmt".to_string(),
                        start: 11,
                        end: 18,
                        start_line: Some(1),
                        line_count: 2,
                        multi_line: true,
                    },
                ]
            }
        );
    }

    #[test]
    fn test_parse_errors_become_warnings() {
        let output = query(
            "a\n  )",
            Command::LineOf {
                file: "test.lm".into(),
                offset: 99,
            },
        );
        assert_eq!(
            output.result,
            Report::LineOf {
                offset: 99,
                line: None
            }
        );
        assert_eq!(
            output.warnings,
            vec![Warning {
                line: 1,
                column: 2,
                message: "unexpected token: expected expression, found ')'".to_string(),
            }]
        );
    }
}
