//! Output formatting.

use crate::cli::OutputFormat;
use crate::query::{QueryOutput, Report};
use std::fmt::Write;

/// Formats query results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats one query result.
    pub fn format(&self, output: &QueryOutput) -> String {
        match self.format {
            OutputFormat::Human => Self::format_human(output),
            OutputFormat::Json => Self::format_json(output),
        }
    }

    /// Formats as JSON output.
    fn format_json(output: &QueryOutput) -> String {
        let mut json = serde_json::to_string_pretty(output).unwrap_or_default();
        json.push('\n');
        json
    }

    /// Formats as human-readable output.
    fn format_human(output: &QueryOutput) -> String {
        let mut out = String::new();

        for warning in &output.warnings {
            let _ = writeln!(
                out,
                "{}:{}:{}: warning: {}",
                output.file,
                warning.line + 1,
                warning.column + 1,
                warning.message
            );
        }

        let _ = match &output.result {
            Report::LineStart {
                line,
                skip_trivia,
                offset,
            } => {
                let what = if *skip_trivia {
                    "content on line"
                } else {
                    "line"
                };
                writeln!(out, "{what} {line} starts at {}", show(offset))
            }
            Report::LineEnd { line, offset } => {
                writeln!(out, "line {line} ends at {}", show(offset))
            }
            Report::LineOf { offset, line } => {
                writeln!(out, "offset {offset} is on line {}", show(line))
            }
            Report::Range {
                start,
                end,
                line_count,
                contains_line_break,
            } => writeln!(
                out,
                "{start}..{end} spans {} line break(s), contains line break: {}",
                show(line_count),
                show(contains_line_break)
            ),
            Report::Items { items } => items.iter().try_for_each(|item| {
                writeln!(
                    out,
                    "{:<10} {}..{} line {} ({} line{})",
                    item.kind,
                    item.start,
                    item.end,
                    show(&item.start_line),
                    item.line_count,
                    if item.multi_line { "s" } else { "" }
                )
            }),
        };

        out
    }
}

fn show<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "none".to_string(),
    }
}
