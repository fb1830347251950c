//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Line and offset queries over a source file.
///
/// Lines are zero-based; offsets are byte offsets.
#[derive(Debug, Parser)]
#[command(name = "linemap")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory searched for `linemap.json`
    #[arg(long, default_value = ".", global = true)]
    pub workspace: Utf8PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// The query to run.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Offset where a line starts, past leading whitespace and comments
    LineStart {
        /// Source file
        file: Utf8PathBuf,
        /// Zero-based line index
        line: u32,
        /// Report the raw line start instead of skipping trivia
        #[arg(long = "keep-trivia")]
        keep_trivia: bool,
    },
    /// Offset one past the last character of a line
    LineEnd {
        /// Source file
        file: Utf8PathBuf,
        /// Zero-based line index
        line: u32,
    },
    /// Line containing an offset
    LineOf {
        /// Source file
        file: Utf8PathBuf,
        /// Byte offset
        offset: u32,
    },
    /// Line breaks between two offsets (either order)
    Range {
        /// Source file
        file: Utf8PathBuf,
        /// First byte offset
        start: u32,
        /// Second byte offset
        end: u32,
    },
    /// Top-level items with their line spans
    Items {
        /// Source file
        file: Utf8PathBuf,
    },
}

impl Command {
    /// The file the query reads.
    pub fn file(&self) -> &Utf8PathBuf {
        match self {
            Command::LineStart { file, .. }
            | Command::LineEnd { file, .. }
            | Command::LineOf { file, .. }
            | Command::Range { file, .. }
            | Command::Items { file } => file,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_start() {
        let args = Args::try_parse_from(["linemap", "line-start", "a.lm", "3", "--keep-trivia"])
            .unwrap();
        match args.command {
            Command::LineStart {
                file,
                line,
                keep_trivia,
            } => {
                assert_eq!(file, "a.lm");
                assert_eq!(line, 3);
                assert!(keep_trivia);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_global_output_flag() {
        let args =
            Args::try_parse_from(["linemap", "range", "a.lm", "9", "2", "--output", "json"])
                .unwrap();
        assert_eq!(args.output, Some(OutputFormat::Json));
        assert_eq!(args.command.file(), "a.lm");
    }

    #[test]
    fn test_negative_line_is_rejected() {
        assert!(Args::try_parse_from(["linemap", "line-end", "a.lm", "-1"]).is_err());
    }
}
