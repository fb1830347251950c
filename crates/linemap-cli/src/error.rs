//! CLI errors.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// An error that stops a query from running.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// A file could not be read.
    #[error("failed to read {path}")]
    #[diagnostic(code(linemap::read_file))]
    ReadFile {
        /// The file that was read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("invalid config file {path}: {message}")]
    #[diagnostic(
        code(linemap::invalid_config),
        help("supported keys are \"skipTrivia\" (bool) and \"output\" (\"human\" or \"json\")")
    )]
    InvalidConfig {
        /// The config file.
        path: Utf8PathBuf,
        /// What was wrong with it.
        message: String,
    },
}
