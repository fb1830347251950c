//! Configuration loading.

use crate::cli::{Args, Command, OutputFormat};
use crate::error::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "linemap.json";

/// Contents of `linemap.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    /// Skip leading whitespace and comments in `line-start`.
    pub skip_trivia: Option<bool>,
    /// Default output format.
    pub output: Option<OutputFormat>,
}

impl ConfigFile {
    /// Loads configuration from a file.
    pub fn load(path: &Utf8Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| CliError::InvalidConfig {
            path: path.to_owned(),
            message: e.to_string(),
        })
    }

    /// Finds and loads `linemap.json` in `workspace`, if present.
    pub fn find(workspace: &Utf8Path) -> Result<Option<(Utf8PathBuf, Self)>, CliError> {
        let path = workspace.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(|config| Some((path, config)))
    }
}

/// Settings for one run, after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skip leading whitespace and comments in `line-start`.
    pub skip_trivia: bool,
    /// Output format.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_trivia: true,
            output: OutputFormat::Human,
        }
    }
}

impl Config {
    /// Resolves settings: defaults, then `linemap.json`, then flags.
    pub fn resolve(args: &Args) -> Result<Self, CliError> {
        let mut config = Self::default();

        if let Some((path, file)) = ConfigFile::find(&args.workspace)? {
            tracing::debug!(%path, "loaded config file");
            config.merge_file(&file);
        }

        if let Some(output) = args.output {
            config.output = output;
        }
        if let Command::LineStart {
            keep_trivia: true, ..
        } = args.command
        {
            config.skip_trivia = false;
        }

        Ok(config)
    }

    fn merge_file(&mut self, file: &ConfigFile) {
        if let Some(skip_trivia) = file.skip_trivia {
            self.skip_trivia = skip_trivia;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn workspace_with_config(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
        dir
    }

    fn utf8(dir: &tempfile::TempDir) -> String {
        Utf8PathBuf::try_from(dir.path().to_path_buf())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = utf8(&dir);
        let args =
            Args::try_parse_from(["linemap", "--workspace", &workspace, "items", "a.lm"]).unwrap();
        assert_eq!(Config::resolve(&args).unwrap(), Config::default());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = workspace_with_config(r#"{ "skipTrivia": false, "output": "json" }"#);
        let workspace = utf8(&dir);

        let args =
            Args::try_parse_from(["linemap", "--workspace", &workspace, "line-start", "a.lm", "0"])
                .unwrap();
        let config = Config::resolve(&args).unwrap();
        assert!(!config.skip_trivia);
        assert_eq!(config.output, OutputFormat::Json);

        let args = Args::try_parse_from([
            "linemap",
            "--workspace",
            &workspace,
            "--output",
            "human",
            "line-start",
            "a.lm",
            "0",
        ])
        .unwrap();
        assert_eq!(Config::resolve(&args).unwrap().output, OutputFormat::Human);
    }

    #[test]
    fn test_keep_trivia_flag_wins() {
        let dir = workspace_with_config(r#"{ "skipTrivia": true }"#);
        let workspace = utf8(&dir);
        let args = Args::try_parse_from([
            "linemap",
            "--workspace",
            &workspace,
            "line-start",
            "a.lm",
            "0",
            "--keep-trivia",
        ])
        .unwrap();
        assert!(!Config::resolve(&args).unwrap().skip_trivia);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = workspace_with_config(r#"{ "skip": true }"#);
        let workspace = utf8(&dir);
        let args =
            Args::try_parse_from(["linemap", "--workspace", &workspace, "items", "a.lm"]).unwrap();
        assert!(matches!(
            Config::resolve(&args),
            Err(CliError::InvalidConfig { .. })
        ));
    }
}
