//! # Configuration / 配置
//!
//! Plain data describing where the history lives and how the chooser is
//! launched. Values are injected into the store and chooser adapters at
//! construction; nothing here reads the environment or the file system.

use std::path::PathBuf;

use anyhow::bail;

/// Default chooser executable, looked up on `PATH`.
pub const DEFAULT_CHOOSER_PROGRAM: &str = "choose";

/// Default chooser arguments: 30 visible rows, 1000px wide.
pub const DEFAULT_CHOOSER_ARGS: [&str; 4] = ["-n", "30", "-w", "1000"];

/// File name of the history log inside the data directory.
pub const HISTORY_FILE_NAME: &str = "history.log";

/// How the external chooser process is invoked. The arguments are static
/// configuration and never derived from clipboard content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_CHOOSER_PROGRAM.to_string(),
            args: DEFAULT_CHOOSER_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Application configuration
/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipperConfig {
    /// Backing file of the history store
    pub store_path: PathBuf,

    pub chooser: ChooserConfig,
}

impl ClipperConfig {
    /// Create a config with the history file inside `data_dir` and the default chooser.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            store_path: data_dir.join(HISTORY_FILE_NAME),
            chooser: ChooserConfig::default(),
        }
    }

    /// Overlay values present in a TOML document onto `self`.
    ///
    /// Recognized keys:
    ///
    /// ```toml
    /// [store]
    /// path = "/tmp/clipper.log"
    ///
    /// [chooser]
    /// program = "/opt/homebrew/bin/choose"
    /// args = ["-n", "30"]      # or a whitespace separated string
    /// ```
    ///
    /// Missing keys keep the current value. Keys of the wrong type are errors.
    pub fn merge_toml(mut self, toml_value: &toml::Value) -> anyhow::Result<Self> {
        if let Some(path) = toml_value.get("store").and_then(|s| s.get("path")) {
            match path.as_str() {
                Some(p) => self.store_path = PathBuf::from(p),
                None => bail!("store.path must be a string"),
            }
        }

        let chooser = toml_value.get("chooser");

        if let Some(program) = chooser.and_then(|c| c.get("program")) {
            match program.as_str() {
                Some(p) => self.chooser.program = p.to_string(),
                None => bail!("chooser.program must be a string"),
            }
        }

        if let Some(args) = chooser.and_then(|c| c.get("args")) {
            self.chooser.args = parse_args(args)?;
        }

        Ok(self)
    }
}

fn parse_args(value: &toml::Value) -> anyhow::Result<Vec<String>> {
    match value {
        toml::Value::String(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| match item.as_str() {
                Some(s) => Ok(s.to_string()),
                None => bail!("chooser.args must only contain strings"),
            })
            .collect(),
        _ => bail!("chooser.args must be a string or an array of strings"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    fn defaults() -> ClipperConfig {
        ClipperConfig::with_system_defaults(PathBuf::from("/tmp/clipper"))
    }

    #[test]
    fn test_with_system_defaults_places_history_in_data_dir() {
        let config = defaults();

        assert_eq!(config.store_path, PathBuf::from("/tmp/clipper/history.log"));
        assert_eq!(config.chooser.program, "choose");
        assert_eq!(config.chooser.args, vec!["-n", "30", "-w", "1000"]);
    }

    #[test]
    fn test_merge_toml_keeps_values_when_missing() {
        let toml_value: Value = toml::from_str("[general]\n").unwrap();

        let config = defaults().merge_toml(&toml_value).unwrap();

        assert_eq!(config, defaults());
    }

    #[test]
    fn test_merge_toml_overrides_store_and_chooser() {
        let toml_str = r#"
            [store]
            path = "/var/tmp/copypasta.bin"

            [chooser]
            program = "/opt/homebrew/bin/choose"
            args = ["-m"]
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = defaults().merge_toml(&toml_value).unwrap();

        assert_eq!(config.store_path, PathBuf::from("/var/tmp/copypasta.bin"));
        assert_eq!(config.chooser.program, "/opt/homebrew/bin/choose");
        assert_eq!(config.chooser.args, vec!["-m"]);
    }

    #[test]
    fn test_merge_toml_splits_string_args_on_whitespace() {
        let toml_str = r#"
            [chooser]
            args = "-n 10  -w 500"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = defaults().merge_toml(&toml_value).unwrap();

        assert_eq!(config.chooser.args, vec!["-n", "10", "-w", "500"]);
    }

    #[test]
    fn test_merge_toml_rejects_wrong_types() {
        let toml_value: Value = toml::from_str("[store]\npath = 42\n").unwrap();
        assert!(defaults().merge_toml(&toml_value).is_err());

        let toml_value: Value = toml::from_str("[chooser]\nargs = [1, 2]\n").unwrap();
        assert!(defaults().merge_toml(&toml_value).is_err());
    }
}
