use crate::{
    errors::{FileFormat, FileOperation, IoError, ParseError},
    parser::Format,
};
use miette::Diagnostic;
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

/// Target folder used when the operator gives no name.
pub const DEFAULT_ROOT_NAME: &str = "my_project";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(sprout::config::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

/// Defaults read from a TOML settings file, e.g.:
///
/// ```toml
/// default_name = "scratch"
/// format = "paths"
/// keep_root_label = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Folder name offered when none is given.
    pub default_name: String,
    /// Input format; when unset the operator is asked.
    pub format: Option<Format>,
    /// Treat the first line of a drawing as a regular entry instead of the drawn root.
    pub keep_root_label: bool,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_ROOT_NAME.to_string(),
            format: None,
            keep_root_label: false,
        }
    }
}
impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed: Settings = toml::from_str(&content)
            .map_err(|error| ParseError::new(FileFormat::Toml, path.to_path_buf(), error))?;

        Ok(parsed)
    }

    /// Reads `path` when given, built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::debug!("loading settings from: {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = Settings::load(None).unwrap();

        assert_eq!(settings.default_name, "my_project");
        assert_eq!(settings.format, None);
        assert!(!settings.keep_root_label);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprout.toml");
        fs::write(&path, "format = \"paths\"\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();

        assert_eq!(settings.format, Some(Format::Paths));
        assert_eq!(settings.default_name, DEFAULT_ROOT_NAME);
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprout.toml");
        fs::write(&path, "colour = \"blue\"\n").unwrap();

        let result = Settings::from_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(Some(dir.path().join("absent.toml").as_path()));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
