//! Error types
//!
//! The simulation itself is infallible: bad deltas and out-of-range input are
//! normalised in place. Only loading settings from disk can fail.

use std::fmt;
use std::path::PathBuf;

/// Failure while reading or parsing a settings file
#[derive(Debug)]
pub enum SettingsError {
    /// The file could not be read
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    /// The contents were not valid settings JSON
    Parse(serde_json::Error),
}

impl SettingsError {
    /// Attach the offending path to an I/O error
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            SettingsError::Io { source, .. } => SettingsError::Io {
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io {
                path: Some(path),
                source,
            } => write!(f, "failed to read settings from {}: {}", path.display(), source),
            SettingsError::Io { path: None, source } => {
                write!(f, "failed to read settings: {}", source)
            }
            SettingsError::Parse(err) => write!(f, "invalid settings JSON: {}", err),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(source: std::io::Error) -> Self {
        SettingsError::Io { path: None, source }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = SettingsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ))
        .with_path("raid.json");
        let msg = err.to_string();
        assert!(msg.contains("raid.json"));
        assert!(msg.contains("missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_wraps_serde() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = SettingsError::from(parse);
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings JSON"));
    }
}
