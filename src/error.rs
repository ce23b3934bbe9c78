//! Error types for loading schema documents

use std::fmt;

/// Errors that can occur while loading a schema document
#[derive(Debug)]
pub enum ParseError {
    /// Schema file could not be read
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Document is not valid YAML or does not match the schema layout
    Yaml {
        source: serde_yaml::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "Failed to read schema file '{}': {}", path, source)
            }
            ParseError::Yaml { source } => {
                write!(f, "Invalid schema document: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Yaml { source } => Some(source),
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Yaml { source: err }
    }
}
