//! Schema parser (verb module)
//!
//! Transforms YAML documents into specification types.

use std::path::Path;
use tracing::{debug, instrument};
use crate::error::ParseError;
use crate::specification::Schema;

/// Parse a schema from a YAML file
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Schema, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse a schema from a YAML string
pub fn parse_str(yaml: &str) -> Result<Schema, ParseError> {
    let schema: Schema = serde_yaml::from_str(yaml)?;
    debug!(
        keyspaces = schema.keyspaces.len(),
        tables = schema.tables.len(),
        indexes = schema.indexes.len(),
        "parsed schema document"
    );
    Ok(schema)
}
