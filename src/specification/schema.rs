//! Root schema document

use serde::{Deserialize, Serialize};
use std::path::Path;
use super::index::CreateIndexSpecification;
use super::keyspace::CreateKeyspaceSpecification;
use super::table::CreateTableSpecification;
use crate::error::ParseError;

/// A schema document: the keyspaces, tables and indexes to manage
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Schema {
    #[serde(default)]
    pub keyspaces: Vec<CreateKeyspaceSpecification>,
    #[serde(default)]
    pub tables: Vec<CreateTableSpecification>,
    #[serde(default)]
    pub indexes: Vec<CreateIndexSpecification>,
}

impl Schema {
    /// Load a schema from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        crate::parser::parse_file(path)
    }

    pub fn get_keyspace(&self, name: &str) -> Option<&CreateKeyspaceSpecification> {
        self.keyspaces.iter().find(|k| k.name() == name)
    }

    /// Get a table by name, optionally restricted to a keyspace
    pub fn get_table(&self, keyspace: Option<&str>, name: &str) -> Option<&CreateTableSpecification> {
        self.tables
            .iter()
            .find(|t| t.name() == name && (keyspace.is_none() || t.keyspace() == keyspace))
    }

    /// Indexes declared on one table
    pub fn indexes_for<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a CreateIndexSpecification> + 'a {
        self.indexes.iter().filter(move |i| i.table() == table)
    }

    pub fn is_empty(&self) -> bool {
        self.keyspaces.is_empty() && self.tables.is_empty() && self.indexes.is_empty()
    }
}
