//! Secondary index specifications: CREATE and DROP INDEX

use serde::{Deserialize, Serialize};
use super::option::{OptionValue, Options};
use super::{require_name, require_qualifier};
use crate::cql::GenerateError;

/// What part of a column an index covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexTarget {
    /// The column value (for collections, the values)
    #[default]
    Column,
    /// Map keys
    Keys,
    /// Collection values
    Values,
    /// Map entries
    Entries,
    /// The whole frozen collection
    Full,
}

impl IndexTarget {
    /// Wrapping function name, if any
    pub fn function(&self) -> Option<&'static str> {
        match self {
            IndexTarget::Column => None,
            IndexTarget::Keys => Some("KEYS"),
            IndexTarget::Values => Some("VALUES"),
            IndexTarget::Entries => Some("ENTRIES"),
            IndexTarget::Full => Some("FULL"),
        }
    }
}

/// Describes a secondary index to create
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateIndexSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keyspace: Option<String>,
    /// Index name; Cassandra picks `<table>_<column>_idx` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    table: String,
    #[serde(default)]
    column: String,
    #[serde(default)]
    target: IndexTarget,
    /// Custom index implementation class
    #[serde(rename = "using", default, skip_serializing_if = "Option::is_none")]
    custom_class: Option<String>,
    #[serde(rename = "ifNotExists", default)]
    if_not_exists: bool,
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    options: Options,
}

impl CreateIndexSpecification {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            keyspace: None,
            name: None,
            table: table.into(),
            column: column.into(),
            target: IndexTarget::Column,
            custom_class: None,
            if_not_exists: false,
            options: Options::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    pub fn with_target(mut self, target: IndexTarget) -> Self {
        self.target = target;
        self
    }

    /// Make this a `CUSTOM` index backed by `class`
    pub fn using(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    pub fn with_if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn with_option(mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name, value);
        self
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The explicit name, or the one Cassandra assigns by default
    pub fn effective_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}_{}_idx", self.table, self.column),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn target(&self) -> IndexTarget {
        self.target
    }

    pub fn custom_class(&self) -> Option<&str> {
        self.custom_class.as_deref()
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_custom(&self) -> bool {
        self.custom_class.is_some()
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.table, "CREATE INDEX")?;
        require_qualifier(self.keyspace.as_deref(), "CREATE INDEX")?;
        if self.name.as_deref() == Some("") {
            return Err(GenerateError::EmptyIdentifier {
                context: format!("index name on table '{}'", self.table),
            });
        }
        if self.column.is_empty() {
            return Err(GenerateError::EmptyIdentifier {
                context: format!("index column on table '{}'", self.table),
            });
        }
        self.options.validate()
    }
}

/// Describes an index to drop
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndexSpecification {
    keyspace: Option<String>,
    name: String,
    if_exists: bool,
}

impl DropIndexSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            keyspace: None,
            name: name.into(),
            if_exists: false,
        }
    }

    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    pub fn with_if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "DROP INDEX")?;
        require_qualifier(self.keyspace.as_deref(), "DROP INDEX")
    }
}

impl From<&CreateIndexSpecification> for DropIndexSpecification {
    fn from(spec: &CreateIndexSpecification) -> Self {
        DropIndexSpecification {
            keyspace: spec.keyspace.clone(),
            name: spec.effective_name(),
            if_exists: false,
        }
    }
}
