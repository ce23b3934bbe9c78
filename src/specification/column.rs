//! Column definitions for table specifications

use serde::{Deserialize, Serialize};
use std::fmt;
use super::types::DataType;

/// The role a column plays in the primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Determines data distribution across nodes
    Partition,
    /// Determines on-disk ordering within a partition
    #[serde(alias = "clustered")]
    Clustering,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Partition => write!(f, "partition"),
            KeyType::Clustering => write!(f, "clustering"),
        }
    }
}

/// Clustering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    #[default]
    #[serde(alias = "ascending", alias = "ASC")]
    Asc,
    #[serde(alias = "descending", alias = "DESC")]
    Desc,
}

impl Ordering {
    pub fn as_cql(&self) -> &'static str {
        match self {
            Ordering::Asc => "ASC",
            Ordering::Desc => "DESC",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cql())
    }
}

/// A column in a CREATE TABLE specification
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColumnSpecification {
    name: String,
    /// Data type (e.g., text, bigint, map<text, int>)
    #[serde(rename = "type")]
    data_type: DataType,
    /// Primary key role; `None` for regular columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<KeyType>,
    /// 1-based position within the key role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordinal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordering: Option<Ordering>,
}

impl ColumnSpecification {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            key: None,
            ordinal: None,
            ordering: None,
        }
    }

    /// Mark this column as part of the partition key
    pub fn partition_key(mut self) -> Self {
        self.key = Some(KeyType::Partition);
        self
    }

    /// Mark this column as a clustering column
    pub fn clustered(mut self) -> Self {
        self.key = Some(KeyType::Clustering);
        self
    }

    /// Mark this column as a clustering column with an explicit direction
    pub fn clustered_with(mut self, ordering: Ordering) -> Self {
        self.key = Some(KeyType::Clustering);
        self.ordering = Some(ordering);
        self
    }

    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn key(&self) -> Option<KeyType> {
        self.key
    }

    pub fn ordinal(&self) -> Option<u32> {
        self.ordinal
    }

    pub fn ordering(&self) -> Option<Ordering> {
        self.ordering
    }

    pub fn is_clustering_key(&self) -> bool {
        self.key == Some(KeyType::Clustering)
    }
}
