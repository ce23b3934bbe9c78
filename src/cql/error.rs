//! Generator errors

use std::fmt;
use crate::specification::KeyType;

/// Errors raised when a specification cannot be rendered as CQL.
///
/// These are configuration errors: the specification is incomplete or
/// inconsistent. No statement text is produced when one is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Statement target has no name
    MissingName {
        statement: &'static str,
    },
    /// Identifier is empty (e.g. a column or keyspace qualifier)
    EmptyIdentifier {
        context: String,
    },
    /// CREATE TABLE without columns
    NoColumns {
        table: String,
    },
    /// CREATE TABLE without a partition key column
    NoPartitionKey {
        table: String,
    },
    /// Column declared more than once
    DuplicateColumn {
        table: String,
        column: String,
    },
    /// Key ordinals are not unique and contiguous from 1
    ConflictingOrdinals {
        table: String,
        key: KeyType,
        ordinals: Vec<u32>,
    },
    /// ASC/DESC declared on a column that is not a clustering column
    OrderingOnNonClusteringColumn {
        table: String,
        column: String,
    },
    /// Column type not allowed in a primary key
    InvalidKeyColumnType {
        table: String,
        column: String,
        data_type: String,
    },
    /// Option name used more than once in one statement
    DuplicateOption {
        name: String,
    },
    /// Option value that has no CQL rendering in its position
    InvalidOptionValue {
        name: String,
        reason: &'static str,
    },
    /// Ordinal declared on a column that is not part of the primary key
    OrdinalOnNonKeyColumn {
        table: String,
        column: String,
    },
    /// ALTER statement with no changes and no options
    NothingToAlter {
        statement: &'static str,
        name: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::MissingName { statement } => {
                write!(f, "{} requires a name", statement)
            }
            GenerateError::EmptyIdentifier { context } => {
                write!(f, "Empty identifier in {}", context)
            }
            GenerateError::NoColumns { table } => {
                write!(f, "Table '{}' has no columns", table)
            }
            GenerateError::NoPartitionKey { table } => {
                write!(f, "Table '{}' has no partition key column", table)
            }
            GenerateError::DuplicateColumn { table, column } => {
                write!(f, "Column '{}' is declared more than once in table '{}'", column, table)
            }
            GenerateError::ConflictingOrdinals { table, key, ordinals } => {
                let list: Vec<String> = ordinals.iter().map(|o| o.to_string()).collect();
                write!(
                    f,
                    "Table '{}' has conflicting {} key ordinals [{}]; expected 1..={}",
                    table,
                    key,
                    list.join(", "),
                    ordinals.len()
                )
            }
            GenerateError::OrderingOnNonClusteringColumn { table, column } => {
                write!(
                    f,
                    "Column '{}' in table '{}' declares an ordering but is not a clustering column",
                    column, table
                )
            }
            GenerateError::InvalidKeyColumnType { table, column, data_type } => {
                write!(
                    f,
                    "Column '{}' in table '{}' has type {} which cannot be part of a primary key",
                    column, table, data_type
                )
            }
            GenerateError::DuplicateOption { name } => {
                write!(f, "Option '{}' is specified more than once", name)
            }
            GenerateError::InvalidOptionValue { name, reason } => {
                write!(f, "Invalid value for option '{}': {}", name, reason)
            }
            GenerateError::OrdinalOnNonKeyColumn { table, column } => {
                write!(
                    f,
                    "Column '{}' in table '{}' declares an ordinal but is not a key column",
                    column, table
                )
            }
            GenerateError::NothingToAlter { statement, name } => {
                write!(f, "{} '{}' has no changes or options", statement, name)
            }
        }
    }
}

impl std::error::Error for GenerateError {}
