//! Specification types (nouns)
//!
//! Declarative descriptions of DDL intent. Each CQL statement kind has one
//! specification type; generators in `cql/` turn them into statement text.

mod column;
mod index;
mod keyspace;
mod option;
mod schema;
mod table;
mod types;

pub use column::{ColumnSpecification, KeyType, Ordering};
pub use index::{CreateIndexSpecification, DropIndexSpecification, IndexTarget};
pub use keyspace::{AlterKeyspaceSpecification, CreateKeyspaceSpecification, DropKeyspaceSpecification, KeyspaceBuilder, KeyspaceOptions};
pub use option::{KeyspaceOption, OptionValue, Options, ReplicationStrategy, TableOption};
pub use schema::Schema;
pub use table::{AlterTableBuilder, AlterTableSpecification, ColumnChange, CreateTableBuilder, CreateTableSpecification, DropTableSpecification};
pub use types::{DataType, ParseDataTypeError};

use crate::cql::GenerateError;

fn require_name(name: &str, statement: &'static str) -> Result<(), GenerateError> {
    if name.is_empty() {
        return Err(GenerateError::MissingName { statement });
    }
    Ok(())
}

fn require_qualifier(keyspace: Option<&str>, statement: &str) -> Result<(), GenerateError> {
    if keyspace == Some("") {
        return Err(GenerateError::EmptyIdentifier {
            context: format!("keyspace qualifier of {}", statement),
        });
    }
    Ok(())
}
