//! CQL generator (verb module)
//!
//! Transforms specifications into CQL statement text. Every generator borrows
//! one specification, validates it, and appends a single `;`-terminated
//! statement.

mod alter_table;
mod create_table;
mod drop_table;
mod error;
mod identifier;
mod index;
mod keyspace;
mod options;
mod statement;

pub use alter_table::AlterTableCqlGenerator;
pub use create_table::CreateTableCqlGenerator;
pub use drop_table::DropTableCqlGenerator;
pub use error::GenerateError;
pub use identifier::{is_reserved_keyword, qualified_name, quote_identifier, quote_literal};
pub use index::{CreateIndexCqlGenerator, DropIndexCqlGenerator};
pub use keyspace::{AlterKeyspaceCqlGenerator, CreateKeyspaceCqlGenerator, DropKeyspaceCqlGenerator};
pub use options::{render_option_value, render_with_options, write_statement};
pub use statement::{generate_cql, Statement};

/// A stateless renderer of one statement
pub trait CqlGenerator {
    /// Append the statement to `cql` and hand the buffer back for chaining.
    ///
    /// Nothing is appended when the specification is invalid.
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError>;

    /// Render the statement into a fresh string
    fn to_cql(&self) -> Result<String, GenerateError> {
        let mut cql = String::new();
        self.write_cql(&mut cql)?;
        Ok(cql)
    }
}
