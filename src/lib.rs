//! cqlddl - Generate Cassandra CQL DDL from declarative specifications
//!
//! This library provides:
//! - Specification types for keyspaces, tables and indexes
//! - Builders that produce validated, immutable specifications
//! - CQL generators for CREATE/ALTER/DROP KEYSPACE, TABLE and INDEX
//! - Schema documents parsed from YAML
//! - Schema scripts (create, recreate, drop) built from a document
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `specification/` - DDL intent (CreateTableSpecification, ColumnSpecification, Options, Schema, ...)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → Schema
//! - `cql/` - Specification → CQL text
//! - `script/` - Schema + SchemaAction → ordered statements
//!
//! # Example
//!
//! ```
//! use cqlddl::{CqlGenerator, CreateTableCqlGenerator, CreateTableSpecification, DataType, Ordering};
//!
//! let spec = CreateTableSpecification::builder("timeline")
//!     .partition_key_column("user_id", DataType::Uuid)
//!     .clustered_key_column_ordered("posted", DataType::Timestamp, Ordering::Desc)
//!     .column("body", DataType::Text)
//!     .build()?;
//!
//! let cql = CreateTableCqlGenerator::new(&spec).to_cql()?;
//! assert_eq!(
//!     cql,
//!     "CREATE TABLE timeline (user_id uuid, posted timestamp, body text, \
//!      PRIMARY KEY (user_id, posted)) WITH CLUSTERING ORDER BY (posted DESC);"
//! );
//! # Ok::<(), cqlddl::GenerateError>(())
//! ```

pub mod specification;
pub mod cql;
pub mod parser;
pub mod script;
pub mod error;

// Re-export commonly used types
pub use specification::{
    AlterKeyspaceSpecification, AlterTableSpecification, ColumnChange, ColumnSpecification,
    CreateIndexSpecification, CreateKeyspaceSpecification, CreateTableSpecification, DataType,
    DropIndexSpecification, DropKeyspaceSpecification, DropTableSpecification, IndexTarget,
    KeyType, KeyspaceOption, OptionValue, Options, Ordering, ReplicationStrategy, Schema,
    TableOption,
};
pub use cql::{
    generate_cql, AlterKeyspaceCqlGenerator, AlterTableCqlGenerator, CqlGenerator,
    CreateIndexCqlGenerator, CreateKeyspaceCqlGenerator, CreateTableCqlGenerator,
    DropIndexCqlGenerator, DropKeyspaceCqlGenerator, DropTableCqlGenerator, GenerateError,
    Statement,
};
pub use script::{build_script, SchemaAction};
pub use error::ParseError;
