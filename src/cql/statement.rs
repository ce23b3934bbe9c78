//! Statement dispatch

use crate::specification::{
    AlterKeyspaceSpecification, AlterTableSpecification, CreateIndexSpecification,
    CreateKeyspaceSpecification, CreateTableSpecification, DropIndexSpecification,
    DropKeyspaceSpecification, DropTableSpecification,
};
use super::alter_table::AlterTableCqlGenerator;
use super::create_table::CreateTableCqlGenerator;
use super::drop_table::DropTableCqlGenerator;
use super::error::GenerateError;
use super::index::{CreateIndexCqlGenerator, DropIndexCqlGenerator};
use super::keyspace::{AlterKeyspaceCqlGenerator, CreateKeyspaceCqlGenerator, DropKeyspaceCqlGenerator};
use super::CqlGenerator;

/// Any DDL statement this crate can render
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateKeyspace(CreateKeyspaceSpecification),
    AlterKeyspace(AlterKeyspaceSpecification),
    DropKeyspace(DropKeyspaceSpecification),
    CreateTable(CreateTableSpecification),
    AlterTable(AlterTableSpecification),
    DropTable(DropTableSpecification),
    CreateIndex(CreateIndexSpecification),
    DropIndex(DropIndexSpecification),
}

impl Statement {
    /// Statement keyword, e.g. `CREATE TABLE`
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::CreateKeyspace(_) => "CREATE KEYSPACE",
            Statement::AlterKeyspace(_) => "ALTER KEYSPACE",
            Statement::DropKeyspace(_) => "DROP KEYSPACE",
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::AlterTable(_) => "ALTER TABLE",
            Statement::DropTable(_) => "DROP TABLE",
            Statement::CreateIndex(_) => "CREATE INDEX",
            Statement::DropIndex(_) => "DROP INDEX",
        }
    }
}

impl CqlGenerator for Statement {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        match self {
            Statement::CreateKeyspace(spec) => CreateKeyspaceCqlGenerator::new(spec).write_cql(cql),
            Statement::AlterKeyspace(spec) => AlterKeyspaceCqlGenerator::new(spec).write_cql(cql),
            Statement::DropKeyspace(spec) => DropKeyspaceCqlGenerator::new(spec).write_cql(cql),
            Statement::CreateTable(spec) => CreateTableCqlGenerator::new(spec).write_cql(cql),
            Statement::AlterTable(spec) => AlterTableCqlGenerator::new(spec).write_cql(cql),
            Statement::DropTable(spec) => DropTableCqlGenerator::new(spec).write_cql(cql),
            Statement::CreateIndex(spec) => CreateIndexCqlGenerator::new(spec).write_cql(cql),
            Statement::DropIndex(spec) => DropIndexCqlGenerator::new(spec).write_cql(cql),
        }
    }
}

/// Generate the CQL text for one statement
pub fn generate_cql(statement: &Statement) -> Result<String, GenerateError> {
    statement.to_cql()
}

macro_rules! impl_from_spec {
    ($($spec:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$spec> for Statement {
                fn from(spec: $spec) -> Self {
                    Statement::$variant(spec)
                }
            }
        )*
    };
}

impl_from_spec! {
    CreateKeyspaceSpecification => CreateKeyspace,
    AlterKeyspaceSpecification => AlterKeyspace,
    DropKeyspaceSpecification => DropKeyspace,
    CreateTableSpecification => CreateTable,
    AlterTableSpecification => AlterTable,
    DropTableSpecification => DropTable,
    CreateIndexSpecification => CreateIndex,
    DropIndexSpecification => DropIndex,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::DataType;

    #[test]
    fn test_dispatch_matches_direct_generator() {
        let spec = CreateTableSpecification::builder("t")
            .partition_key_column("p", DataType::Int)
            .build()
            .unwrap();
        let direct = CreateTableCqlGenerator::new(&spec).to_cql().unwrap();
        let statement = Statement::from(spec);
        assert_eq!(statement.kind(), "CREATE TABLE");
        assert_eq!(generate_cql(&statement).unwrap(), direct);
    }

    #[test]
    fn test_chained_statements_share_buffer() {
        let statements: Vec<Statement> = vec![
            DropTableSpecification::new("t").with_if_exists().into(),
            DropKeyspaceSpecification::new("ks").into(),
        ];
        let mut cql = String::new();
        for statement in &statements {
            statement.write_cql(&mut cql).unwrap().push('\n');
        }
        assert_eq!(cql, "DROP TABLE IF EXISTS t;\nDROP KEYSPACE ks;\n");
    }
}
