//! CREATE, ALTER and DROP KEYSPACE generation

use tracing::debug;
use crate::specification::{AlterKeyspaceSpecification, CreateKeyspaceSpecification, DropKeyspaceSpecification, Options};
use super::error::GenerateError;
use super::identifier::quote_identifier;
use super::options::write_statement;
use super::CqlGenerator;

/// Renders a [`CreateKeyspaceSpecification`] as `CREATE KEYSPACE`
#[derive(Debug, Clone, Copy)]
pub struct CreateKeyspaceCqlGenerator<'a> {
    spec: &'a CreateKeyspaceSpecification,
}

impl<'a> CreateKeyspaceCqlGenerator<'a> {
    pub fn new(spec: &'a CreateKeyspaceSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for CreateKeyspaceCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;
        debug!(keyspace = spec.name(), options = spec.options().len(), "generating CREATE KEYSPACE");

        Ok(write_statement(cql, &[], spec.options(), |cql| {
            cql.push_str("CREATE KEYSPACE ");
            if spec.if_not_exists() {
                cql.push_str("IF NOT EXISTS ");
            }
            cql.push_str(&quote_identifier(spec.name()));
        }))
    }
}

/// Renders an [`AlterKeyspaceSpecification`] as `ALTER KEYSPACE`
#[derive(Debug, Clone, Copy)]
pub struct AlterKeyspaceCqlGenerator<'a> {
    spec: &'a AlterKeyspaceSpecification,
}

impl<'a> AlterKeyspaceCqlGenerator<'a> {
    pub fn new(spec: &'a AlterKeyspaceSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for AlterKeyspaceCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;
        debug!(keyspace = spec.name(), options = spec.options().len(), "generating ALTER KEYSPACE");

        Ok(write_statement(cql, &[], spec.options(), |cql| {
            cql.push_str("ALTER KEYSPACE ");
            cql.push_str(&quote_identifier(spec.name()));
        }))
    }
}

/// Renders a [`DropKeyspaceSpecification`] as `DROP KEYSPACE`
#[derive(Debug, Clone, Copy)]
pub struct DropKeyspaceCqlGenerator<'a> {
    spec: &'a DropKeyspaceSpecification,
}

impl<'a> DropKeyspaceCqlGenerator<'a> {
    pub fn new(spec: &'a DropKeyspaceSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for DropKeyspaceCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;
        debug!(keyspace = spec.name(), "generating DROP KEYSPACE");

        Ok(write_statement(cql, &[], &Options::new(), |cql| {
            cql.push_str("DROP KEYSPACE ");
            if spec.if_exists() {
                cql.push_str("IF EXISTS ");
            }
            cql.push_str(&quote_identifier(spec.name()));
        }))
    }
}
