//! CREATE and DROP INDEX generation

use tracing::debug;
use crate::specification::{CreateIndexSpecification, DropIndexSpecification, OptionValue, Options};
use super::error::GenerateError;
use super::identifier::{qualified_name, quote_identifier, quote_literal};
use super::options::write_statement;
use super::CqlGenerator;

/// Renders a [`CreateIndexSpecification`] as `CREATE [CUSTOM] INDEX`
#[derive(Debug, Clone, Copy)]
pub struct CreateIndexCqlGenerator<'a> {
    spec: &'a CreateIndexSpecification,
}

impl<'a> CreateIndexCqlGenerator<'a> {
    pub fn new(spec: &'a CreateIndexSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for CreateIndexCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;
        debug!(table = spec.table(), column = spec.column(), index = ?spec.name(), "generating CREATE INDEX");

        // index options are passed as a single map: WITH OPTIONS = {...}
        let options = if spec.options().is_empty() {
            Options::new()
        } else {
            Options::new().with("OPTIONS", OptionValue::Map(spec.options().clone()))
        };

        Ok(write_statement(cql, &[], &options, |cql| {
            cql.push_str(if spec.is_custom() { "CREATE CUSTOM INDEX " } else { "CREATE INDEX " });
            if spec.if_not_exists() {
                cql.push_str("IF NOT EXISTS ");
            }
            if let Some(name) = spec.name() {
                cql.push_str(&quote_identifier(name));
                cql.push(' ');
            }
            cql.push_str("ON ");
            cql.push_str(&qualified_name(spec.keyspace(), spec.table()));

            let column = quote_identifier(spec.column());
            match spec.target().function() {
                Some(function) => cql.push_str(&format!(" ({}({}))", function, column)),
                None => cql.push_str(&format!(" ({})", column)),
            }

            if let Some(class) = spec.custom_class() {
                cql.push_str(" USING ");
                cql.push_str(&quote_literal(class));
            }
        }))
    }
}

/// Renders a [`DropIndexSpecification`] as `DROP INDEX`
#[derive(Debug, Clone, Copy)]
pub struct DropIndexCqlGenerator<'a> {
    spec: &'a DropIndexSpecification,
}

impl<'a> DropIndexCqlGenerator<'a> {
    pub fn new(spec: &'a DropIndexSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for DropIndexCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;
        debug!(index = spec.name(), "generating DROP INDEX");

        Ok(write_statement(cql, &[], &Options::new(), |cql| {
            cql.push_str("DROP INDEX ");
            if spec.if_exists() {
                cql.push_str("IF EXISTS ");
            }
            cql.push_str(&qualified_name(spec.keyspace(), spec.name()));
        }))
    }
}
