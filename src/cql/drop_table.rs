//! DROP TABLE generation

use tracing::debug;
use crate::specification::{DropTableSpecification, Options};
use super::error::GenerateError;
use super::identifier::qualified_name;
use super::options::write_statement;
use super::CqlGenerator;

/// Renders a [`DropTableSpecification`] as `DROP TABLE`
#[derive(Debug, Clone, Copy)]
pub struct DropTableCqlGenerator<'a> {
    spec: &'a DropTableSpecification,
}

impl<'a> DropTableCqlGenerator<'a> {
    pub fn new(spec: &'a DropTableSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for DropTableCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;
        debug!(table = spec.name(), "generating DROP TABLE");

        Ok(write_statement(cql, &[], &Options::new(), |cql| {
            cql.push_str("DROP TABLE ");
            if spec.if_exists() {
                cql.push_str("IF EXISTS ");
            }
            cql.push_str(&qualified_name(spec.keyspace(), spec.name()));
        }))
    }
}
