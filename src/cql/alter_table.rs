//! ALTER TABLE generation

use tracing::debug;
use crate::specification::{AlterTableSpecification, ColumnChange};
use super::error::GenerateError;
use super::identifier::{qualified_name, quote_identifier};
use super::options::write_statement;
use super::CqlGenerator;

/// Renders an [`AlterTableSpecification`] as `ALTER TABLE`
#[derive(Debug, Clone, Copy)]
pub struct AlterTableCqlGenerator<'a> {
    spec: &'a AlterTableSpecification,
}

impl<'a> AlterTableCqlGenerator<'a> {
    pub fn new(spec: &'a AlterTableSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for AlterTableCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;

        debug!(
            table = spec.name(),
            changes = spec.changes().len(),
            options = spec.options().len(),
            "generating ALTER TABLE"
        );

        Ok(write_statement(cql, &[], spec.options(), |cql| {
            cql.push_str("ALTER TABLE ");
            cql.push_str(&qualified_name(spec.keyspace(), spec.name()));

            if !spec.changes().is_empty() {
                let clauses: Vec<String> = spec.changes().iter().map(render_change).collect();
                cql.push(' ');
                cql.push_str(&clauses.join(", "));
            }
        }))
    }
}

fn render_change(change: &ColumnChange) -> String {
    match change {
        ColumnChange::Alter { column, data_type } => {
            format!("ALTER {} TYPE {}", quote_identifier(column), data_type)
        }
        ColumnChange::Add { column, data_type } => {
            format!("ADD {} {}", quote_identifier(column), data_type)
        }
        ColumnChange::Drop { column } => format!("DROP {}", quote_identifier(column)),
        ColumnChange::Rename { from, to } => {
            format!("RENAME {} TO {}", quote_identifier(from), quote_identifier(to))
        }
    }
}
