//! CREATE TABLE generation

use tracing::debug;
use crate::specification::{ColumnSpecification, CreateTableSpecification};
use super::error::GenerateError;
use super::identifier::{qualified_name, quote_identifier};
use super::options::write_statement;
use super::CqlGenerator;

/// Renders a [`CreateTableSpecification`] as `CREATE TABLE`
#[derive(Debug, Clone, Copy)]
pub struct CreateTableCqlGenerator<'a> {
    spec: &'a CreateTableSpecification,
}

impl<'a> CreateTableCqlGenerator<'a> {
    pub fn new(spec: &'a CreateTableSpecification) -> Self {
        Self { spec }
    }
}

impl CqlGenerator for CreateTableCqlGenerator<'_> {
    fn write_cql<'c>(&self, cql: &'c mut String) -> Result<&'c mut String, GenerateError> {
        let spec = self.spec;
        spec.validate()?;

        let partition = spec.partition_key_columns()?;
        let clustering = spec.clustered_key_columns()?;
        let leading = clustering_order(&clustering).into_iter().collect::<Vec<_>>();

        debug!(
            table = spec.name(),
            columns = spec.columns().len(),
            partition_keys = partition.len(),
            clustering_keys = clustering.len(),
            "generating CREATE TABLE"
        );

        Ok(write_statement(cql, &leading, spec.options(), |cql| {
            cql.push_str("CREATE TABLE ");
            if spec.if_not_exists() {
                cql.push_str("IF NOT EXISTS ");
            }
            cql.push_str(&qualified_name(spec.keyspace(), spec.name()));

            let mut parts: Vec<String> = spec
                .columns()
                .iter()
                .map(|c| format!("{} {}", quote_identifier(c.name()), c.data_type()))
                .collect();
            parts.push(primary_key(&partition, &clustering));

            cql.push_str(" (");
            cql.push_str(&parts.join(", "));
            cql.push(')');
        }))
    }
}

fn column_names(columns: &[&ColumnSpecification]) -> Vec<String> {
    columns.iter().map(|c| quote_identifier(c.name()).into_owned()).collect()
}

/// `PRIMARY KEY (p, c1, c2)` or `PRIMARY KEY ((p1, p2), c1)`
fn primary_key(partition: &[&ColumnSpecification], clustering: &[&ColumnSpecification]) -> String {
    let partition_names = column_names(partition);
    let partition_part = if partition_names.len() > 1 {
        format!("({})", partition_names.join(", "))
    } else {
        partition_names.join("")
    };

    let mut key_parts = vec![partition_part];
    key_parts.extend(column_names(clustering));
    format!("PRIMARY KEY ({})", key_parts.join(", "))
}

/// `CLUSTERING ORDER BY (...)`, only when some clustering column declares a
/// direction. Columns without one are written as ASC.
fn clustering_order(clustering: &[&ColumnSpecification]) -> Option<String> {
    if clustering.iter().all(|c| c.ordering().is_none()) {
        return None;
    }
    let items: Vec<String> = clustering
        .iter()
        .map(|c| {
            format!(
                "{} {}",
                quote_identifier(c.name()),
                c.ordering().unwrap_or_default()
            )
        })
        .collect();
    Some(format!("CLUSTERING ORDER BY ({})", items.join(", ")))
}
