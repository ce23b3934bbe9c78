//! Table specifications: CREATE, ALTER and DROP TABLE

use serde::{Deserialize, Serialize};
use super::column::{ColumnSpecification, KeyType, Ordering};
use super::option::{OptionValue, Options};
use super::types::DataType;
use super::{require_name, require_qualifier};
use crate::cql::GenerateError;

/// Describes a table to create
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateTableSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keyspace: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(rename = "ifNotExists", default)]
    if_not_exists: bool,
    #[serde(default)]
    columns: Vec<ColumnSpecification>,
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    options: Options,
}

impl CreateTableSpecification {
    pub fn builder(name: impl Into<String>) -> CreateTableBuilder {
        CreateTableBuilder {
            spec: CreateTableSpecification {
                keyspace: None,
                name: name.into(),
                if_not_exists: false,
                columns: Vec::new(),
                options: Options::new(),
            },
        }
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }

    /// All columns in declaration order
    pub fn columns(&self) -> &[ColumnSpecification] {
        &self.columns
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnSpecification> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Partition key columns ordered by ordinal
    pub fn partition_key_columns(&self) -> Result<Vec<&ColumnSpecification>, GenerateError> {
        self.key_columns(KeyType::Partition)
    }

    /// Clustering columns ordered by ordinal
    pub fn clustered_key_columns(&self) -> Result<Vec<&ColumnSpecification>, GenerateError> {
        self.key_columns(KeyType::Clustering)
    }

    /// Columns of one key role, sorted by ordinal.
    ///
    /// A column without an explicit ordinal takes its 1-based position among
    /// the columns of the same role. The resulting ordinals must be exactly
    /// `1..=n`.
    fn key_columns(&self, key: KeyType) -> Result<Vec<&ColumnSpecification>, GenerateError> {
        let mut keyed: Vec<(u32, &ColumnSpecification)> = self
            .columns
            .iter()
            .filter(|c| c.key() == Some(key))
            .enumerate()
            .map(|(i, c)| (c.ordinal().unwrap_or(i as u32 + 1), c))
            .collect();
        keyed.sort_by_key(|(ordinal, _)| *ordinal);

        let contiguous = keyed
            .iter()
            .enumerate()
            .all(|(i, (ordinal, _))| *ordinal == i as u32 + 1);
        if !contiguous {
            return Err(GenerateError::ConflictingOrdinals {
                table: self.name.clone(),
                key,
                ordinals: keyed.iter().map(|(ordinal, _)| *ordinal).collect(),
            });
        }

        Ok(keyed.into_iter().map(|(_, c)| c).collect())
    }

    /// Check the structural invariants of the table
    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "CREATE TABLE")?;
        require_qualifier(self.keyspace.as_deref(), "CREATE TABLE")?;

        if self.columns.is_empty() {
            return Err(GenerateError::NoColumns { table: self.name.clone() });
        }

        for (i, column) in self.columns.iter().enumerate() {
            if column.name().is_empty() {
                return Err(GenerateError::EmptyIdentifier {
                    context: format!("column {} of table '{}'", i + 1, self.name),
                });
            }
            if self.columns[..i].iter().any(|c| c.name() == column.name()) {
                return Err(GenerateError::DuplicateColumn {
                    table: self.name.clone(),
                    column: column.name().to_string(),
                });
            }
            if column.ordering().is_some() && !column.is_clustering_key() {
                return Err(GenerateError::OrderingOnNonClusteringColumn {
                    table: self.name.clone(),
                    column: column.name().to_string(),
                });
            }
            if column.ordinal().is_some() && column.key().is_none() {
                return Err(GenerateError::OrdinalOnNonKeyColumn {
                    table: self.name.clone(),
                    column: column.name().to_string(),
                });
            }
            if column.key().is_some() && !column.data_type().can_be_key() {
                return Err(GenerateError::InvalidKeyColumnType {
                    table: self.name.clone(),
                    column: column.name().to_string(),
                    data_type: column.data_type().to_string(),
                });
            }
        }

        if self.partition_key_columns()?.is_empty() {
            return Err(GenerateError::NoPartitionKey { table: self.name.clone() });
        }
        self.clustered_key_columns()?;

        self.options.validate()
    }
}

/// Fluent builder for [`CreateTableSpecification`]
#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    spec: CreateTableSpecification,
}

impl CreateTableBuilder {
    pub fn keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.spec.keyspace = Some(keyspace.into());
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.spec.if_not_exists = true;
        self
    }

    /// Add a regular column
    pub fn column(self, name: impl Into<String>, data_type: DataType) -> Self {
        self.add_column(ColumnSpecification::new(name, data_type))
    }

    pub fn partition_key_column(self, name: impl Into<String>, data_type: DataType) -> Self {
        self.add_column(ColumnSpecification::new(name, data_type).partition_key())
    }

    /// Add a clustering column with the default direction
    pub fn clustered_key_column(self, name: impl Into<String>, data_type: DataType) -> Self {
        self.add_column(ColumnSpecification::new(name, data_type).clustered())
    }

    pub fn clustered_key_column_ordered(
        self,
        name: impl Into<String>,
        data_type: DataType,
        ordering: Ordering,
    ) -> Self {
        self.add_column(ColumnSpecification::new(name, data_type).clustered_with(ordering))
    }

    /// Add a fully described column (e.g. one with an explicit ordinal)
    pub fn add_column(mut self, column: ColumnSpecification) -> Self {
        self.spec.columns.push(column);
        self
    }

    pub fn with_option(mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) -> Self {
        self.spec.options.insert(name, value);
        self
    }

    /// Validate and produce the immutable specification
    pub fn build(self) -> Result<CreateTableSpecification, GenerateError> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

// ============================================================================
// ALTER TABLE
// ============================================================================

/// A single pending change in an ALTER TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnChange {
    /// `ALTER col TYPE type`
    Alter { column: String, data_type: DataType },
    /// `ADD col type`
    Add { column: String, data_type: DataType },
    /// `DROP col`
    Drop { column: String },
    /// `RENAME col TO col`
    Rename { from: String, to: String },
}

impl ColumnChange {
    /// Column names referenced by this change
    pub fn columns(&self) -> Vec<&str> {
        match self {
            ColumnChange::Alter { column, .. }
            | ColumnChange::Add { column, .. }
            | ColumnChange::Drop { column } => vec![column.as_str()],
            ColumnChange::Rename { from, to } => vec![from.as_str(), to.as_str()],
        }
    }
}

/// Describes pending changes to an existing table
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableSpecification {
    keyspace: Option<String>,
    name: String,
    changes: Vec<ColumnChange>,
    options: Options,
}

impl AlterTableSpecification {
    pub fn builder(name: impl Into<String>) -> AlterTableBuilder {
        AlterTableBuilder {
            spec: AlterTableSpecification {
                keyspace: None,
                name: name.into(),
                changes: Vec::new(),
                options: Options::new(),
            },
        }
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes in the order they were added
    pub fn changes(&self) -> &[ColumnChange] {
        &self.changes
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "ALTER TABLE")?;
        require_qualifier(self.keyspace.as_deref(), "ALTER TABLE")?;

        for (i, change) in self.changes.iter().enumerate() {
            if change.columns().iter().any(|c| c.is_empty()) {
                return Err(GenerateError::EmptyIdentifier {
                    context: format!("change {} of ALTER TABLE '{}'", i + 1, self.name),
                });
            }
        }

        if self.changes.is_empty() && self.options.is_empty() {
            return Err(GenerateError::NothingToAlter {
                statement: "ALTER TABLE",
                name: self.name.clone(),
            });
        }

        self.options.validate()
    }
}

/// Fluent builder for [`AlterTableSpecification`]
#[derive(Debug, Clone)]
pub struct AlterTableBuilder {
    spec: AlterTableSpecification,
}

impl AlterTableBuilder {
    pub fn keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.spec.keyspace = Some(keyspace.into());
        self
    }

    /// Change the type of an existing column
    pub fn alter(mut self, column: impl Into<String>, data_type: DataType) -> Self {
        self.spec.changes.push(ColumnChange::Alter { column: column.into(), data_type });
        self
    }

    pub fn add(mut self, column: impl Into<String>, data_type: DataType) -> Self {
        self.spec.changes.push(ColumnChange::Add { column: column.into(), data_type });
        self
    }

    pub fn drop(mut self, column: impl Into<String>) -> Self {
        self.spec.changes.push(ColumnChange::Drop { column: column.into() });
        self
    }

    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.spec.changes.push(ColumnChange::Rename { from: from.into(), to: to.into() });
        self
    }

    pub fn with_option(mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) -> Self {
        self.spec.options.insert(name, value);
        self
    }

    pub fn build(self) -> Result<AlterTableSpecification, GenerateError> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

// ============================================================================
// DROP TABLE
// ============================================================================

/// Describes a table to drop
#[derive(Debug, Clone, PartialEq)]
pub struct DropTableSpecification {
    keyspace: Option<String>,
    name: String,
    if_exists: bool,
}

impl DropTableSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            keyspace: None,
            name: name.into(),
            if_exists: false,
        }
    }

    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    pub fn with_if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "DROP TABLE")?;
        require_qualifier(self.keyspace.as_deref(), "DROP TABLE")
    }
}

impl From<&CreateTableSpecification> for DropTableSpecification {
    fn from(spec: &CreateTableSpecification) -> Self {
        DropTableSpecification {
            keyspace: spec.keyspace.clone(),
            name: spec.name.clone(),
            if_exists: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(yaml: &str) -> CreateTableSpecification {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_implicit_ordinals_follow_declaration_order() {
        let spec = CreateTableSpecification::builder("events")
            .partition_key_column("tenant", DataType::Text)
            .column("payload", DataType::Blob)
            .partition_key_column("day", DataType::Date)
            .clustered_key_column("ts", DataType::TimeUuid)
            .build()
            .unwrap();
        let partition: Vec<&str> = spec.partition_key_columns().unwrap().iter().map(|c| c.name()).collect();
        assert_eq!(partition, vec!["tenant", "day"]);
    }

    #[test]
    fn test_explicit_ordinals_reorder_key() {
        let spec = CreateTableSpecification::builder("events")
            .add_column(ColumnSpecification::new("a", DataType::Int).partition_key().with_ordinal(2))
            .add_column(ColumnSpecification::new("b", DataType::Int).partition_key().with_ordinal(1))
            .build()
            .unwrap();
        let partition: Vec<&str> = spec.partition_key_columns().unwrap().iter().map(|c| c.name()).collect();
        assert_eq!(partition, vec!["b", "a"]);
    }

    #[test]
    fn test_conflicting_ordinals() {
        let result = CreateTableSpecification::builder("events")
            .add_column(ColumnSpecification::new("a", DataType::Int).partition_key().with_ordinal(1))
            .add_column(ColumnSpecification::new("b", DataType::Int).clustered().with_ordinal(1))
            .add_column(ColumnSpecification::new("c", DataType::Int).clustered().with_ordinal(3))
            .build();
        assert_eq!(
            result.unwrap_err(),
            GenerateError::ConflictingOrdinals {
                table: "events".into(),
                key: KeyType::Clustering,
                ordinals: vec![1, 3],
            }
        );
    }

    #[test]
    fn test_duplicate_implicit_and_explicit_ordinal() {
        // second column implicitly takes ordinal 2, clashing with the explicit one
        let result = CreateTableSpecification::builder("t")
            .add_column(ColumnSpecification::new("a", DataType::Int).partition_key().with_ordinal(2))
            .partition_key_column("b", DataType::Int)
            .build();
        assert!(matches!(result, Err(GenerateError::ConflictingOrdinals { key: KeyType::Partition, .. })));
    }

    #[test]
    fn test_missing_name_and_columns() {
        let spec = table("columns: []");
        assert_eq!(spec.validate().unwrap_err(), GenerateError::MissingName { statement: "CREATE TABLE" });

        let spec = table("name: t");
        assert_eq!(spec.validate().unwrap_err(), GenerateError::NoColumns { table: "t".into() });
    }

    #[test]
    fn test_no_partition_key() {
        let result = CreateTableSpecification::builder("t")
            .column("a", DataType::Int)
            .build();
        assert_eq!(result.unwrap_err(), GenerateError::NoPartitionKey { table: "t".into() });
    }

    #[test]
    fn test_duplicate_column() {
        let result = CreateTableSpecification::builder("t")
            .partition_key_column("a", DataType::Int)
            .column("a", DataType::Text)
            .build();
        assert!(matches!(result, Err(GenerateError::DuplicateColumn { .. })));
    }

    #[test]
    fn test_ordering_requires_clustering_column() {
        let spec = table(
            "name: t\ncolumns:\n  - name: a\n    type: int\n    key: partition\n    ordering: desc\n",
        );
        assert!(matches!(spec.validate(), Err(GenerateError::OrderingOnNonClusteringColumn { .. })));
    }

    #[test]
    fn test_ordinal_requires_key_column() {
        let result = CreateTableSpecification::builder("t")
            .partition_key_column("a", DataType::Int)
            .add_column(ColumnSpecification::new("b", DataType::Text).with_ordinal(1))
            .build();
        assert_eq!(
            result.unwrap_err(),
            GenerateError::OrdinalOnNonKeyColumn { table: "t".into(), column: "b".into() }
        );
    }

    #[test]
    fn test_collection_cannot_be_key() {
        let result = CreateTableSpecification::builder("t")
            .partition_key_column("tags", DataType::set(DataType::Text))
            .build();
        assert!(matches!(result, Err(GenerateError::InvalidKeyColumnType { .. })));

        let result = CreateTableSpecification::builder("t")
            .partition_key_column("tags", DataType::frozen(DataType::set(DataType::Text)))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_option() {
        let result = CreateTableSpecification::builder("t")
            .partition_key_column("a", DataType::Int)
            .with_option("comment", "x")
            .with_option("comment", "y")
            .build();
        assert_eq!(result.unwrap_err(), GenerateError::DuplicateOption { name: "comment".into() });
    }

    #[test]
    fn test_empty_keyspace_qualifier() {
        let result = CreateTableSpecification::builder("t")
            .keyspace("")
            .partition_key_column("a", DataType::Int)
            .build();
        assert!(matches!(result, Err(GenerateError::EmptyIdentifier { .. })));
    }

    #[test]
    fn test_alter_requires_change() {
        let result = AlterTableSpecification::builder("t").build();
        assert_eq!(
            result.unwrap_err(),
            GenerateError::NothingToAlter { statement: "ALTER TABLE", name: "t".into() }
        );
        assert!(AlterTableSpecification::builder("t").with_option("comment", "c").build().is_ok());
    }

    #[test]
    fn test_alter_rejects_empty_column() {
        let result = AlterTableSpecification::builder("t").drop("").build();
        assert!(matches!(result, Err(GenerateError::EmptyIdentifier { .. })));
    }
}
