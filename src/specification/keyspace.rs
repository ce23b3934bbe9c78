//! Keyspace specifications: CREATE, ALTER and DROP KEYSPACE

use serde::{Deserialize, Serialize};
use super::option::{KeyspaceOption, OptionValue, Options, ReplicationStrategy};
use super::require_name;
use crate::cql::GenerateError;

/// Describes a keyspace to create
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateKeyspaceSpecification {
    #[serde(default)]
    name: String,
    #[serde(rename = "ifNotExists", default)]
    if_not_exists: bool,
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    options: Options,
}

impl CreateKeyspaceSpecification {
    pub fn builder(name: impl Into<String>) -> KeyspaceBuilder<CreateKeyspaceSpecification> {
        KeyspaceBuilder {
            spec: CreateKeyspaceSpecification {
                name: name.into(),
                if_not_exists: false,
                options: Options::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "CREATE KEYSPACE")?;
        self.options.validate()
    }
}

/// Describes option changes to an existing keyspace
#[derive(Debug, Clone, PartialEq)]
pub struct AlterKeyspaceSpecification {
    name: String,
    options: Options,
}

impl AlterKeyspaceSpecification {
    pub fn builder(name: impl Into<String>) -> KeyspaceBuilder<AlterKeyspaceSpecification> {
        KeyspaceBuilder {
            spec: AlterKeyspaceSpecification {
                name: name.into(),
                options: Options::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "ALTER KEYSPACE")?;
        if self.options.is_empty() {
            return Err(GenerateError::NothingToAlter {
                statement: "ALTER KEYSPACE",
                name: self.name.clone(),
            });
        }
        self.options.validate()
    }
}

/// Keyspace specifications that carry options
pub trait KeyspaceOptions {
    fn options_mut(&mut self) -> &mut Options;
    fn validate(&self) -> Result<(), GenerateError>;
}

impl KeyspaceOptions for CreateKeyspaceSpecification {
    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn validate(&self) -> Result<(), GenerateError> {
        CreateKeyspaceSpecification::validate(self)
    }
}

impl KeyspaceOptions for AlterKeyspaceSpecification {
    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    fn validate(&self) -> Result<(), GenerateError> {
        AlterKeyspaceSpecification::validate(self)
    }
}

/// Fluent builder shared by CREATE and ALTER KEYSPACE
#[derive(Debug, Clone)]
pub struct KeyspaceBuilder<S> {
    spec: S,
}

impl<S: KeyspaceOptions> KeyspaceBuilder<S> {
    pub fn with_option(mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) -> Self {
        self.spec.options_mut().insert(name, value);
        self
    }

    pub fn with_replication(self, strategy: ReplicationStrategy) -> Self {
        self.with_option(KeyspaceOption::Replication, strategy)
    }

    pub fn with_durable_writes(self, durable_writes: bool) -> Self {
        self.with_option(KeyspaceOption::DurableWrites, durable_writes)
    }

    /// Validate and produce the immutable specification
    pub fn build(self) -> Result<S, GenerateError> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

impl KeyspaceBuilder<CreateKeyspaceSpecification> {
    pub fn if_not_exists(mut self) -> Self {
        self.spec.if_not_exists = true;
        self
    }
}

/// Describes a keyspace to drop
#[derive(Debug, Clone, PartialEq)]
pub struct DropKeyspaceSpecification {
    name: String,
    if_exists: bool,
}

impl DropKeyspaceSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_exists: false,
        }
    }

    pub fn with_if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        require_name(&self.name, "DROP KEYSPACE")
    }
}

impl From<&CreateKeyspaceSpecification> for DropKeyspaceSpecification {
    fn from(spec: &CreateKeyspaceSpecification) -> Self {
        DropKeyspaceSpecification::new(spec.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_options_in_order() {
        let spec = CreateKeyspaceSpecification::builder("ks")
            .if_not_exists()
            .with_replication(ReplicationStrategy::simple(1))
            .with_durable_writes(true)
            .build()
            .unwrap();
        assert!(spec.if_not_exists());
        let names: Vec<&str> = spec.options().iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["replication", "durable_writes"]);
    }

    #[test]
    fn test_create_requires_name() {
        let result = CreateKeyspaceSpecification::builder("").build();
        assert_eq!(result.unwrap_err(), GenerateError::MissingName { statement: "CREATE KEYSPACE" });
    }

    #[test]
    fn test_alter_requires_options() {
        let result = AlterKeyspaceSpecification::builder("ks").build();
        assert!(matches!(result, Err(GenerateError::NothingToAlter { statement: "ALTER KEYSPACE", .. })));
    }

    #[test]
    fn test_duplicate_keyspace_option() {
        let result = AlterKeyspaceSpecification::builder("ks")
            .with_durable_writes(true)
            .with_option("DURABLE_WRITES", false)
            .build();
        assert!(matches!(result, Err(GenerateError::DuplicateOption { .. })));
    }
}
