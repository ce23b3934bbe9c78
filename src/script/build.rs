//! Schema script assembly

use tracing::info;
use crate::cql::{CqlGenerator, GenerateError, Statement};
use crate::specification::{DropIndexSpecification, DropKeyspaceSpecification, DropTableSpecification, Schema};
use super::action::SchemaAction;

/// The statements `action` implies for `schema`, in execution order.
///
/// Drops come first and run in reverse dependency order (indexes, tables,
/// keyspaces), each guarded by `IF EXISTS`. Creates follow in document order
/// (keyspaces, tables, indexes).
pub fn plan_statements(schema: &Schema, action: SchemaAction) -> Vec<Statement> {
    let mut statements: Vec<Statement> = Vec::new();

    if action.drops() {
        statements.extend(
            schema
                .indexes
                .iter()
                .rev()
                .map(|index| Statement::from(DropIndexSpecification::from(index).with_if_exists())),
        );
        statements.extend(
            schema
                .tables
                .iter()
                .rev()
                .map(|table| Statement::from(DropTableSpecification::from(table).with_if_exists())),
        );
        statements.extend(
            schema
                .keyspaces
                .iter()
                .rev()
                .map(|keyspace| Statement::from(DropKeyspaceSpecification::from(keyspace).with_if_exists())),
        );
    }

    if action.creates() {
        statements.extend(schema.keyspaces.iter().cloned().map(Statement::from));
        statements.extend(schema.tables.iter().cloned().map(Statement::from));
        statements.extend(schema.indexes.iter().cloned().map(Statement::from));
    }

    statements
}

/// Render the script for `action`, one CQL statement per entry.
///
/// Fails on the first invalid specification; no partial script is returned.
pub fn build_script(schema: &Schema, action: SchemaAction) -> Result<Vec<String>, GenerateError> {
    let script = plan_statements(schema, action)
        .iter()
        .map(|statement| statement.to_cql())
        .collect::<Result<Vec<_>, _>>()?;

    info!(action = %action, statements = script.len(), "built schema script");
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    const SCHEMA: &str = r#"
keyspaces:
  - name: app
tables:
  - name: users
    keyspace: app
    columns:
      - { name: id, type: uuid, key: partition }
      - { name: email, type: text }
  - name: sessions
    keyspace: app
    columns:
      - { name: user_id, type: uuid, key: partition }
      - { name: started, type: timestamp, key: clustering }
indexes:
  - { table: users, keyspace: app, column: email }
"#;

    #[test]
    fn test_none_is_empty() {
        let schema = parse_str(SCHEMA).unwrap();
        assert!(build_script(&schema, SchemaAction::None).unwrap().is_empty());
    }

    #[test]
    fn test_create_in_document_order() {
        let schema = parse_str(SCHEMA).unwrap();
        let script = build_script(&schema, SchemaAction::Create).unwrap();
        assert_eq!(
            script,
            vec![
                "CREATE KEYSPACE app;",
                "CREATE TABLE app.users (id uuid, email text, PRIMARY KEY (id));",
                "CREATE TABLE app.sessions (user_id uuid, started timestamp, PRIMARY KEY (user_id, started));",
                "CREATE INDEX ON app.users (email);",
            ]
        );
    }

    #[test]
    fn test_drop_in_reverse_dependency_order() {
        let schema = parse_str(SCHEMA).unwrap();
        let script = build_script(&schema, SchemaAction::Drop).unwrap();
        assert_eq!(
            script,
            vec![
                "DROP INDEX IF EXISTS app.users_email_idx;",
                "DROP TABLE IF EXISTS app.sessions;",
                "DROP TABLE IF EXISTS app.users;",
                "DROP KEYSPACE IF EXISTS app;",
            ]
        );
    }

    #[test]
    fn test_recreate_drops_then_creates() {
        let schema = parse_str(SCHEMA).unwrap();
        let kinds: Vec<&str> = plan_statements(&schema, SchemaAction::Recreate)
            .iter()
            .map(|s| s.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "DROP INDEX", "DROP TABLE", "DROP TABLE", "DROP KEYSPACE",
                "CREATE KEYSPACE", "CREATE TABLE", "CREATE TABLE", "CREATE INDEX",
            ]
        );
    }

    #[test]
    fn test_invalid_table_fails_whole_script() {
        let schema = parse_str("tables:\n  - name: t\n    columns:\n      - { name: a, type: int }\n").unwrap();
        let err = build_script(&schema, SchemaAction::Create).unwrap_err();
        assert_eq!(err, GenerateError::NoPartitionKey { table: "t".into() });
    }
}
