//! Integration tests for schema documents and scripts
//!
//! Load YAML fixtures and check the statements each schema action produces.

mod common;

use common::{init_tracing, load_fixture, position_of, run_script};
use cqlddl::{build_script, GenerateError, KeyType, SchemaAction};

#[test]
fn test_fixture_loads() {
    let schema = load_fixture("messaging.yaml");

    assert_eq!(schema.keyspaces.len(), 1);
    assert_eq!(schema.tables.len(), 2);
    assert_eq!(schema.indexes.len(), 1);

    let messages = schema.get_table(Some("messaging"), "messages").unwrap();
    let partition: Vec<&str> = messages
        .partition_key_columns()
        .unwrap()
        .iter()
        .map(|c| c.name())
        .collect();
    assert_eq!(partition, vec!["room_id", "bucket"]);
    assert_eq!(messages.get_column("sent_at").unwrap().key(), Some(KeyType::Clustering));
}

#[test]
fn test_create_script() {
    init_tracing();
    let script = run_script("messaging.yaml", SchemaAction::Create).expect("script should build");

    assert_eq!(
        script,
        vec![
            "CREATE KEYSPACE IF NOT EXISTS messaging WITH replication = \
             {'class': 'NetworkTopologyStrategy', 'dc1': 3, 'dc2': 2} AND durable_writes = true;",
            "CREATE TABLE IF NOT EXISTS messaging.messages (room_id uuid, bucket int, sent_at timeuuid, \
             sender text, body text, reactions map<text, frozen<set<text>>>, \
             PRIMARY KEY ((room_id, bucket), sent_at)) WITH CLUSTERING ORDER BY (sent_at DESC) \
             AND comment = 'room timeline, bucketed by day' AND default_time_to_live = 7776000 \
             AND compaction = {'class': 'TimeWindowCompactionStrategy', 'compaction_window_unit': 'DAYS', \
             'compaction_window_size': 1};",
            "CREATE TABLE messaging.\"UserRooms\" (\"userId\" uuid, joined timestamp, room_id uuid, \
             PRIMARY KEY (\"userId\", joined, room_id));",
            "CREATE INDEX IF NOT EXISTS messages_by_sender ON messaging.messages (sender);",
        ]
    );
}

#[test]
fn test_recreate_script_orders_drops_before_creates() {
    let script = run_script("messaging.yaml", SchemaAction::Recreate).expect("script should build");
    assert_eq!(script.len(), 8);

    let drop_index = position_of(&script, "DROP INDEX");
    let drop_table = position_of(&script, "DROP TABLE");
    let drop_keyspace = position_of(&script, "DROP KEYSPACE");
    let create_keyspace = position_of(&script, "CREATE KEYSPACE");
    let create_table = position_of(&script, "CREATE TABLE");
    let create_index = position_of(&script, "CREATE INDEX");

    assert!(drop_index < drop_table);
    assert!(drop_table < drop_keyspace);
    assert!(drop_keyspace < create_keyspace);
    assert!(create_keyspace < create_table);
    assert!(create_table < create_index);

    assert_eq!(script[0], "DROP INDEX IF EXISTS messaging.messages_by_sender;");
    assert_eq!(script[1], "DROP TABLE IF EXISTS messaging.\"UserRooms\";");
}

#[test]
fn test_script_is_idempotent() {
    let schema = load_fixture("messaging.yaml");
    let first = build_script(&schema, SchemaAction::Recreate).unwrap();
    let second = build_script(&schema, SchemaAction::Recreate).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_fixture_reports_configuration_error() {
    let schema = load_fixture("invalid_ordinals.yaml");
    let err = build_script(&schema, SchemaAction::Create).unwrap_err();
    assert_eq!(
        err,
        GenerateError::ConflictingOrdinals {
            table: "broken".to_string(),
            key: KeyType::Partition,
            ordinals: vec![1, 1],
        }
    );
}

#[test]
fn test_drop_only_needs_names() {
    // dropping does not render table bodies, so an invalid key layout is not an error
    let script = run_script("invalid_ordinals.yaml", SchemaAction::Drop).unwrap();
    assert_eq!(script, vec!["DROP TABLE IF EXISTS broken;"]);
}
