//! Shared test utilities for integration tests

#![allow(dead_code)]

use cqlddl::{build_script, parser, Schema, SchemaAction};

/// Load a test fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Schema {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Run the full pipeline: fixture + action → CQL statements
pub fn run_script(name: &str, action: SchemaAction) -> Result<Vec<String>, String> {
    let schema = load_fixture(name);
    build_script(&schema, action).map_err(|e| format!("Generation failed: {}", e))
}

/// Install a test subscriber so `RUST_LOG=debug cargo test` shows generator logs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Index of the first statement starting with `prefix`
pub fn position_of(script: &[String], prefix: &str) -> usize {
    script
        .iter()
        .position(|s| s.starts_with(prefix))
        .unwrap_or_else(|| panic!("no statement starting with {:?} in {:#?}", prefix, script))
}
