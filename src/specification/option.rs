//! Statement options (the `WITH name = value` part of DDL)

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use crate::cql::GenerateError;

/// Value bound to an option name
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Option rendered by name alone (e.g. `COMPACT STORAGE`)
    Flag,
    /// Single-quoted string literal
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// `{'key': value, ...}`
    Map(Options),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Boolean(value)
    }
}

impl From<Options> for OptionValue {
    fn from(value: Options) -> Self {
        OptionValue::Map(value)
    }
}

/// Ordered mapping of option name to value.
///
/// Insertion order is kept so rendered statements are stable. Names are not
/// deduplicated here; duplicates are reported when a statement is generated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option, returning `self` for chaining
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<OptionValue>) {
        self.entries.push((name.as_ref().to_string(), value.into()));
    }

    /// Get the first value bound to `name` (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First option name that appears more than once (case-insensitive)
    pub fn duplicate_name(&self) -> Option<&str> {
        self.entries.iter().enumerate().find_map(|(i, (name, _))| {
            self.entries[..i]
                .iter()
                .any(|(earlier, _)| earlier.eq_ignore_ascii_case(name))
                .then_some(name.as_str())
        })
    }

    /// Check names and values before the options are rendered.
    ///
    /// Top-level names are unique ignoring case. Keys of nested maps are string
    /// literals and only exact repeats clash. Flags render as a bare name, so
    /// they are only allowed at the top level.
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.validate_within(None)
    }

    fn validate_within(&self, parent: Option<&str>) -> Result<(), GenerateError> {
        let qualify = |name: &str| match parent {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        };

        if self.entries.iter().any(|(name, _)| name.is_empty()) {
            return Err(GenerateError::EmptyIdentifier {
                context: match parent {
                    Some(parent) => format!("key of option '{}'", parent),
                    None => "option name".to_string(),
                },
            });
        }

        let duplicate = match parent {
            None => self.duplicate_name(),
            Some(_) => self.entries.iter().enumerate().find_map(|(i, (name, _))| {
                self.entries[..i]
                    .iter()
                    .any(|(earlier, _)| earlier == name)
                    .then_some(name.as_str())
            }),
        };
        if let Some(name) = duplicate {
            return Err(GenerateError::DuplicateOption { name: qualify(name) });
        }

        for (name, value) in &self.entries {
            match value {
                OptionValue::Flag if parent.is_some() => {
                    return Err(GenerateError::InvalidOptionValue {
                        name: qualify(name),
                        reason: "a map entry needs a value",
                    });
                }
                OptionValue::Float(f) if !f.is_finite() => {
                    return Err(GenerateError::InvalidOptionValue {
                        name: qualify(name),
                        reason: "floating point values must be finite",
                    });
                }
                OptionValue::Map(inner) => inner.validate_within(Some(qualify(name).as_str()))?,
                _ => {}
            }
        }
        Ok(())
    }
}

// ============================================================================
// Well-known option names
// ============================================================================

/// Table options understood by Cassandra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableOption {
    Comment,
    GcGraceSeconds,
    DefaultTimeToLive,
    BloomFilterFpChance,
    ReadRepairChance,
    DcLocalReadRepairChance,
    SpeculativeRetry,
    MemtableFlushPeriodInMs,
    Caching,
    Compaction,
    Compression,
    /// Takes no value, use `OptionValue::Flag`
    CompactStorage,
}

impl TableOption {
    pub fn name(&self) -> &'static str {
        match self {
            TableOption::Comment => "comment",
            TableOption::GcGraceSeconds => "gc_grace_seconds",
            TableOption::DefaultTimeToLive => "default_time_to_live",
            TableOption::BloomFilterFpChance => "bloom_filter_fp_chance",
            TableOption::ReadRepairChance => "read_repair_chance",
            TableOption::DcLocalReadRepairChance => "dclocal_read_repair_chance",
            TableOption::SpeculativeRetry => "speculative_retry",
            TableOption::MemtableFlushPeriodInMs => "memtable_flush_period_in_ms",
            TableOption::Caching => "caching",
            TableOption::Compaction => "compaction",
            TableOption::Compression => "compression",
            TableOption::CompactStorage => "COMPACT STORAGE",
        }
    }
}

impl AsRef<str> for TableOption {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// Keyspace options understood by Cassandra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyspaceOption {
    Replication,
    DurableWrites,
}

impl KeyspaceOption {
    pub fn name(&self) -> &'static str {
        match self {
            KeyspaceOption::Replication => "replication",
            KeyspaceOption::DurableWrites => "durable_writes",
        }
    }
}

impl AsRef<str> for KeyspaceOption {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// Replica placement strategy for the `replication` keyspace option
#[derive(Debug, Clone, PartialEq)]
pub enum ReplicationStrategy {
    Simple {
        replication_factor: u32,
    },
    /// Replication factor per data center, in declaration order
    NetworkTopology {
        data_centers: Vec<(String, u32)>,
    },
}

impl ReplicationStrategy {
    pub fn simple(replication_factor: u32) -> Self {
        ReplicationStrategy::Simple { replication_factor }
    }

    pub fn network_topology<I, S>(data_centers: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        ReplicationStrategy::NetworkTopology {
            data_centers: data_centers.into_iter().map(|(dc, rf)| (dc.into(), rf)).collect(),
        }
    }

    /// The strategy's `class` value
    pub fn class_name(&self) -> &'static str {
        match self {
            ReplicationStrategy::Simple { .. } => "SimpleStrategy",
            ReplicationStrategy::NetworkTopology { .. } => "NetworkTopologyStrategy",
        }
    }

    pub fn to_options(&self) -> Options {
        let options = Options::new().with("class", self.class_name());
        match self {
            ReplicationStrategy::Simple { replication_factor } => {
                options.with("replication_factor", *replication_factor)
            }
            ReplicationStrategy::NetworkTopology { data_centers } => data_centers
                .iter()
                .fold(options, |opts, (dc, rf)| opts.with(dc, *rf)),
        }
    }
}

impl From<ReplicationStrategy> for OptionValue {
    fn from(value: ReplicationStrategy) -> Self {
        OptionValue::Map(value.to_options())
    }
}

// ============================================================================
// Serde
// ============================================================================

struct OptionValueVisitor;

impl<'de> Visitor<'de> for OptionValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean, map or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<OptionValue, E> {
        Ok(OptionValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<OptionValue, E> {
        Ok(OptionValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<OptionValue, E> {
        i64::try_from(v)
            .map(OptionValue::Integer)
            .map_err(|_| E::custom(format!("integer option value {} is out of range", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<OptionValue, E> {
        Ok(OptionValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OptionValue, E> {
        Ok(OptionValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<OptionValue, E> {
        Ok(OptionValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<OptionValue, E> {
        Ok(OptionValue::Flag)
    }

    fn visit_none<E: de::Error>(self) -> Result<OptionValue, E> {
        Ok(OptionValue::Flag)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<OptionValue, A::Error> {
        OptionsVisitor.visit_map(map).map(OptionValue::Map)
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionValueVisitor)
    }
}

impl Serialize for OptionValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionValue::Flag => serializer.serialize_unit(),
            OptionValue::String(s) => serializer.serialize_str(s),
            OptionValue::Integer(i) => serializer.serialize_i64(*i),
            OptionValue::Float(f) => serializer.serialize_f64(*f),
            OptionValue::Boolean(b) => serializer.serialize_bool(*b),
            OptionValue::Map(options) => options.serialize(serializer),
        }
    }
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = Options;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of option names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Options, A::Error> {
        let mut options = Options::new();
        while let Some((name, value)) = map.next_entry::<String, OptionValue>()? {
            options.insert(name, value);
        }
        Ok(options)
    }
}

// Deserialize from a map, keeping document order
impl<'de> Deserialize<'de> for Options {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OptionsVisitor)
    }
}

impl Serialize for Options {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_keep_insertion_order() {
        let options = Options::new()
            .with("zeta", 1)
            .with("alpha", "a")
            .with("mid", true);
        let names: Vec<&str> = options.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_name_is_case_insensitive() {
        let options = Options::new().with("comment", "a").with("gc_grace_seconds", 10).with("COMMENT", "b");
        assert_eq!(options.duplicate_name(), Some("COMMENT"));
        assert_eq!(Options::new().with("a", 1).duplicate_name(), None);
    }

    #[test]
    fn test_validate_accepts_well_formed_options() {
        let options = Options::new()
            .with("COMPACT STORAGE", OptionValue::Flag)
            .with("bloom_filter_fp_chance", 0.01)
            .with("replication", ReplicationStrategy::network_topology([("dc1", 3), ("DC1", 2)]));
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_top_level_name() {
        let options = Options::new().with("comment", "a").with("Comment", "b");
        assert_eq!(
            options.validate(),
            Err(GenerateError::DuplicateOption { name: "Comment".into() })
        );
    }

    #[test]
    fn test_validate_rejects_repeated_map_key() {
        let options = Options::new().with(
            "replication",
            ReplicationStrategy::network_topology([("dc1", 3), ("class", 1)]),
        );
        assert_eq!(
            options.validate(),
            Err(GenerateError::DuplicateOption { name: "replication.class".into() })
        );
    }

    #[test]
    fn test_validate_rejects_flag_inside_map() {
        let compaction = Options::new().with("class", "X").with("enabled", OptionValue::Flag);
        let options = Options::new().with("compaction", compaction);
        match options.validate() {
            Err(GenerateError::InvalidOptionValue { name, .. }) => assert_eq!(name, "compaction.enabled"),
            other => panic!("expected InvalidOptionValue, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        assert!(matches!(
            Options::new().with("", 1).validate(),
            Err(GenerateError::EmptyIdentifier { .. })
        ));
        let nested = Options::new().with("caching", Options::new().with("", "ALL"));
        match nested.validate() {
            Err(GenerateError::EmptyIdentifier { context }) => assert!(context.contains("caching")),
            other => panic!("expected EmptyIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_floats() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let options = Options::new().with("bloom_filter_fp_chance", value);
            assert!(matches!(
                options.validate(),
                Err(GenerateError::InvalidOptionValue { ref name, .. }) if name == "bloom_filter_fp_chance"
            ));
        }
        let nested = Options::new().with("compression", Options::new().with("crc_check_chance", f64::NAN));
        assert!(matches!(nested.validate(), Err(GenerateError::InvalidOptionValue { .. })));
    }

    #[test]
    fn test_replication_strategy_options() {
        let simple = ReplicationStrategy::simple(3).to_options();
        assert_eq!(simple.get("class"), Some(&OptionValue::String("SimpleStrategy".into())));
        assert_eq!(simple.get("replication_factor"), Some(&OptionValue::Integer(3)));

        let nts = ReplicationStrategy::network_topology([("DC1", 3), ("dc2", 2)]).to_options();
        let names: Vec<&str> = nts.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["class", "DC1", "dc2"]);
    }

    #[test]
    fn test_deserialize_option_kinds() {
        let yaml = "comment: hello\ngc_grace_seconds: 864000\nbloom_filter_fp_chance: 0.01\ndurable_writes: false\nCOMPACT STORAGE: ~\ncompaction:\n  class: LeveledCompactionStrategy\n  sstable_size_in_mb: 160\n";
        let options: Options = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(options.len(), 6);
        assert_eq!(options.get("comment"), Some(&OptionValue::String("hello".into())));
        assert_eq!(options.get("gc_grace_seconds"), Some(&OptionValue::Integer(864000)));
        assert_eq!(options.get("bloom_filter_fp_chance"), Some(&OptionValue::Float(0.01)));
        assert_eq!(options.get("durable_writes"), Some(&OptionValue::Boolean(false)));
        assert_eq!(options.get("compact storage"), Some(&OptionValue::Flag));
        match options.get("compaction") {
            Some(OptionValue::Map(inner)) => {
                let names: Vec<&str> = inner.iter().map(|(n, _)| n).collect();
                assert_eq!(names, vec!["class", "sstable_size_in_mb"]);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_serialize_keeps_order() {
        let options = Options::new().with("b", 1).with("a", "x");
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"b":1,"a":"x"}"#);
    }
}
