//! Schema actions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// What to do with the objects declared in a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemaAction {
    /// Leave the schema untouched
    #[default]
    None,
    /// Create keyspaces, tables and indexes
    Create,
    /// Drop everything declared, then create it again
    Recreate,
    /// Drop everything declared
    Drop,
}

impl fmt::Display for SchemaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaAction::None => write!(f, "none"),
            SchemaAction::Create => write!(f, "create"),
            SchemaAction::Recreate => write!(f, "recreate"),
            SchemaAction::Drop => write!(f, "drop"),
        }
    }
}

/// Error when parsing a schema action string
#[derive(Debug, Clone)]
pub struct ParseSchemaActionError {
    pub input: String,
}

impl fmt::Display for ParseSchemaActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown schema action '{}'. Valid options: none, create, recreate, drop", self.input)
    }
}

impl std::error::Error for ParseSchemaActionError {}

impl FromStr for SchemaAction {
    type Err = ParseSchemaActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SchemaAction::None),
            "create" => Ok(SchemaAction::Create),
            "recreate" => Ok(SchemaAction::Recreate),
            "drop" => Ok(SchemaAction::Drop),
            _ => Err(ParseSchemaActionError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SchemaAction::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for SchemaAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl SchemaAction {
    pub fn drops(&self) -> bool {
        matches!(self, SchemaAction::Recreate | SchemaAction::Drop)
    }

    pub fn creates(&self) -> bool {
        matches!(self, SchemaAction::Create | SchemaAction::Recreate)
    }
}
