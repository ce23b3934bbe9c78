//! CQL data type definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::cql::{qualified_name, quote_identifier};

/// A CQL column type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    /// US-ASCII string
    Ascii,
    /// 64-bit signed integer
    BigInt,
    /// Arbitrary bytes
    Blob,
    /// true or false
    Boolean,
    /// 64-bit distributed counter
    Counter,
    /// Date without time
    Date,
    /// Variable-precision decimal
    Decimal,
    /// 64-bit floating point
    Double,
    /// Duration with nanosecond precision
    Duration,
    /// 32-bit floating point
    Float,
    /// IPv4 or IPv6 address
    Inet,
    /// 32-bit signed integer
    Int,
    /// 16-bit signed integer
    SmallInt,
    /// UTF-8 string
    Text,
    /// Time of day
    Time,
    /// Date and time with millisecond precision
    Timestamp,
    /// Version 1 UUID
    TimeUuid,
    /// 8-bit signed integer
    TinyInt,
    /// Any UUID
    Uuid,
    /// UTF-8 string (alias of text kept as written)
    Varchar,
    /// Arbitrary-precision integer
    VarInt,
    /// Ordered collection
    List(Box<DataType>),
    /// Sorted set of unique values
    Set(Box<DataType>),
    /// Key/value collection
    Map(Box<DataType>, Box<DataType>),
    /// Fixed-length sequence of typed values
    Tuple(Vec<DataType>),
    /// Value serialized as a single blob
    Frozen(Box<DataType>),
    /// User-defined type, optionally keyspace-qualified (`ks.name`).
    ///
    /// The name keeps its spelling and is quoted on display when needed.
    UserDefined(String),
}

impl DataType {
    pub fn list(element: DataType) -> Self {
        DataType::List(Box::new(element))
    }

    pub fn set(element: DataType) -> Self {
        DataType::Set(Box::new(element))
    }

    pub fn map(key: DataType, value: DataType) -> Self {
        DataType::Map(Box::new(key), Box::new(value))
    }

    pub fn frozen(inner: DataType) -> Self {
        DataType::Frozen(Box::new(inner))
    }

    /// Check if this is a non-frozen collection
    pub fn is_collection(&self) -> bool {
        matches!(self, DataType::List(_) | DataType::Set(_) | DataType::Map(_, _))
    }

    pub fn is_counter(&self) -> bool {
        matches!(self, DataType::Counter)
    }

    /// Whether a column of this type may be part of a primary key.
    ///
    /// Counters and non-frozen collections cannot.
    pub fn can_be_key(&self) -> bool {
        !self.is_counter() && !self.is_collection()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Ascii => write!(f, "ascii"),
            DataType::BigInt => write!(f, "bigint"),
            DataType::Blob => write!(f, "blob"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Counter => write!(f, "counter"),
            DataType::Date => write!(f, "date"),
            DataType::Decimal => write!(f, "decimal"),
            DataType::Double => write!(f, "double"),
            DataType::Duration => write!(f, "duration"),
            DataType::Float => write!(f, "float"),
            DataType::Inet => write!(f, "inet"),
            DataType::Int => write!(f, "int"),
            DataType::SmallInt => write!(f, "smallint"),
            DataType::Text => write!(f, "text"),
            DataType::Time => write!(f, "time"),
            DataType::Timestamp => write!(f, "timestamp"),
            DataType::TimeUuid => write!(f, "timeuuid"),
            DataType::TinyInt => write!(f, "tinyint"),
            DataType::Uuid => write!(f, "uuid"),
            DataType::Varchar => write!(f, "varchar"),
            DataType::VarInt => write!(f, "varint"),
            DataType::List(element) => write!(f, "list<{}>", element),
            DataType::Set(element) => write!(f, "set<{}>", element),
            DataType::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            DataType::Tuple(elements) => {
                write!(f, "tuple<")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ">")
            }
            DataType::Frozen(inner) => write!(f, "frozen<{}>", inner),
            DataType::UserDefined(name) => match name.split_once('.') {
                Some((keyspace, name)) => f.write_str(&qualified_name(Some(keyspace), name)),
                None => f.write_str(&quote_identifier(name)),
            },
        }
    }
}

/// Error when parsing a data type string
#[derive(Debug, Clone)]
pub struct ParseDataTypeError {
    pub input: String,
    pub message: String,
}

impl fmt::Display for ParseDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data type '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ParseDataTypeError {}

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeParser { input: s, pos: 0 };
        let data_type = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos < s.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(data_type)
    }
}

/// Recursive-descent parser over a type expression such as `map<text, frozen<list<int>>>`
struct TypeParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn error(&self, message: &str) -> ParseDataTypeError {
        ParseDataTypeError {
            input: self.input.to_string(),
            message: message.to_string(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseDataTypeError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.error(&format!("expected '{}'", expected))),
        }
    }

    /// A type name as written, with quoted segments unescaped (`"Shop".address`)
    fn parse_name(&mut self) -> Result<String, ParseDataTypeError> {
        self.skip_whitespace();
        let mut name = String::new();
        loop {
            if self.peek() == Some('"') {
                self.parse_quoted_segment(&mut name)?;
            } else {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if !(c.is_ascii_alphanumeric() || c == '_') {
                        break;
                    }
                    self.pos += 1;
                }
                if start == self.pos {
                    return Err(self.error("expected a type name"));
                }
                name.push_str(&self.input[start..self.pos]);
            }
            if self.peek() != Some('.') {
                return Ok(name);
            }
            self.pos += 1;
            name.push('.');
        }
    }

    fn parse_quoted_segment(&mut self, name: &mut String) -> Result<(), ParseDataTypeError> {
        self.pos += 1;
        loop {
            match self.peek() {
                Some('"') if self.input[self.pos + 1..].starts_with('"') => {
                    name.push('"');
                    self.pos += 2;
                }
                Some('"') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(c) => {
                    name.push(c);
                    self.pos += c.len_utf8();
                }
                None => return Err(self.error("unterminated quoted name")),
            }
        }
    }

    fn parse_arguments(&mut self) -> Result<Vec<DataType>, ParseDataTypeError> {
        self.expect('<')?;
        let mut arguments = vec![self.parse_type()?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    arguments.push(self.parse_type()?);
                }
                Some('>') => {
                    self.pos += 1;
                    return Ok(arguments);
                }
                _ => return Err(self.error("expected ',' or '>'")),
            }
        }
    }

    fn parse_type(&mut self) -> Result<DataType, ParseDataTypeError> {
        let spelled = self.parse_name()?;
        let name = spelled.to_lowercase();
        self.skip_whitespace();
        let arguments = if self.peek() == Some('<') {
            Some(self.parse_arguments()?)
        } else {
            None
        };

        match (name.as_str(), arguments) {
            ("list", Some(mut args)) if args.len() == 1 => Ok(DataType::List(Box::new(args.remove(0)))),
            ("set", Some(mut args)) if args.len() == 1 => Ok(DataType::Set(Box::new(args.remove(0)))),
            ("frozen", Some(mut args)) if args.len() == 1 => Ok(DataType::Frozen(Box::new(args.remove(0)))),
            ("map", Some(mut args)) if args.len() == 2 => {
                let value = args.remove(1);
                let key = args.remove(0);
                Ok(DataType::Map(Box::new(key), Box::new(value)))
            }
            ("tuple", Some(args)) => Ok(DataType::Tuple(args)),
            ("list" | "set" | "frozen", _) => Err(self.error(&format!("{} requires exactly one type argument", name))),
            ("map", _) => Err(self.error("map requires a key and a value type")),
            ("tuple", None) => Err(self.error("tuple requires at least one type argument")),
            (_, Some(_)) => Err(self.error(&format!("type '{}' takes no type arguments", name))),
            (simple, None) => Ok(native_type(simple).unwrap_or(DataType::UserDefined(spelled))),
        }
    }
}

fn native_type(name: &str) -> Option<DataType> {
    let data_type = match name {
        "ascii" => DataType::Ascii,
        "bigint" => DataType::BigInt,
        "blob" => DataType::Blob,
        "boolean" => DataType::Boolean,
        "counter" => DataType::Counter,
        "date" => DataType::Date,
        "decimal" => DataType::Decimal,
        "double" => DataType::Double,
        "duration" => DataType::Duration,
        "float" => DataType::Float,
        "inet" => DataType::Inet,
        "int" => DataType::Int,
        "smallint" => DataType::SmallInt,
        "text" => DataType::Text,
        "time" => DataType::Time,
        "timestamp" => DataType::Timestamp,
        "timeuuid" => DataType::TimeUuid,
        "tinyint" => DataType::TinyInt,
        "uuid" => DataType::Uuid,
        "varchar" => DataType::Varchar,
        "varint" => DataType::VarInt,
        _ => return None,
    };
    Some(data_type)
}

// Custom deserialize from string
impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DataType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// Serialize back to string
impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
