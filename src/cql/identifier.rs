//! Identifier and literal rendering

use std::borrow::Cow;

/// Reserved CQL keywords; these can only be used as identifiers when quoted
const RESERVED_KEYWORDS: &[&str] = &[
    "add", "allow", "alter", "and", "apply", "asc", "authorize", "batch", "begin", "by",
    "columnfamily", "create", "delete", "desc", "describe", "drop", "entries", "execute",
    "from", "full", "grant", "if", "in", "index", "infinity", "insert", "into", "is",
    "keyspace", "limit", "materialized", "mbean", "mbeans", "modify", "nan", "norecursive",
    "not", "null", "of", "on", "or", "order", "primary", "rename", "replace", "revoke",
    "schema", "select", "set", "table", "to", "token", "truncate", "unlogged", "unset",
    "update", "use", "using", "view", "where", "with",
];

pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.binary_search(&name.to_ascii_lowercase().as_str()).is_ok()
}

/// Whether `name` can be written without quotes and keep its exact spelling
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Render an identifier following Cassandra's quoting rules.
///
/// Lower-case names made of `[a-z0-9_]` (starting with a letter) are emitted
/// as-is; anything else, including reserved keywords, is wrapped in double
/// quotes with embedded double quotes doubled.
pub fn quote_identifier(name: &str) -> Cow<'_, str> {
    if is_plain_identifier(name) && !is_reserved_keyword(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name.replace('"', "\"\"")))
    }
}

/// Render `keyspace.name`, quoting each part independently
pub fn qualified_name(keyspace: Option<&str>, name: &str) -> String {
    match keyspace {
        Some(ks) => format!("{}.{}", quote_identifier(ks), quote_identifier(name)),
        None => quote_identifier(name).into_owned(),
    }
}

/// Single-quote a string literal, doubling embedded single quotes
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
