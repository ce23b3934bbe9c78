//! WITH-clause rendering shared by every statement kind

use tracing::trace;
use crate::specification::{OptionValue, Options};
use super::identifier::quote_literal;

/// Render a single option value according to its kind
pub fn render_option_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Flag => String::new(),
        OptionValue::String(s) => quote_literal(s),
        OptionValue::Integer(i) => i.to_string(),
        OptionValue::Float(f) => f.to_string(),
        OptionValue::Boolean(b) => b.to_string(),
        OptionValue::Map(entries) => render_map(entries),
    }
}

/// `{'key': value, ...}`
fn render_map(entries: &Options) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}: {}", quote_literal(key), render_option_value(value)))
        .collect();
    format!("{{{}}}", items.join(", "))
}

fn render_option(name: &str, value: &OptionValue) -> String {
    match value {
        OptionValue::Flag => name.to_string(),
        other => format!("{} = {}", name, render_option_value(other)),
    }
}

/// Render ` WITH <leading> AND <name> = <value> AND ...`.
///
/// `leading` holds clauses that are not name/value pairs, such as
/// `CLUSTERING ORDER BY (...)`; they come first. Returns an empty string when
/// there is nothing to render.
pub fn render_with_options(leading: &[String], options: &Options) -> String {
    let clauses: Vec<String> = leading
        .iter()
        .cloned()
        .chain(options.iter().map(|(name, value)| render_option(name, value)))
        .collect();

    if clauses.is_empty() {
        String::new()
    } else {
        format!(" WITH {}", clauses.join(" AND "))
    }
}

/// Append one complete statement to `cql`.
///
/// `body` writes the statement-specific part; the WITH clause and the
/// terminating `;` are appended after it.
pub fn write_statement<'a, F>(
    cql: &'a mut String,
    leading: &[String],
    options: &Options,
    body: F,
) -> &'a mut String
where
    F: FnOnce(&mut String),
{
    let start = cql.len();
    body(cql);
    cql.push_str(&render_with_options(leading, options));
    cql.push(';');
    trace!(statement = &cql[start..], "rendered statement");
    cql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_render_nothing() {
        assert_eq!(render_with_options(&[], &Options::new()), "");
    }

    #[test]
    fn test_option_kinds() {
        let options = Options::new()
            .with("comment", "it's mine")
            .with("gc_grace_seconds", 864000)
            .with("bloom_filter_fp_chance", 0.01)
            .with("durable_writes", false);
        assert_eq!(
            render_with_options(&[], &options),
            " WITH comment = 'it''s mine' AND gc_grace_seconds = 864000 AND bloom_filter_fp_chance = 0.01 AND durable_writes = false"
        );
    }

    #[test]
    fn test_map_option() {
        let options = Options::new().with(
            "compaction",
            Options::new().with("class", "LeveledCompactionStrategy").with("sstable_size_in_mb", 160),
        );
        assert_eq!(
            render_with_options(&[], &options),
            " WITH compaction = {'class': 'LeveledCompactionStrategy', 'sstable_size_in_mb': 160}"
        );
    }

    #[test]
    fn test_flag_and_leading_clause() {
        let options = Options::new().with("COMPACT STORAGE", OptionValue::Flag).with("comment", "c");
        let leading = vec!["CLUSTERING ORDER BY (ts DESC)".to_string()];
        assert_eq!(
            render_with_options(&leading, &options),
            " WITH CLUSTERING ORDER BY (ts DESC) AND COMPACT STORAGE AND comment = 'c'"
        );
    }

    #[test]
    fn test_write_statement_appends_and_chains() {
        let mut cql = String::from("USE ks;");
        let out = write_statement(&mut cql, &[], &Options::new(), |cql| cql.push_str(" DROP TABLE t"));
        out.push('\n');
        assert_eq!(cql, "USE ks; DROP TABLE t;\n");
    }
}
