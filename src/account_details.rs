// 🏦 Account Details - Payout account record → readable text block
//
// A payout account arrives as a JSON tree (bank name, IBAN, address, ...).
// The formatter walks it and emits one "Label: value" line per leaf:
// - ignored keys (type, currency, ...) are dropped at every level
// - primitives come before nested records at each level (stable partition)
// - nested records get an unindented label line, then their children
//   indented two more spaces
// - a nested `details` record is spliced in place, without label or indent

use crate::config::FormatterConfig;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

/// Nested key/value description of a bank or payout account
pub type AccountRecord = Map<String, Value>;

const NESTED_INDENT: &str = "  ";

/// Key whose nested record is flattened into its parent
const SPLICED_KEY: &str = "details";

// ============================================================================
// FORMATTER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AccountDetailsFormatter {
    config: FormatterConfig,
}

impl AccountDetailsFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        AccountDetailsFormatter { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render a record as newline-joined lines. Empty record → empty string.
    pub fn format(&self, record: &AccountRecord) -> String {
        let entries = record
            .iter()
            .map(|(key, value)| (Cow::Borrowed(key.as_str()), value))
            .collect();

        self.finish(entries)
    }

    /// Render any JSON value. Primitive roots have no entries and render empty.
    pub fn format_value(&self, value: &Value) -> String {
        match nested_entries(value) {
            Some(entries) => self.finish(entries),
            None => String::new(),
        }
    }

    /// Label for a key: literal override, else `KEY: ` for all-caps keys,
    /// else the title-cased key followed by `: `
    pub fn label(&self, key: &str) -> String {
        if let Some(label) = self.config.label_override(key) {
            return label.to_string();
        }

        if key.to_uppercase() == key {
            format!("{}: ", key)
        } else {
            format!("{}: ", title_case(key))
        }
    }

    fn finish(&self, entries: Vec<(Cow<'_, str>, &Value)>) -> String {
        let mut lines = Vec::new();
        self.render_entries(entries, "", &mut lines);

        debug!(lines = lines.len(), "formatted account details");
        lines.join("\n")
    }

    fn render_entries(&self, entries: Vec<(Cow<'_, str>, &Value)>, prefix: &str, lines: &mut Vec<String>) {
        let (primitives, nested): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .filter(|(key, _)| !self.config.is_ignored(key))
            .partition(|(_, value)| !is_nested(value));

        for (key, value) in primitives {
            lines.push(format!("{}{}{}", prefix, self.label(&key), primitive_text(value)));
        }

        for (key, value) in nested {
            let children = nested_entries(value).unwrap_or_default();

            if key == SPLICED_KEY {
                self.render_entries(children, prefix, lines);
            } else {
                lines.push(self.label(&key));
                let child_prefix = format!("{}{}", prefix, NESTED_INDENT);
                self.render_entries(children, &child_prefix, lines);
            }
        }
    }
}

/// Format with the default ignored keys and labels
pub fn format_account_details(value: &Value) -> String {
    AccountDetailsFormatter::default().format_value(value)
}

// ============================================================================
// VALUE HELPERS
// ============================================================================

fn is_nested(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Entries of an object, or of an array keyed by element index
fn nested_entries(value: &Value) -> Option<Vec<(Cow<'_, str>, &Value)>> {
    match value {
        Value::Object(map) => Some(
            map.iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), value))
                .collect(),
        ),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| (Cow::Owned(index.to_string()), value))
                .collect(),
        ),
        _ => None,
    }
}

fn primitive_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TITLE CASE
// ============================================================================

/// `firstLine` → `First Line`, `bank_name` → `Bank Name`, `XMLHttp` → `XML Http`
pub fn title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| upper_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();

            let camel_hump = prev.is_lowercase() && c.is_uppercase();
            let digit_edge = prev.is_numeric() != c.is_numeric();
            let acronym_end =
                prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);

            if camel_hump || digit_edge || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
