// 📝 Template Renderer - `{name}` placeholder substitution
//
// Single left-to-right pass over the template. Names are matched
// case-insensitively; unknown placeholders stay in the output verbatim and
// substituted text is never re-scanned.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// `{` + at least one character (newlines included, non-greedy) + `}`
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{(.+?)\}").expect("placeholder pattern is valid"));

// ============================================================================
// VARIABLE MAP
// ============================================================================

/// Placeholder name → replacement text. Names are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    values: BTreeMap<String, String>,
}

impl VariableMap {
    pub fn new() -> Self {
        VariableMap::default()
    }

    /// Insert a value; the name is lowercased first
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.as_ref().to_lowercase(), value.into())
    }

    /// Builder: add a variable
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for VariableMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Substitute every known `{name}`; leave the rest untouched
pub fn render(template: &str, variables: &VariableMap) -> String {
    let rendered = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| {
        match variables.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    });

    debug!(
        template_len = template.len(),
        rendered_len = rendered.len(),
        "rendered template"
    );
    rendered.into_owned()
}

/// Lowercased placeholder names, in order of appearance
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

/// Placeholder names with no value in `variables` (deduplicated, in order)
pub fn unresolved(template: &str, variables: &VariableMap) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();

    for name in placeholders(template) {
        if !variables.contains(&name) && !missing.contains(&name) {
            missing.push(name);
        }
    }

    missing
}

// ============================================================================
// TESTS
// ============================================================================
