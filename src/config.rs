// ⚙️ Configuration - Formatter and preview settings as data
// Every field has a default, so a JSON file only needs the keys it overrides

use crate::instructions::PreviewValues;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Keys never rendered, at any nesting level
pub const DEFAULT_IGNORED_KEYS: [&str; 3] = ["type", "isManualBankTransfer", "currency"];

/// Keys with a literal label instead of a derived one
pub const DEFAULT_LABELS: [(&str, &str); 2] = [("abartn", "Routing Number: "), ("firstLine", "")];

// ============================================================================
// FORMATTER CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Keys skipped wherever they appear
    pub ignored_keys: Vec<String>,

    /// Literal labels, looked up before the derived label rule
    pub labels: HashMap<String, String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            ignored_keys: DEFAULT_IGNORED_KEYS.iter().map(|k| k.to_string()).collect(),
            labels: DEFAULT_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl FormatterConfig {
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored_keys.iter().any(|k| k == key)
    }

    pub fn label_override(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

// ============================================================================
// PREVIEW CONFIG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Sample values substituted into the preview
    pub values: PreviewValues,

    pub formatter: FormatterConfig,
}

impl PreviewConfig {
    /// Load a config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        PreviewConfig::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config JSON")
    }
}

/// Read an account record (any JSON document) from disk
pub fn load_account_record<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read account file: {:?}", path.as_ref()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse account JSON: {:?}", path.as_ref()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_formatter_config() {
        let config = FormatterConfig::default();

        assert!(config.is_ignored("type"));
        assert!(config.is_ignored("isManualBankTransfer"));
        assert!(config.is_ignored("currency"));
        assert!(!config.is_ignored("accountNumber"));
        assert_eq!(config.label_override("abartn"), Some("Routing Number: "));
        assert_eq!(config.label_override("firstLine"), Some(""));
        assert_eq!(config.label_override("city"), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PreviewConfig::from_json(r#"{"values": {"amount": "€50"}}"#).unwrap();

        assert_eq!(config.values.amount, "€50");
        assert_eq!(config.values.collective, "acme");
        assert_eq!(config.values.reference, "76400");
        assert_eq!(config.formatter, FormatterConfig::default());
    }

    #[test]
    fn test_formatter_overrides_from_json() {
        let config = PreviewConfig::from_json(
            r#"{"formatter": {"ignoredKeys": ["legalType"], "labels": {"sortCode": "Sort: "}}}"#,
        )
        .unwrap();

        assert!(config.formatter.is_ignored("legalType"));
        assert!(!config.formatter.is_ignored("type"));
        assert_eq!(config.formatter.label_override("sortCode"), Some("Sort: "));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = PreviewConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config JSON"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"values": {{"collective": "webpack"}}}}"#).unwrap();

        let config = PreviewConfig::from_file(file.path()).unwrap();
        assert_eq!(config.values.collective, "webpack");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = PreviewConfig::from_file("/nonexistent/payout-config.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_account_record() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"accountHolderName": "Jane", "IBAN": "FR76"}}"#).unwrap();

        let record = load_account_record(file.path()).unwrap();
        assert_eq!(record["IBAN"], "FR76");
    }
}
