// Payout Instructions - Core Library
// Exposes all modules for use in the CLI and tests

pub mod account_details; // Account record → "Label: value" lines
pub mod template;        // `{name}` placeholder substitution
pub mod instructions;    // Bank transfer instructions preview
pub mod config;          // JSON-loadable formatter/preview settings
pub mod features;        // Collective feature flags
pub mod dates;           // Recurring charge dates

// Re-export commonly used types
pub use account_details::{
    AccountDetailsFormatter, AccountRecord,
    format_account_details, title_case,
};
pub use template::{render, placeholders, unresolved, VariableMap};
pub use instructions::{
    InstructionsPreview, InstructionVariable, PreviewValues,
    documented_variables,
};
pub use config::{FormatterConfig, PreviewConfig, load_account_record};
pub use features::{Feature, CollectiveType, has_feature, is_feature_allowed_for_collective_type};
pub use dates::{Interval, next_charge_date, to_iso_date_str, date_12_months_ago};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
