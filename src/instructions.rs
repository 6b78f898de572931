// 🧾 Payout Instructions - Preview of bank transfer instructions
//
// Builds the variable map a host sees while editing its instructions
// (account, amount, collective, reference, orderid) and renders the
// user-edited template against it.

use crate::account_details::AccountDetailsFormatter;
use crate::config::PreviewConfig;
use crate::template::{self, VariableMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// PREVIEW VALUES
// ============================================================================

/// Sample order values shown in the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewValues {
    pub amount: String,
    pub collective: String,
    pub reference: String,
}

impl Default for PreviewValues {
    fn default() -> Self {
        PreviewValues {
            amount: "$30".to_string(),
            collective: "acme".to_string(),
            reference: "76400".to_string(),
        }
    }
}

// ============================================================================
// DOCUMENTED VARIABLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstructionVariable {
    pub name: &'static str,
    pub description: &'static str,
}

const ACCOUNT_VARIABLE: InstructionVariable = InstructionVariable {
    name: "account",
    description: "bank account details added above",
};

const ORDER_VARIABLES: [InstructionVariable; 3] = [
    InstructionVariable {
        name: "amount",
        description: "total amount of the order",
    },
    InstructionVariable {
        name: "collective",
        description: "slug of the collective receiving the order",
    },
    InstructionVariable {
        name: "reference",
        description: "unique id to track when the order is received",
    },
];

/// Variables listed next to the editor. `account` only makes sense when the
/// account was entered through the structured bank form.
pub fn documented_variables(structured_form: bool) -> Vec<InstructionVariable> {
    let mut variables = Vec::with_capacity(ORDER_VARIABLES.len() + 1);
    if structured_form {
        variables.push(ACCOUNT_VARIABLE);
    }
    variables.extend(ORDER_VARIABLES);
    variables
}

// ============================================================================
// PREVIEW
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct InstructionsPreview {
    values: PreviewValues,
    formatter: AccountDetailsFormatter,
}

impl InstructionsPreview {
    pub fn new(values: PreviewValues, formatter: AccountDetailsFormatter) -> Self {
        InstructionsPreview { values, formatter }
    }

    pub fn from_config(config: PreviewConfig) -> Self {
        InstructionsPreview::new(config.values, AccountDetailsFormatter::new(config.formatter))
    }

    pub fn values(&self) -> &PreviewValues {
        &self.values
    }

    /// Variable map for one render; `account` is empty without an account
    pub fn variables(&self, account: Option<&Value>) -> VariableMap {
        let account_text = account
            .map(|record| self.formatter.format_value(record))
            .unwrap_or_default();

        VariableMap::new()
            .with("account", account_text)
            .with("amount", self.values.amount.as_str())
            .with("collective", self.values.collective.as_str())
            .with("reference", self.values.reference.as_str())
            .with("orderid", self.values.reference.as_str())
    }

    pub fn render(&self, template: &str, account: Option<&Value>) -> String {
        template::render(template, &self.variables(account))
    }
}

// ============================================================================
// TESTS
// ============================================================================
