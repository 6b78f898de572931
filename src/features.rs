// 🚩 Collective Features - Which features a collective may use
//
// Two checks, in order:
// 1. Is the feature allowed for this collective type at all?
// 2. If the feature is opt-in, is its settings flag set (truthy)?

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

// ============================================================================
// FEATURE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    Conversations,
    CollectiveGoals,
    ReceiveExpenses,
    Updates,
    Transferwise,
    PaypalPayouts,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Conversations,
        Feature::CollectiveGoals,
        Feature::ReceiveExpenses,
        Feature::Updates,
        Feature::Transferwise,
        Feature::PaypalPayouts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Conversations => "CONVERSATIONS",
            Feature::CollectiveGoals => "COLLECTIVE_GOALS",
            Feature::ReceiveExpenses => "RECEIVE_EXPENSES",
            Feature::Updates => "UPDATES",
            Feature::Transferwise => "TRANSFERWISE",
            Feature::PaypalPayouts => "PAYPAL_PAYOUTS",
        }
    }

    /// Dotted path of the opt-in flag inside the collective
    pub fn flag_path(&self) -> Option<&'static str> {
        match self {
            Feature::Conversations => Some("settings.features.conversations"),
            Feature::CollectiveGoals => Some("settings.collectivePage.showGoals"),
            Feature::Updates => Some("settings.features.updates"),
            Feature::Transferwise => Some("settings.features.transferwise"),
            Feature::PaypalPayouts => Some("settings.features.paypalPayouts"),
            Feature::ReceiveExpenses => None,
        }
    }

    /// Collective types allowed to use the feature; `None` means every type
    fn allowed_types(&self) -> Option<&'static [CollectiveType]> {
        match self {
            Feature::Conversations | Feature::Updates => Some(COMMUNITY_TYPES),
            Feature::ReceiveExpenses => Some(EXPENSE_TYPES),
            _ => None,
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown feature: {}", s))
    }
}

// ============================================================================
// COLLECTIVE TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectiveType {
    Collective,
    Organization,
    Event,
    User,
    Fund,
    Project,
}

impl CollectiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectiveType::Collective => "COLLECTIVE",
            CollectiveType::Organization => "ORGANIZATION",
            CollectiveType::Event => "EVENT",
            CollectiveType::User => "USER",
            CollectiveType::Fund => "FUND",
            CollectiveType::Project => "PROJECT",
        }
    }
}

impl FromStr for CollectiveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COLLECTIVE" => Ok(CollectiveType::Collective),
            "ORGANIZATION" => Ok(CollectiveType::Organization),
            "EVENT" => Ok(CollectiveType::Event),
            "USER" => Ok(CollectiveType::User),
            "FUND" => Ok(CollectiveType::Fund),
            "PROJECT" => Ok(CollectiveType::Project),
            _ => Err(format!("unknown collective type: {}", s)),
        }
    }
}

const COMMUNITY_TYPES: &[CollectiveType] = &[CollectiveType::Collective, CollectiveType::Organization];
const EXPENSE_TYPES: &[CollectiveType] = &[CollectiveType::Collective, CollectiveType::Event];

// ============================================================================
// CHECKS
// ============================================================================

/// True if the feature is allowed for this collective type.
/// An unknown type (`None`) only passes features open to every type.
pub fn is_feature_allowed_for_collective_type(
    collective_type: Option<CollectiveType>,
    feature: Feature,
) -> bool {
    match feature.allowed_types() {
        Some(allowed) => collective_type.is_some_and(|t| allowed.contains(&t)),
        None => true,
    }
}

/// Check if the given feature is activated for a collective (JSON object
/// with a `type` string and optional `settings`)
pub fn has_feature(collective: Option<&Value>, feature: Feature) -> bool {
    let Some(collective) = collective.filter(|c| !c.is_null()) else {
        return false;
    };

    let collective_type = collective
        .get("type")
        .and_then(Value::as_str)
        .and_then(|t| t.parse().ok());

    if !is_feature_allowed_for_collective_type(collective_type, feature) {
        return false;
    }

    match feature.flag_path() {
        Some(path) => lookup_path(collective, path).is_some_and(is_truthy),
        None => true,
    }
}

fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_collective() {
        assert!(!has_feature(None, Feature::Updates));
        assert!(!has_feature(Some(&Value::Null), Feature::ReceiveExpenses));
    }

    #[test]
    fn test_type_restrictions() {
        use CollectiveType::*;

        assert!(is_feature_allowed_for_collective_type(Some(Collective), Feature::Conversations));
        assert!(is_feature_allowed_for_collective_type(Some(Organization), Feature::Updates));
        assert!(!is_feature_allowed_for_collective_type(Some(Event), Feature::Updates));
        assert!(is_feature_allowed_for_collective_type(Some(Event), Feature::ReceiveExpenses));
        assert!(!is_feature_allowed_for_collective_type(Some(User), Feature::ReceiveExpenses));
        assert!(is_feature_allowed_for_collective_type(Some(User), Feature::Transferwise));
        assert!(is_feature_allowed_for_collective_type(None, Feature::CollectiveGoals));
        assert!(!is_feature_allowed_for_collective_type(None, Feature::Conversations));
    }

    #[test]
    fn test_feature_without_flag_is_on_when_allowed() {
        let event = json!({ "type": "EVENT" });
        let user = json!({ "type": "USER" });

        assert!(has_feature(Some(&event), Feature::ReceiveExpenses));
        assert!(!has_feature(Some(&user), Feature::ReceiveExpenses));
    }

    #[test]
    fn test_opt_in_flag() {
        let on = json!({
            "type": "COLLECTIVE",
            "settings": { "features": { "conversations": true } }
        });
        let off = json!({
            "type": "COLLECTIVE",
            "settings": { "features": { "conversations": false } }
        });
        let unset = json!({ "type": "COLLECTIVE", "settings": {} });

        assert!(has_feature(Some(&on), Feature::Conversations));
        assert!(!has_feature(Some(&off), Feature::Conversations));
        assert!(!has_feature(Some(&unset), Feature::Conversations));
    }

    #[test]
    fn test_collective_type_is_case_sensitive() {
        let lowercase = json!({
            "type": "collective",
            "settings": { "features": { "conversations": true } }
        });

        assert!(!has_feature(Some(&lowercase), Feature::Conversations));
        assert!(!has_feature(Some(&json!({ "type": "event" })), Feature::ReceiveExpenses));
    }

    #[test]
    fn test_flag_set_but_type_not_allowed() {
        let event = json!({
            "type": "EVENT",
            "settings": { "features": { "updates": true } }
        });

        assert!(!has_feature(Some(&event), Feature::Updates));
    }

    #[test]
    fn test_flag_truthiness() {
        let collective = |flag: Value| {
            json!({
                "type": "ORGANIZATION",
                "settings": { "collectivePage": { "showGoals": flag } }
            })
        };

        assert!(has_feature(Some(&collective(json!(1))), Feature::CollectiveGoals));
        assert!(has_feature(Some(&collective(json!("yes"))), Feature::CollectiveGoals));
        assert!(has_feature(Some(&collective(json!({}))), Feature::CollectiveGoals));
        assert!(!has_feature(Some(&collective(json!(0))), Feature::CollectiveGoals));
        assert!(!has_feature(Some(&collective(json!(""))), Feature::CollectiveGoals));
        assert!(!has_feature(Some(&collective(Value::Null)), Feature::CollectiveGoals));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("paypal_payouts".parse::<Feature>(), Ok(Feature::PaypalPayouts));
        assert_eq!("ORGANIZATION".parse::<CollectiveType>(), Ok(CollectiveType::Organization));
        assert!("organization".parse::<CollectiveType>().is_err());
        assert!("SPACESHIP".parse::<Feature>().is_err());
        assert_eq!(Feature::Transferwise.flag_path(), Some("settings.features.transferwise"));
    }
}
