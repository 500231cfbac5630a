//! Wire models for the rules engine resource family
//!
//! Field names follow the management API's camelCase JSON. These are value
//! objects: the service owns the authoritative state, the client only maps it.

use serde::{Deserialize, Serialize};

/// A rules engine configuration attached to a Front Door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RulesEngineProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngineProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<String>,
    /// Ordered rule list; evaluation order is the server's order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RulesEngineRule>>,
}

/// A single rule within a rules engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngineRule {
    pub name: String,
    /// Lower values run first.
    pub priority: i32,
    pub action: RulesEngineAction,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_conditions: Vec<RulesEngineMatchCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_processing_behavior: Option<MatchProcessingBehavior>,
}

/// Actions applied when a rule's match conditions hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngineAction {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_header_actions: Vec<HeaderAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_header_actions: Vec<HeaderAction>,
    /// Route override payload; polymorphic on the wire (forwarding or
    /// redirect), kept opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_configuration_override: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderAction {
    pub header_action_type: HeaderActionType,
    pub header_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderActionType {
    Append,
    Delete,
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngineMatchCondition {
    pub rules_engine_match_variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    pub rules_engine_operator: String,
    #[serde(default)]
    pub negate_condition: bool,
    pub rules_engine_match_value: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<String>,
}

/// Whether evaluation continues past a matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchProcessingBehavior {
    Continue,
    Stop,
}

/// PUT body for create-or-update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngineUpdateParameters {
    pub properties: RulesEngineProperties,
}

impl RulesEngineUpdateParameters {
    /// Wrap a rule list in the `properties` envelope the API expects. An empty
    /// list is passed through as-is.
    pub fn new(rules: Vec<RulesEngineRule>) -> Self {
        Self {
            properties: RulesEngineProperties {
                resource_state: None,
                rules: Some(rules),
            },
        }
    }
}

/// One page of a list response: items plus the continuation link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEngineListResult {
    #[serde(default)]
    pub value: Vec<RulesEngine>,
    #[serde(default)]
    pub next_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn rule_deserializes_from_wire_json() {
        let rule: RulesEngineRule = serde_json::from_value(json!({
            "name": "redirect-http",
            "priority": 1,
            "action": {
                "requestHeaderActions": [
                    {"headerActionType": "Overwrite", "headerName": "X-Forwarded-Proto", "value": "https"}
                ]
            },
            "matchConditions": [
                {
                    "rulesEngineMatchVariable": "RequestScheme",
                    "rulesEngineOperator": "Equal",
                    "rulesEngineMatchValue": ["HTTP"]
                }
            ],
            "matchProcessingBehavior": "Stop"
        }))
        .unwrap();

        assert_eq!(rule.name, "redirect-http");
        assert_eq!(rule.priority, 1);
        assert_eq!(rule.action.request_header_actions.len(), 1);
        assert_eq!(
            rule.action.request_header_actions[0].header_action_type,
            HeaderActionType::Overwrite
        );
        assert_eq!(rule.match_conditions[0].rules_engine_match_value, ["HTTP"]);
        assert!(!rule.match_conditions[0].negate_condition);
        assert_eq!(
            rule.match_processing_behavior,
            Some(MatchProcessingBehavior::Stop)
        );
    }

    #[test]
    fn update_parameters_use_properties_envelope() {
        let params = RulesEngineUpdateParameters::new(vec![]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"properties": {"rules": []}}));
    }

    #[test]
    fn rule_serializes_camel_case() {
        let rule = RulesEngineRule {
            name: "block-admin".to_string(),
            priority: 2,
            action: RulesEngineAction::default(),
            match_conditions: vec![RulesEngineMatchCondition {
                rules_engine_match_variable: "RequestPath".to_string(),
                selector: None,
                rules_engine_operator: "BeginsWith".to_string(),
                negate_condition: false,
                rules_engine_match_value: vec!["/admin".to_string()],
                transforms: vec!["Lowercase".to_string()],
            }],
            match_processing_behavior: None,
        };

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "block-admin",
                "priority": 2,
                "action": {},
                "matchConditions": [{
                    "rulesEngineMatchVariable": "RequestPath",
                    "rulesEngineOperator": "BeginsWith",
                    "negateCondition": false,
                    "rulesEngineMatchValue": ["/admin"],
                    "transforms": ["Lowercase"]
                }]
            })
        );
    }

    #[test]
    fn list_result_tolerates_missing_fields() {
        let page: RulesEngineListResult = serde_json::from_value(json!({})).unwrap();
        assert!(page.value.is_empty());
        assert!(page.next_link.is_none());
    }
}
