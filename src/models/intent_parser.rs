use serde_derive::{Deserialize, Serialize};

use crate::models::dataset::Entity;
use crate::utils::IntentName;

/// Ordered keyword rules: the first rule with a trigger contained in the input wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordParserModel {
    pub rules: Vec<KeywordRule>,
    #[serde(default)]
    pub fallback: FallbackIntent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub intent: IntentName,
    pub triggers: Vec<String>,
    pub confidence: f32,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackIntent {
    pub intent: IntentName,
    pub confidence: f32,
}

impl Default for FallbackIntent {
    fn default() -> Self {
        FallbackIntent {
            intent: "unknown".to_string(),
            confidence: 0.45,
        }
    }
}

fn rule(intent: &str, triggers: &[&str], confidence: f32, entities: Vec<Entity>) -> KeywordRule {
    KeywordRule {
        intent: intent.to_string(),
        triggers: triggers.iter().map(|t| t.to_string()).collect(),
        confidence,
        entities,
    }
}

impl Default for KeywordParserModel {
    fn default() -> Self {
        KeywordParserModel {
            rules: vec![
                rule(
                    "book_flight",
                    &["flight", "fly", "airport"],
                    0.95,
                    vec![Entity::new("destination", "destination_city")],
                ),
                rule("cancel_booking", &["cancel", "remove", "delete"], 0.92, vec![]),
                rule(
                    "weather_query",
                    &["weather", "temperature", "rain"],
                    0.88,
                    vec![Entity::new("time", "time_ref")],
                ),
                rule(
                    "book_table",
                    &["table", "restaurant", "book", "reservation"],
                    0.90,
                    vec![Entity::new("number", "party_size")],
                ),
                rule("help_request", &["help", "support", "assistance"], 0.85, vec![]),
            ],
            fallback: FallbackIntent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_fallback() {
        // Given
        let data = r#"{
                        "rules": [
                          {
                            "intent": "greet",
                            "triggers": ["hello", "hi"],
                            "confidence": 0.8
                          }
                        ]
                      }"#;

        // When
        let model: KeywordParserModel = serde_json::from_str(data).unwrap();

        // Then
        let expected_model = KeywordParserModel {
            rules: vec![rule("greet", &["hello", "hi"], 0.8, vec![])],
            fallback: FallbackIntent::default(),
        };
        assert_eq!(expected_model, model);
    }

    #[test]
    fn test_default_model_rule_order() {
        // When
        let intents: Vec<IntentName> = KeywordParserModel::default()
            .rules
            .into_iter()
            .map(|rule| rule.intent)
            .collect();

        // Then
        let expected_intents = vec![
            "book_flight",
            "cancel_booking",
            "weather_query",
            "book_table",
            "help_request",
        ];
        assert_eq!(expected_intents, intents);
    }
}
