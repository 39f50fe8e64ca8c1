pub mod keyword_intent_parser;

pub use self::keyword_intent_parser::KeywordIntentParser;
use crate::errors::*;
use crate::models::Entity;
use crate::ontology::IntentClassifierResult;
use crate::utils::IntentName;

#[derive(Debug, Clone, PartialEq)]
pub struct InternalParsingResult {
    pub intent: IntentClassifierResult,
    pub entities: Vec<Entity>,
}

impl InternalParsingResult {
    pub fn empty() -> InternalParsingResult {
        InternalParsingResult {
            intent: IntentClassifierResult {
                intent_name: None,
                confidence_score: 0.0,
            },
            entities: vec![],
        }
    }
}

pub fn internal_parsing_result(
    intent_name: Option<IntentName>,
    intent_proba: f32,
    entities: Vec<Entity>,
) -> InternalParsingResult {
    InternalParsingResult {
        intent: IntentClassifierResult {
            intent_name,
            confidence_score: intent_proba,
        },
        entities,
    }
}

/// Deterministic part of intent parsing: scores returned here are base confidences, the
/// engine is responsible for perturbing them.
pub trait IntentParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<InternalParsingResult>;

    fn get_intents(&self, input: &str) -> Result<Vec<IntentClassifierResult>>;

    fn get_entities(&self, input: &str, intent: &str) -> Result<Vec<Entity>>;
}
