use std::fs::File;
use std::path::Path;

use failure::{bail, ResultExt};
use log::{debug, info};

use crate::errors::*;
use crate::models::{Entity, FallbackIntent, KeywordParserModel, KeywordRule};
use crate::ontology::IntentClassifierResult;

use super::{internal_parsing_result, IntentParser, InternalParsingResult};

pub const KEYWORD_PARSER_FILE: &str = "keyword_parser.json";

pub struct KeywordIntentParser {
    rules: Vec<KeywordRule>,
    fallback: FallbackIntent,
}

impl KeywordIntentParser {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading keyword intent parser ({:?}) ...", path.as_ref());
        let parser_model_path = path.as_ref().join(KEYWORD_PARSER_FILE);
        let model_file = File::open(&parser_model_path).with_context(|_| {
            format!(
                "Cannot open KeywordIntentParser file '{:?}'",
                &parser_model_path
            )
        })?;
        let model: KeywordParserModel = serde_json::from_reader(model_file)
            .with_context(|_| "Cannot deserialize KeywordIntentParser json data")?;
        let parser = Self::new(model);
        info!("Keyword intent parser loaded");
        parser
    }
}

impl Default for KeywordIntentParser {
    fn default() -> Self {
        let model = KeywordParserModel::default();
        KeywordIntentParser {
            rules: model.rules,
            fallback: model.fallback,
        }
    }
}

impl KeywordIntentParser {
    pub fn new(model: KeywordParserModel) -> Result<Self> {
        let rules = model
            .rules
            .into_iter()
            .map(normalize_rule)
            .collect::<Result<Vec<_>>>()?;
        check_confidence(&model.fallback.intent, model.fallback.confidence)?;
        if model.fallback.intent.trim().is_empty() {
            bail!(SnipsNluPlaygroundError::InvalidKeywordRule {
                intent: model.fallback.intent,
                reason: "fallback intent name is empty".to_string(),
            });
        }
        Ok(KeywordIntentParser {
            rules,
            fallback: model.fallback,
        })
    }

    /// Intents of the keyword rules, in priority order. The fallback intent is not included.
    pub fn intents(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| &*rule.intent).collect()
    }

    pub fn fallback_intent(&self) -> &str {
        &self.fallback.intent
    }

    fn matching_rules<'a>(&'a self, input: &str) -> impl Iterator<Item = &'a KeywordRule> + 'a {
        let normalized_input = input.to_lowercase();
        self.rules.iter().filter(move |rule| {
            rule.triggers
                .iter()
                .any(|trigger| normalized_input.contains(&**trigger))
        })
    }
}

fn normalize_rule(rule: KeywordRule) -> Result<KeywordRule> {
    if rule.intent.trim().is_empty() {
        bail!(SnipsNluPlaygroundError::InvalidKeywordRule {
            intent: rule.intent,
            reason: "intent name is empty".to_string(),
        });
    }
    check_confidence(&rule.intent, rule.confidence)?;
    let triggers: Vec<String> = rule
        .triggers
        .iter()
        .map(|trigger| trigger.trim().to_lowercase())
        .filter(|trigger| !trigger.is_empty())
        .collect();
    if triggers.is_empty() {
        bail!(SnipsNluPlaygroundError::InvalidKeywordRule {
            intent: rule.intent,
            reason: "at least one non blank trigger is required".to_string(),
        });
    }
    Ok(KeywordRule { triggers, ..rule })
}

fn check_confidence(intent: &str, confidence: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&confidence) {
        bail!(SnipsNluPlaygroundError::InvalidKeywordRule {
            intent: intent.to_string(),
            reason: format!("confidence must be in [0, 1], found {}", confidence),
        });
    }
    Ok(())
}

impl IntentParser for KeywordIntentParser {
    fn parse(&self, input: &str) -> Result<InternalParsingResult> {
        debug!("Extracting intent with keyword intent parser...");
        if input.trim().is_empty() {
            return Ok(InternalParsingResult::empty());
        }
        let result = self
            .matching_rules(input)
            .next()
            .map(|rule| {
                internal_parsing_result(
                    Some(rule.intent.clone()),
                    rule.confidence,
                    rule.entities.clone(),
                )
            })
            .unwrap_or_else(|| {
                internal_parsing_result(
                    Some(self.fallback.intent.clone()),
                    self.fallback.confidence,
                    vec![],
                )
            });
        debug!("Keyword intent parser result: {:?}", result.intent);
        Ok(result)
    }

    fn get_intents(&self, input: &str) -> Result<Vec<IntentClassifierResult>> {
        if input.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(self
            .matching_rules(input)
            .map(|rule| IntentClassifierResult {
                intent_name: Some(rule.intent.clone()),
                confidence_score: rule.confidence,
            })
            .chain(Some(IntentClassifierResult {
                intent_name: Some(self.fallback.intent.clone()),
                confidence_score: self.fallback.confidence,
            }))
            .collect())
    }

    fn get_entities(&self, input: &str, intent: &str) -> Result<Vec<Entity>> {
        let entities = match self.rules.iter().find(|rule| rule.intent == intent) {
            Some(rule) => &rule.entities,
            None if intent == self.fallback.intent => return Ok(vec![]),
            None => return Err(SnipsNluPlaygroundError::UnknownIntent(intent.to_string()).into()),
        };
        if input.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(entities.clone())
    }
}
