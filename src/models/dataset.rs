use serde_derive::{Deserialize, Serialize};

use crate::utils::{EntityName, IntentName};

/// An entity attached to an utterance.
///
/// Character offsets are optional and purely illustrative: they are carried through as they
/// are given and never checked against the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub entity: EntityName,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl Entity {
    pub fn new<E: Into<String>, V: Into<String>>(entity: E, value: V) -> Self {
        Entity {
            entity: entity.into(),
            value: value.into(),
            start: None,
            end: None,
        }
    }

    pub fn with_offsets(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub intent: IntentName,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub training_data: Vec<TrainingExample>,
    pub intents: Vec<IntentName>,
    pub entities: Vec<EntityName>,
}
