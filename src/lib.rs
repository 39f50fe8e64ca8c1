pub mod configurations;
pub mod errors;
mod evaluation;
mod intent_parser;
pub mod models;
mod nlu_engine;
pub mod ontology;
pub mod sample_data;
#[cfg(test)]
mod testutils;
mod training;
mod utils;

pub use crate::configurations::EngineConfig;
pub use crate::errors::*;
pub use crate::evaluation::synthetic_evaluation;
pub use crate::intent_parser::{IntentParser, InternalParsingResult, KeywordIntentParser};
pub use crate::models::*;
pub use crate::nlu_engine::SnipsNluPlayground;
pub use crate::ontology::*;
pub use crate::training::{
    parse_training_data, simulate_training, TrainingSample, TrainingStep, TRAINING_STEPS,
};
pub use crate::utils::{EntityName, IntentName};
