use std::path::Path;
use std::time::Duration;

use failure::{bail, ResultExt};
use log::{debug, info};
use rand::{thread_rng, Rng};

use crate::configurations::EngineConfig;
use crate::errors::*;
use crate::evaluation::synthetic_evaluation;
use crate::intent_parser::keyword_intent_parser::KEYWORD_PARSER_FILE;
use crate::intent_parser::*;
use crate::models::Entity;
use crate::ontology::{
    EvaluationReport, IntentClassifierResult, IntentPredictionAlternative,
    IntentPredictionResult, TrainingReport,
};
use crate::training::{parse_training_data, simulate_training, TrainingStep};
use crate::utils::{clamp_confidence, IntentName};

pub struct SnipsNluPlayground {
    config: EngineConfig,
    intent_parser: Box<dyn IntentParser>,
    intents: Vec<IntentName>,
}

impl SnipsNluPlayground {
    /// Loads an engine directory.
    ///
    /// Both `engine_config.json` and `keyword_parser.json` are optional, the built-in
    /// configuration and keyword rules are used for missing files.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let engine_dir = path.as_ref();
        info!("Loading nlu playground engine ({:?}) ...", engine_dir);
        if !engine_dir.is_dir() {
            bail!(SnipsNluPlaygroundError::ModelLoad(
                engine_dir.to_string_lossy().to_string()
            ));
        }
        let config = EngineConfig::from_path(engine_dir)
            .with_context(|_| format!("Could not load engine configuration in {:?}", engine_dir))?;
        let parser = if engine_dir.join(KEYWORD_PARSER_FILE).exists() {
            KeywordIntentParser::from_path(engine_dir)?
        } else {
            KeywordIntentParser::default()
        };
        let engine = Self::new(parser, config)?;
        info!("Nlu playground engine loaded");
        Ok(engine)
    }

    pub fn new(parser: KeywordIntentParser, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let intents = parser.intents().into_iter().map(|i| i.to_string()).collect();
        Ok(SnipsNluPlayground {
            config,
            intent_parser: Box::new(parser) as _,
            intents,
        })
    }

    /// Builds an engine with the built-in keyword rules.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::new(KeywordIntentParser::default(), config)
    }

    /// Disables the pause between training progress steps.
    pub fn without_delays(mut self) -> Self {
        self.config = self.config.without_delays();
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn intents(&self) -> &[IntentName] {
        &self.intents
    }
}

impl Default for SnipsNluPlayground {
    fn default() -> Self {
        let parser = KeywordIntentParser::default();
        let intents = parser.intents().into_iter().map(|i| i.to_string()).collect();
        SnipsNluPlayground {
            config: EngineConfig::default(),
            intent_parser: Box::new(parser) as _,
            intents,
        }
    }
}

impl SnipsNluPlayground {
    pub fn parse(&self, input: &str, backend: &str) -> Result<IntentPredictionResult> {
        self.parse_with_rng(input, backend, &mut thread_rng())
    }

    /// Parses `input`, drawing the confidence noise and the processing time from `rng`.
    ///
    /// The backend label is reported as is and has no influence on the result.
    pub fn parse_with_rng<R: Rng>(
        &self,
        input: &str,
        backend: &str,
        rng: &mut R,
    ) -> Result<IntentPredictionResult> {
        debug!("Parsing input {:?} with backend {:?}", input, backend);
        let internal_result = self.intent_parser.parse(input)?;
        if internal_result.intent.intent_name.is_none() {
            return Ok(IntentPredictionResult {
                input: input.to_string(),
                backend: backend.to_string(),
                intent: internal_result.intent,
                entities: vec![],
                processing_time_ms: 0,
                model_version: self.config.model_version.clone(),
                alternatives: vec![],
            });
        }
        let (min_time, max_time) = self.config.processing_time_ms;
        Ok(IntentPredictionResult {
            input: input.to_string(),
            backend: backend.to_string(),
            intent: self.perturb(internal_result.intent, rng),
            entities: internal_result.entities,
            processing_time_ms: rng.gen_range(min_time..=max_time),
            model_version: self.config.model_version.clone(),
            alternatives: vec![],
        })
    }

    /// Parses `input` and lists up to `intents_alternatives` other matching intents, in
    /// rules priority order, the top intent excluded.
    pub fn parse_with_alternatives<R: Rng>(
        &self,
        input: &str,
        backend: &str,
        intents_alternatives: usize,
        rng: &mut R,
    ) -> Result<IntentPredictionResult> {
        let mut result = self.parse_with_rng(input, backend, rng)?;
        if intents_alternatives == 0 || result.is_empty_input() {
            return Ok(result);
        }
        result.alternatives = self
            .get_intents(input)?
            .into_iter()
            .skip(1) // We do not duplicate the top result in the list of alternatives
            .take(intents_alternatives)
            .map(|res| -> Result<IntentPredictionAlternative> {
                let entities = res
                    .intent_name
                    .as_ref()
                    .map(|intent_name| self.get_entities(input, intent_name))
                    .unwrap_or_else(|| Ok(vec![]))?;
                Ok(IntentPredictionAlternative {
                    intent: self.perturb(res, rng),
                    entities,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(result)
    }

    /// Matching intents with their unperturbed confidence, in rules priority order, followed
    /// by the fallback intent.
    pub fn get_intents(&self, input: &str) -> Result<Vec<IntentClassifierResult>> {
        self.intent_parser.get_intents(input)
    }

    pub fn get_entities(&self, input: &str, intent: &str) -> Result<Vec<Entity>> {
        self.intent_parser.get_entities(input, intent)
    }

    fn perturb<R: Rng>(&self, result: IntentClassifierResult, rng: &mut R) -> IntentClassifierResult {
        let noise = self.config.confidence_noise;
        IntentClassifierResult {
            confidence_score: clamp_confidence(
                result.confidence_score + rng.gen_range(-noise..=noise),
            ),
            ..result
        }
    }
}

impl SnipsNluPlayground {
    pub fn train<F>(
        &self,
        training_data: &str,
        backend: &str,
        epochs: u32,
        progress: F,
    ) -> TrainingReport
    where
        F: FnMut(TrainingStep),
    {
        self.train_with_rng(training_data, backend, epochs, progress, &mut thread_rng())
    }

    /// Simulates a training run; malformed training data is replaced by the sample data set.
    pub fn train_with_rng<R, F>(
        &self,
        training_data: &str,
        backend: &str,
        epochs: u32,
        progress: F,
        rng: &mut R,
    ) -> TrainingReport
    where
        R: Rng,
        F: FnMut(TrainingStep),
    {
        let samples = parse_training_data(training_data);
        info!(
            "Simulating training on {} samples with backend {:?}",
            samples.len(),
            backend
        );
        simulate_training(
            &samples,
            backend,
            epochs,
            Duration::from_millis(self.config.training_step_delay_ms),
            progress,
            rng,
        )
    }

    /// Produces the synthetic evaluation report of the engine intents.
    ///
    /// Test data is read with the same fallback policy as training data but does not affect
    /// the metrics, which only depend on the configured seed.
    pub fn evaluate(&self, test_data: &str) -> EvaluationReport {
        let samples = parse_training_data(test_data);
        debug!("Evaluating on {} samples", samples.len());
        synthetic_evaluation(&self.intents, self.config.evaluation_seed)
    }
}
