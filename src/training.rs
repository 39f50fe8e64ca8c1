use std::thread;
use std::time::Duration;

use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;
use serde_json::Value;

use crate::models::TrainingExample;
use crate::ontology::TrainingReport;
use crate::sample_data::sample_training_examples;
use crate::utils::{harmonic_mean, IntentName};

pub const TRAINING_STEPS: [&str; 5] = [
    "Initializing training environment...",
    "Preprocessing training data...",
    "Tokenizing text samples...",
    "Training neural network...",
    "Training completed successfully!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStep<'a> {
    pub index: usize,
    pub total: usize,
    pub message: &'a str,
}

/// One item of a training data array.
///
/// Items are kept even when they lack a `text` or an `intent`, so that every item of the array
/// counts as a processed sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub text: Option<String>,
    pub intent: Option<IntentName>,
}

impl From<&Value> for TrainingSample {
    fn from(item: &Value) -> Self {
        let field = |name: &str| item.get(name).and_then(Value::as_str).map(|s| s.to_string());
        TrainingSample {
            text: field("text"),
            intent: field("intent"),
        }
    }
}

impl From<TrainingExample> for TrainingSample {
    fn from(example: TrainingExample) -> Self {
        TrainingSample {
            text: Some(example.text),
            intent: Some(example.intent),
        }
    }
}

fn sample_training_samples() -> Vec<TrainingSample> {
    sample_training_examples()
        .into_iter()
        .map(TrainingSample::from)
        .collect()
}

/// Reads a json array of training items.
///
/// Input that is not a json array, or malformed json, is replaced by the sample training
/// examples.
pub fn parse_training_data(data: &str) -> Vec<TrainingSample> {
    let trimmed = data.trim();
    if !trimmed.starts_with('[') {
        debug!("Training data is not a json array, using sample training data");
        return sample_training_samples();
    }
    match serde_json::from_str::<Vec<Value>>(trimmed) {
        Ok(items) => items.iter().map(TrainingSample::from).collect(),
        Err(e) => {
            warn!("Invalid training data ({}), using sample training data", e);
            sample_training_samples()
        }
    }
}

pub fn simulate_training<R, F>(
    samples: &[TrainingSample],
    backend: &str,
    epochs: u32,
    step_delay: Duration,
    mut progress: F,
    rng: &mut R,
) -> TrainingReport
where
    R: Rng,
    F: FnMut(TrainingStep),
{
    let total = TRAINING_STEPS.len();
    for (index, &message) in TRAINING_STEPS.iter().enumerate() {
        progress(TrainingStep {
            index,
            total,
            message,
        });
        if step_delay > Duration::from_millis(0) {
            thread::sleep(step_delay);
        }
    }

    let accuracy = rng.gen_range(0.85..0.95);
    let precision = rng.gen_range(0.80..0.92);
    let recall = rng.gen_range(0.82..0.90);
    let intents: Vec<IntentName> = samples
        .iter()
        .filter_map(|sample| sample.intent.clone())
        .unique()
        .collect();

    TrainingReport {
        status: "success".to_string(),
        backend: backend.to_string(),
        epochs,
        accuracy,
        precision,
        recall,
        f1_score: harmonic_mean(precision, recall),
        training_time_secs: rng.gen_range(1.5..3.5),
        model_size_mb: rng.gen_range(10.0..25.0),
        samples_processed: samples.len(),
        intents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{assert_in_range, epsilon_eq, seeded_rng};

    #[test]
    fn test_parse_training_data() {
        // Given
        let data = r#"
            [
              {"text": "Play some jazz", "intent": "play_music", "entities": []},
              {"text": "Stop the music", "intent": "stop_music"}
            ]"#;

        // When
        let samples = parse_training_data(data);

        // Then
        let intents: Vec<Option<&str>> = samples.iter().map(|s| s.intent.as_deref()).collect();
        assert_eq!(vec![Some("play_music"), Some("stop_music")], intents);
        assert_eq!(Some("Play some jazz"), samples[0].text.as_deref());
    }

    #[test]
    fn test_parse_training_data_keeps_incomplete_items() {
        // Given
        let data = r#"[{"text": "a"}, {"intent": "greet"}, 42]"#;

        // When
        let samples = parse_training_data(data);

        // Then
        let expected_samples = vec![
            TrainingSample {
                text: Some("a".to_string()),
                intent: None,
            },
            TrainingSample {
                text: None,
                intent: Some("greet".to_string()),
            },
            TrainingSample {
                text: None,
                intent: None,
            },
        ];
        assert_eq!(expected_samples, samples);
    }

    #[test]
    fn test_parse_training_data_falls_back_to_samples() {
        // Given
        let inputs = vec![
            "",
            "not json at all",
            r#"{"text": "an object", "intent": "x"}"#,
            "[ broken",
        ];

        for input in inputs {
            // When
            let samples = parse_training_data(input);

            // Then
            assert_eq!(sample_training_samples(), samples);
        }
    }

    #[test]
    fn test_simulate_training() {
        // Given
        let samples = sample_training_samples();
        let mut rng = seeded_rng(3);
        let mut steps = vec![];

        // When
        let report = simulate_training(
            &samples,
            "rasa",
            10,
            Duration::from_millis(0),
            |step| steps.push((step.index, step.total, step.message.to_string())),
            &mut rng,
        );

        // Then
        assert_eq!("success", report.status);
        assert_eq!("rasa", report.backend);
        assert_eq!(10, report.epochs);
        assert_eq!(5, report.samples_processed);
        assert_eq!(5, report.intents.len());
        assert_in_range(report.accuracy, 0.85, 0.95);
        assert_in_range(report.precision, 0.80, 0.92);
        assert_in_range(report.recall, 0.82, 0.90);
        assert_in_range(report.training_time_secs, 1.5, 3.5);
        assert_in_range(report.model_size_mb, 10.0, 25.0);
        assert!(epsilon_eq(
            harmonic_mean(report.precision, report.recall),
            report.f1_score,
            1e-6
        ));
        assert_eq!(TRAINING_STEPS.len(), steps.len());
        assert_eq!((4, 5, "Training completed successfully!".to_string()), steps[4]);
    }

    #[test]
    fn test_simulate_training_deduplicates_intents() {
        // Given
        let samples = parse_training_data(
            r#"[
                 {"text": "hi", "intent": "greet"},
                 {"text": "bye", "intent": "goodbye"},
                 {"text": "hello", "intent": "greet"}
               ]"#,
        );

        // When
        let report = simulate_training(
            &samples,
            "spacy",
            1,
            Duration::from_millis(0),
            |_| {},
            &mut seeded_rng(0),
        );

        // Then
        assert_eq!(3, report.samples_processed);
        assert_eq!(vec!["greet".to_string(), "goodbye".to_string()], report.intents);
    }
}
