use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::models::Entity;
use crate::utils::IntentName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentClassifierResult {
    pub intent_name: Option<IntentName>,
    pub confidence_score: f32,
}

/// Result of parsing a single input.
///
/// An empty (or whitespace only) input yields a result without intent name, with a zero
/// confidence and no entities, see [`IntentPredictionResult::is_empty_input`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPredictionResult {
    pub input: String,
    pub backend: String,
    pub intent: IntentClassifierResult,
    pub entities: Vec<Entity>,
    pub processing_time_ms: u32,
    pub model_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<IntentPredictionAlternative>,
}

impl IntentPredictionResult {
    pub fn is_empty_input(&self) -> bool {
        self.intent.intent_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPredictionAlternative {
    pub intent: IntentClassifierResult,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub status: String,
    pub backend: String,
    pub epochs: u32,
    pub accuracy: f32,
    pub precision: f32,
    pub recall: f32,
    pub f1_score: f32,
    pub training_time_secs: f32,
    pub model_size_mb: f32,
    pub samples_processed: usize,
    pub intents: Vec<IntentName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMetrics {
    pub intent: IntentName,
    pub precision: f32,
    pub recall: f32,
    pub f1: f32,
    pub support: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub per_intent_metrics: Vec<IntentMetrics>,
    pub overall_accuracy: f32,
    pub macro_f1: f32,
    pub total_support: u32,
}

impl EvaluationReport {
    pub fn metrics(&self, intent: &str) -> Option<&IntentMetrics> {
        self.per_intent_metrics.iter().find(|m| m.intent == intent)
    }
}

fn percent(value: f32) -> String {
    format!("{:.2}%", value * 100.0)
}

fn write_entities(f: &mut fmt::Formatter, entities: &[Entity]) -> fmt::Result {
    if entities.is_empty() {
        return writeln!(f, "**Detected Entities:** None");
    }
    writeln!(f, "**Detected Entities:**")?;
    for entity in entities {
        writeln!(f, "- {}: {}", entity.entity, entity.value)?;
    }
    Ok(())
}

impl fmt::Display for IntentPredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let intent_name = match self.intent.intent_name {
            Some(ref intent_name) => intent_name,
            None => return writeln!(f, "Please enter some text to analyze."),
        };
        writeln!(f, "**Intent Prediction Results:**")?;
        writeln!(f)?;
        writeln!(f, "**Predicted Intent:** `{}`", intent_name)?;
        writeln!(
            f,
            "**Confidence Score:** {}",
            percent(self.intent.confidence_score)
        )?;
        writeln!(f, "**Model Backend:** {}", self.backend)?;
        writeln!(f)?;
        writeln!(f, "**Analysis:**")?;
        writeln!(f, "- Input Text: \"{}\"", self.input)?;
        writeln!(f, "- Processing Time: ~{}ms", self.processing_time_ms)?;
        writeln!(f, "- Model Version: {}", self.model_version)?;
        writeln!(f)?;
        write_entities(f, &self.entities)?;
        if !self.alternatives.is_empty() {
            writeln!(f)?;
            writeln!(f, "**Alternatives:**")?;
            for alternative in self.alternatives.iter() {
                writeln!(
                    f,
                    "- `{}` ({})",
                    alternative.intent.intent_name.as_ref().map(|n| &**n).unwrap_or("none"),
                    percent(alternative.intent.confidence_score)
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "**Training Results:**")?;
        writeln!(f)?;
        writeln!(f, "**Model Performance:**")?;
        writeln!(f, "- Accuracy: {}", percent(self.accuracy))?;
        writeln!(f, "- Precision: {}", percent(self.precision))?;
        writeln!(f, "- Recall: {}", percent(self.recall))?;
        writeln!(f, "- F1-Score: {}", percent(self.f1_score))?;
        writeln!(f)?;
        writeln!(f, "**Training Details:**")?;
        writeln!(f, "- Backend: {}", self.backend)?;
        writeln!(f, "- Epochs: {}", self.epochs)?;
        writeln!(f, "- Training Time: {:.1} seconds", self.training_time_secs)?;
        writeln!(f, "- Model Size: {:.1} MB", self.model_size_mb)?;
        writeln!(f, "- Samples Processed: {}", self.samples_processed)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "**Model Evaluation Results:**")?;
        writeln!(f)?;
        writeln!(f, "**Overall Performance:**")?;
        writeln!(f, "- Accuracy: {}", percent(self.overall_accuracy))?;
        writeln!(f, "- Macro F1-Score: {}", percent(self.macro_f1))?;
        writeln!(f, "- Total Test Samples: {}", self.total_support)?;
        writeln!(f)?;
        writeln!(f, "**Per-Intent Performance:**")?;
        for metrics in self.per_intent_metrics.iter() {
            writeln!(f)?;
            writeln!(f, "**{}:**", metrics.intent)?;
            writeln!(f, "- Precision: {}", percent(metrics.precision))?;
            writeln!(f, "- Recall: {}", percent(metrics.recall))?;
            writeln!(f, "- F1-Score: {}", percent(metrics.f1))?;
            writeln!(f, "- Support: {} samples", metrics.support)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(intent_name: Option<&str>, entities: Vec<Entity>) -> IntentPredictionResult {
        IntentPredictionResult {
            input: "Book a table for 4 people".to_string(),
            backend: "rasa".to_string(),
            intent: IntentClassifierResult {
                intent_name: intent_name.map(|name| name.to_string()),
                confidence_score: 0.9123,
            },
            entities,
            processing_time_ms: 87,
            model_version: "v1.0.0".to_string(),
            alternatives: vec![],
        }
    }

    #[test]
    fn test_display_prediction() {
        // Given
        let result = prediction(Some("book_table"), vec![Entity::new("number", "party_size")]);

        // When
        let rendered = result.to_string();

        // Then
        assert!(rendered.contains("**Predicted Intent:** `book_table`"));
        assert!(rendered.contains("**Confidence Score:** 91.23%"));
        assert!(rendered.contains("**Model Backend:** rasa"));
        assert!(rendered.contains("- Processing Time: ~87ms"));
        assert!(rendered.contains("- number: party_size"));
    }

    #[test]
    fn test_display_prediction_without_entities() {
        // When
        let rendered = prediction(Some("help_request"), vec![]).to_string();

        // Then
        assert!(rendered.contains("**Detected Entities:** None"));
    }

    #[test]
    fn test_display_empty_input_prediction() {
        // When
        let rendered = prediction(None, vec![]).to_string();

        // Then
        assert_eq!("Please enter some text to analyze.\n", rendered);
    }

    #[test]
    fn test_display_evaluation_report() {
        // Given
        let report = EvaluationReport {
            per_intent_metrics: vec![IntentMetrics {
                intent: "book_flight".to_string(),
                precision: 0.9,
                recall: 0.85,
                f1: 0.874,
                support: 21,
            }],
            overall_accuracy: 0.9,
            macro_f1: 0.874,
            total_support: 21,
        };

        // When
        let rendered = report.to_string();

        // Then
        assert!(rendered.contains("- Total Test Samples: 21"));
        assert!(rendered.contains("**book_flight:**"));
        assert!(rendered.contains("- Support: 21 samples"));
    }
}
