use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ontology::{EvaluationReport, IntentMetrics};
use crate::utils::{harmonic_mean, mean};

/// Generates synthetic evaluation metrics for `intents`.
///
/// A dedicated generator is seeded with `seed` on every call so that reports only depend on
/// the seed and the intents list.
pub fn synthetic_evaluation<S: AsRef<str>>(intents: &[S], seed: u64) -> EvaluationReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let per_intent_metrics: Vec<IntentMetrics> = intents
        .iter()
        .map(|intent| {
            let precision = rng.gen_range(0.80..0.95);
            let recall = rng.gen_range(0.82..0.93);
            IntentMetrics {
                intent: intent.as_ref().to_string(),
                precision,
                recall,
                f1: harmonic_mean(precision, recall),
                support: rng.gen_range(15..45),
            }
        })
        .collect();
    let overall_accuracy = rng.gen_range(0.88..0.94);
    let macro_f1 = mean(per_intent_metrics.iter().map(|m| m.f1));
    let total_support = per_intent_metrics.iter().map(|m| m.support).sum();
    EvaluationReport {
        per_intent_metrics,
        overall_accuracy,
        macro_f1,
        total_support,
    }
}
