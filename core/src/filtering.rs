use crate::models::{Sample, ScoredSample};

/// Fast konfidens-terskel; samples under denne deltar ikke i peak/plott.
/// Grensetilfellet nøyaktig 0.6 beholdes.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Ordensbevarende delsekvens av serien med tilhørende avvik.
/// Kan bli tom – oppstrøms ansvar å rapportere det som egen feil.
pub fn filter_by_confidence(samples: &[Sample], deviations: &[f64]) -> Vec<ScoredSample> {
    debug_assert_eq!(samples.len(), deviations.len());
    samples
        .iter()
        .zip(deviations.iter())
        .filter(|(s, _)| s.confidence >= CONFIDENCE_THRESHOLD)
        .map(|(s, d)| ScoredSample {
            timestamp: s.timestamp,
            deviation: *d,
        })
        .collect()
}
