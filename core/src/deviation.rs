use crate::errors::PipelineError;
use crate::models::{Baseline, Sample};

/// Baseline = middelkoordinat over hele råserien. Konfidens brukes IKKE her;
/// lavkonfidens-samples teller med i referansepunktet.
pub fn compute_baseline(samples: &[Sample]) -> Result<Baseline, PipelineError> {
    if samples.is_empty() {
        return Err(PipelineError::EmptySeries);
    }
    let n = samples.len() as f64;
    let mean_x = samples.iter().map(|s| s.pupil_x).sum::<f64>() / n;
    let mean_y = samples.iter().map(|s| s.pupil_y).sum::<f64>() / n;
    Ok(Baseline { mean_x, mean_y })
}

/// Radielt avvik (euklidsk avstand fra baseline) per sample.
/// Resultatet er alltid 1:1 med inn-serien.
pub fn deviation_series(samples: &[Sample], baseline: &Baseline) -> Vec<f64> {
    samples
        .iter()
        .map(|s| {
            let dx = s.pupil_x - baseline.mean_x;
            let dy = s.pupil_y - baseline.mean_y;
            (dx.powi(2) + dy.powi(2)).sqrt()
        })
        .collect()
}
