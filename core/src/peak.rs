use crate::errors::PipelineError;
use crate::models::{PeakPoint, ScoredSample};

/// Stabil argmax over den filtrerte serien: ved likhet vinner første
/// forekomst. Returnerer rå enheter.
pub fn locate_peak(filtered: &[ScoredSample]) -> Result<PeakPoint, PipelineError> {
    let mut best: Option<&ScoredSample> = None;
    for s in filtered {
        match best {
            None => best = Some(s),
            Some(b) if s.deviation > b.deviation => best = Some(s),
            _ => {}
        }
    }
    best.map(|s| PeakPoint {
        timestamp: s.timestamp,
        deviation: s.deviation,
    })
    .ok_or(PipelineError::NoConfidentSamples)
}
