use crate::errors::PipelineError;
use crate::models::Sample;

/// Kalibreringskonstant: enhets-ticks per sekund.
pub const TICKS_PER_SECOND: f64 = 15.2;

/// Kalibreringskonstant: rå avviksenheter per millimeter.
pub const DEVIATION_UNITS_PER_MM: f64 = 100.0;

/// Fast presentasjonsmargin (mm) på avviksaksen.
pub const AXIS_PADDING_MM: f64 = 0.1;

pub fn ticks_to_seconds(ticks: f64) -> f64 {
    ticks / TICKS_PER_SECOND
}

pub fn units_to_mm(deviation: f64) -> f64 {
    deviation / DEVIATION_UNITS_PER_MM
}

/// Felles koordinatramme for alle diagrammer i én kjøring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalAxisLimits {
    pub time_min_s: f64,
    pub time_max_s: f64,
    pub deviation_min_mm: f64,
    pub deviation_max_mm: f64,
}

/// Utledes fra den UFILTRERTE serien, nøyaktig én gang per kjøring, og
/// gjenbrukes uendret av begge renderne. Det er dette som holder hoved-
/// og peak-diagrammet visuelt sammenlignbare.
pub fn resolve_axis_limits(
    samples: &[Sample],
    deviations: &[f64],
) -> Result<GlobalAxisLimits, PipelineError> {
    if samples.is_empty() || deviations.is_empty() {
        return Err(PipelineError::EmptySeries);
    }

    let mut ts_min = f64::INFINITY;
    let mut ts_max = f64::NEG_INFINITY;
    for s in samples {
        ts_min = ts_min.min(s.timestamp);
        ts_max = ts_max.max(s.timestamp);
    }

    let mut dev_min = f64::INFINITY;
    let mut dev_max = f64::NEG_INFINITY;
    for d in deviations {
        dev_min = dev_min.min(*d);
        dev_max = dev_max.max(*d);
    }

    Ok(GlobalAxisLimits {
        time_min_s: ticks_to_seconds(ts_min),
        time_max_s: ticks_to_seconds(ts_max),
        deviation_min_mm: units_to_mm(dev_min) - AXIS_PADDING_MM,
        deviation_max_mm: units_to_mm(dev_max) + AXIS_PADDING_MM,
    })
}
