use serde::{Deserialize, Serialize};

/// Én råmåling fra eye-trackeren. Immutabel etter innlesing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: f64, // enhets-ticks, monotont økende
    #[serde(rename = "pupil.x")]
    pub pupil_x: f64,
    #[serde(rename = "pupil.y")]
    pub pupil_y: f64,
    #[serde(rename = "pupil.confidence")]
    pub confidence: f64, // kvalitetsscore i [0,1]
}

/// Middelkoordinat over HELE råserien – referansepunktet for avvik.
/// Beregnes nøyaktig én gang per kjøring, før noen avviksverdi.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub mean_x: f64,
    pub mean_y: f64,
}

/// Beholdt sample med tilhørende avvik (rå enheter) etter konfidensfilteret.
#[derive(Debug, Clone, Copy)]
pub struct ScoredSample {
    pub timestamp: f64,
    pub deviation: f64,
}

/// Punktet med størst avvik i den filtrerte serien, i rå enheter.
/// Konvertering til visningsenheter skjer først i renderne.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakPoint {
    pub timestamp: f64,
    pub deviation: f64,
}
