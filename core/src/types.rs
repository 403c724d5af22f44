use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maksavviket i visningsenheter, slik det rapporteres til bruker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeakSummary {
    pub time_s: f64,
    pub deviation_mm: f64,
}

/// Sammendrag av én kjøring; persisteres som JSON ved siden av artefaktene.
/// `chart_paths` holder eksplisitte `None`-sloter for sider som ikke
/// finnes (peak-løs variant), aldri utelatelse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub test_id: String,
    pub test_name: String,
    pub sample_count: usize,
    pub retained_count: usize,
    pub peak: Option<PeakSummary>,
    pub chart_paths: Vec<Option<String>>,
    pub report_path: String,
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    /// Menneskelesbar resultatlinje. `None` for varianter uten peak-analyse.
    pub fn result_line(&self) -> Option<String> {
        self.peak.map(|p| {
            format!(
                "Maximum Deviation occurs at {:.2} sec with deviation {:.4} mm",
                p.time_s, p.deviation_mm
            )
        })
    }
}
