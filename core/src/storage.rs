use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::PipelineError;
use crate::types::RunSummary;

/// Lagrer kjøringssammendraget til resultatmappen som JSON (pretty-print).
/// Deterministisk sti per test-id; en ny kjøring av samme protokoll
/// overskriver forrige sammendrag, tilsiktet.
pub fn save_summary(summary: &RunSummary, results_dir: &Path) -> Result<PathBuf, PipelineError> {
    let path = results_dir.join(format!("{}_summary.json", summary.test_id));
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&path, json).map_err(|e| PipelineError::artifact(&path, e))?;
    info!("sammendrag lagret til {}", path.display());
    Ok(path)
}

/// Leser et tidligere sammendrag tilbake (inspeksjon og tester).
pub fn load_summary(path: &Path) -> Result<RunSummary, PipelineError> {
    let contents = fs::read_to_string(path).map_err(|e| PipelineError::input(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}
