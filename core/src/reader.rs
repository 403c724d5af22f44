use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::errors::PipelineError;
use crate::models::Sample;

/// Kolonnene sample-filen må ha, med header-navn fra eye-trackeren.
pub const REQUIRED_COLUMNS: [&str; 4] = ["timestamp", "pupil.x", "pupil.y", "pupil.confidence"];

/// Leser hele sample-filen før prosessering starter (batch, ikke strøm).
/// Skilletegn (tab eller komma) sniffes fra header-linjen. Manglende fil,
/// manglende kolonne og tom serie er tre distinkte feil som reises før
/// noen numerisk beregning.
pub fn read_samples(path: &Path) -> Result<Vec<Sample>, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|e| PipelineError::input(path, e))?;
    let delimiter = sniff_delimiter(&raw);
    debug!(
        "leser {} med skilletegn {:?}",
        path.display(),
        delimiter as char
    );

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(PipelineError::MissingColumn(col));
        }
    }

    let mut samples = Vec::new();
    for record in reader.deserialize() {
        let sample: Sample = record?;
        samples.push(sample);
    }
    if samples.is_empty() {
        return Err(PipelineError::EmptySeries);
    }
    Ok(samples)
}

fn sniff_delimiter(raw: &str) -> u8 {
    match raw.lines().next() {
        Some(line) if line.contains('\t') => b'\t',
        _ => b',',
    }
}
