use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::axis_limits::{resolve_axis_limits, ticks_to_seconds, units_to_mm};
use crate::charts::{render_peak_point, render_time_series};
use crate::deviation::{compute_baseline, deviation_series};
use crate::errors::PipelineError;
use crate::filtering::filter_by_confidence;
use crate::peak::locate_peak;
use crate::protocol::Protocol;
use crate::reader::read_samples;
use crate::report::assemble_report;
use crate::storage::save_summary;
use crate::types::{PeakSummary, RunSummary};

/// Én komplett analysekjøring for én protokoll: innlesing, baseline og
/// avviksserie, global akseramme, konfidensfilter, eventuell peak,
/// diagrammer, rapport og sammendrag.
///
/// Rekkefølgen er bærende: rammen utledes fra den ufiltrerte serien før
/// filteret kjører, og all rendering skjer før rapporten settes sammen,
/// så en renderfeil aldri etterlater en rapport bygget av delvise
/// artefakter. Feil er lokale til kjøringen.
pub fn analyze_run(
    protocol: Protocol,
    input_path: &Path,
    results_dir: &Path,
) -> Result<RunSummary, PipelineError> {
    let samples = read_samples(input_path)?;
    info!("leste {} samples fra {}", samples.len(), input_path.display());

    let baseline = compute_baseline(&samples)?;
    let deviations = deviation_series(&samples, &baseline);

    // Global ramme fra den UFILTRERTE serien, én gang per kjøring.
    let limits = resolve_axis_limits(&samples, &deviations)?;

    let filtered = filter_by_confidence(&samples, &deviations);
    if filtered.is_empty() {
        return Err(PipelineError::NoConfidentSamples);
    }
    info!(
        "{} av {} samples over konfidens-terskelen",
        filtered.len(),
        samples.len()
    );

    let peak = if protocol.has_peak_analysis() {
        Some(locate_peak(&filtered)?)
    } else {
        None
    };

    fs::create_dir_all(results_dir).map_err(|e| PipelineError::artifact(results_dir, e))?;

    let main_path = results_dir.join(format!("{}_main.png", protocol.id()));
    render_time_series(&filtered, peak.as_ref(), &limits, &main_path)?;

    let peak_path = match &peak {
        Some(p) => {
            let path = results_dir.join(format!("{}_peak.png", protocol.id()));
            render_peak_point(p, &limits, &path)?;
            Some(path)
        }
        None => None,
    };

    // Peak-løs variant bidrar med en eksplisitt tom slot, ikke en utelatt.
    let chart_slots: Vec<Option<PathBuf>> = vec![Some(main_path), peak_path];
    let report_path = assemble_report(&chart_slots, protocol.display_name(), results_dir)?;
    info!("rapport skrevet til {}", report_path.display());

    let summary = RunSummary {
        test_id: protocol.id().to_string(),
        test_name: protocol.display_name().to_string(),
        sample_count: samples.len(),
        retained_count: filtered.len(),
        peak: peak.map(|p| PeakSummary {
            time_s: ticks_to_seconds(p.timestamp),
            deviation_mm: units_to_mm(p.deviation),
        }),
        chart_paths: chart_slots
            .iter()
            .map(|s| s.as_ref().map(|p| p.display().to_string()))
            .collect(),
        report_path: report_path.display().to_string(),
        generated_at: Utc::now(),
    };
    save_summary(&summary, results_dir)?;

    Ok(summary)
}
