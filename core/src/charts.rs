use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::axis_limits::{ticks_to_seconds, units_to_mm, GlobalAxisLimits};
use crate::errors::PipelineError;
use crate::models::{PeakPoint, ScoredSample};

/// Pikselstørrelser tilsvarende 12x6" og 6x4" i det kliniske oppsettet.
const MAIN_CHART_SIZE: (u32, u32) = (1200, 600);
const PEAK_CHART_SIZE: (u32, u32) = (600, 400);

/// Tidsseriediagram: avvik (mm) mot tid (s) for den filtrerte serien som
/// grønn linje, med rød markør på maksavviket for varianter med
/// peak-analyse. Aksene låses til den globale rammen uansett hvilket
/// utsnitt den filtrerte serien faktisk dekker.
pub fn render_time_series(
    filtered: &[ScoredSample],
    peak: Option<&PeakPoint>,
    limits: &GlobalAxisLimits,
    out_path: &Path,
) -> Result<(), PipelineError> {
    if filtered.is_empty() {
        return Err(PipelineError::NoData("time-series chart"));
    }
    draw_time_series(filtered, peak, limits, out_path).map_err(|e| PipelineError::Render {
        path: out_path.display().to_string(),
        message: e.to_string(),
    })
}

fn draw_time_series(
    filtered: &[ScoredSample],
    peak: Option<&PeakPoint>,
    limits: &GlobalAxisLimits,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    // Fersk tegnekontekst per diagram; present() lukker den eksplisitt.
    let root = BitMapBackend::new(out_path, MAIN_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Pupil Deviation Over Time", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            limits.time_min_s..limits.time_max_s,
            limits.deviation_min_mm..limits.deviation_max_mm,
        )?;

    chart
        .configure_mesh()
        .x_desc("Time (seconds)")
        .y_desc("Deviation (mm)")
        .draw()?;

    let points: Vec<(f64, f64)> = filtered
        .iter()
        .map(|s| (ticks_to_seconds(s.timestamp), units_to_mm(s.deviation)))
        .collect();

    chart
        .draw_series(LineSeries::new(points, &GREEN))?
        .label("Deviation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    if let Some(peak) = peak {
        // Markørens x trunkeres til hele sekunder, som i det kliniske oppsettet.
        let peak_t = ticks_to_seconds(peak.timestamp).trunc();
        let peak_mm = units_to_mm(peak.deviation);
        chart
            .draw_series(std::iter::once(Circle::new((peak_t, peak_mm), 5, RED.filled())))?
            .label("Maximum Deviation")
            .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Isolert peak-diagram: én rød markør ved (trunkert sekund, avvik i mm)
/// i samme globale ramme, med to-linjers annotasjon over punktet.
/// Kalles aldri for varianter uten peak-analyse.
pub fn render_peak_point(
    peak: &PeakPoint,
    limits: &GlobalAxisLimits,
    out_path: &Path,
) -> Result<(), PipelineError> {
    draw_peak_point(peak, limits, out_path).map_err(|e| PipelineError::Render {
        path: out_path.display().to_string(),
        message: e.to_string(),
    })
}

fn draw_peak_point(
    peak: &PeakPoint,
    limits: &GlobalAxisLimits,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, PEAK_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Maximum Pupil Deviation Point", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            limits.time_min_s..limits.time_max_s,
            limits.deviation_min_mm..limits.deviation_max_mm,
        )?;

    chart
        .configure_mesh()
        .x_desc("Time (seconds)")
        .y_desc("Deviation (mm)")
        .draw()?;

    let peak_t = ticks_to_seconds(peak.timestamp).trunc();
    let peak_mm = units_to_mm(peak.deviation);
    let annotation = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    chart.draw_series(PointSeries::of_element(
        std::iter::once((peak_t, peak_mm)),
        5,
        &RED,
        &|coord, size, style| {
            EmptyElement::at(coord)
                + Circle::new((0, 0), size, style.filled())
                + Text::new(
                    format!("Time: {} sec", coord.0 as i64),
                    (0, -28),
                    annotation.clone(),
                )
                + Text::new(
                    format!("Deviation: {:.4} mm", coord.1),
                    (0, -12),
                    annotation.clone(),
                )
        },
    ))?;

    root.present()?;
    Ok(())
}
