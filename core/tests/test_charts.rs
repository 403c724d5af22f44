use std::fs;
use std::path::Path;

use pupilgraph_core::axis_limits::GlobalAxisLimits;
use pupilgraph_core::charts::{render_peak_point, render_time_series};
use pupilgraph_core::models::{PeakPoint, ScoredSample};
use pupilgraph_core::PipelineError;

fn limits() -> GlobalAxisLimits {
    GlobalAxisLimits {
        time_min_s: 0.0,
        time_max_s: 10.0,
        deviation_min_mm: 0.0,
        deviation_max_mm: 1.0,
    }
}

#[test]
fn test_empty_series_gives_no_data_error_not_blank_image() {
    let out = Path::new("tests/tmp_chart_empty.png");
    let err = render_time_series(&[], None, &limits(), out).unwrap_err();

    assert!(matches!(err, PipelineError::NoData(_)));
    assert!(!out.exists());
}

#[test]
fn test_time_series_chart_is_written() {
    let out = Path::new("tests/tmp_chart_main.png");
    let filtered = vec![
        ScoredSample {
            timestamp: 15.2,
            deviation: 20.0,
        },
        ScoredSample {
            timestamp: 76.0,
            deviation: 60.0,
        },
    ];
    let peak = PeakPoint {
        timestamp: 76.0,
        deviation: 60.0,
    };

    render_time_series(&filtered, Some(&peak), &limits(), out).unwrap();
    assert!(fs::metadata(out).unwrap().len() > 0);

    fs::remove_file(out).ok();
}

#[test]
fn test_peak_chart_is_written() {
    let out = Path::new("tests/tmp_chart_peak.png");
    let peak = PeakPoint {
        timestamp: 76.0,
        deviation: 60.0,
    };

    render_peak_point(&peak, &limits(), out).unwrap();
    assert!(fs::metadata(out).unwrap().len() > 0);

    fs::remove_file(out).ok();
}
