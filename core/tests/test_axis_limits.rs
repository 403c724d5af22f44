use pupilgraph_core::axis_limits::{
    resolve_axis_limits, AXIS_PADDING_MM, DEVIATION_UNITS_PER_MM, TICKS_PER_SECOND,
};
use pupilgraph_core::filtering::filter_by_confidence;
use pupilgraph_core::models::Sample;
use pupilgraph_core::PipelineError;

fn sample(t: f64, c: f64) -> Sample {
    Sample {
        timestamp: t,
        pupil_x: 0.0,
        pupil_y: 0.0,
        confidence: c,
    }
}

#[test]
fn test_limits_use_calibration_constants() {
    let samples = vec![sample(15.2, 0.9), sample(76.0, 0.9), sample(152.0, 0.9)];
    let devs = vec![10.0, 30.0, 50.0];

    let limits = resolve_axis_limits(&samples, &devs).unwrap();

    assert!((limits.time_min_s - 1.0).abs() < 1e-12);
    assert!((limits.time_max_s - 10.0).abs() < 1e-12);
    // (10/100) - 0.1 = 0.0 og (50/100) + 0.1 = 0.6
    assert!((limits.deviation_min_mm - 0.0).abs() < 1e-12);
    assert!((limits.deviation_max_mm - 0.6).abs() < 1e-12);

    assert_eq!(TICKS_PER_SECOND, 15.2);
    assert_eq!(DEVIATION_UNITS_PER_MM, 100.0);
    assert_eq!(AXIS_PADDING_MM, 0.1);
}

#[test]
fn test_limits_come_from_unfiltered_series() {
    // Ekstremverdiene bæres av lavkonfidens-samples som filteret fjerner;
    // rammen skal likevel dekke dem.
    let samples = vec![
        sample(0.0, 0.1),   // ts-min, droppes av filteret
        sample(76.0, 0.9),
        sample(304.0, 0.2), // ts-max, droppes av filteret
    ];
    let devs = vec![90.0, 20.0, 5.0]; // både min og max ligger på droppede samples

    let limits = resolve_axis_limits(&samples, &devs).unwrap();
    let filtered = filter_by_confidence(&samples, &devs);
    assert_eq!(filtered.len(), 1);

    assert!((limits.time_min_s - 0.0).abs() < 1e-12);
    assert!((limits.time_max_s - 20.0).abs() < 1e-12);
    assert!((limits.deviation_min_mm - (0.05 - 0.1)).abs() < 1e-12);
    assert!((limits.deviation_max_mm - (0.9 + 0.1)).abs() < 1e-12);
}

#[test]
fn test_limits_reject_empty_series() {
    let err = resolve_axis_limits(&[], &[]).unwrap_err();
    assert!(matches!(err, PipelineError::EmptySeries));
}
