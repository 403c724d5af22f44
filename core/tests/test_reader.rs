use std::fs;
use std::path::Path;

use pupilgraph_core::reader::read_samples;
use pupilgraph_core::PipelineError;

#[test]
fn test_reads_tab_delimited_file() {
    let path = "tests/tmp_reader_tab.tsv";
    fs::write(
        path,
        "timestamp\tpupil.x\tpupil.y\tpupil.confidence\n\
         0\t100.5\t99.5\t0.9\n\
         15.2\t101.0\t98.0\t0.3\n",
    )
    .expect("kunne ikke skrive fixture");

    let samples = read_samples(Path::new(path)).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].pupil_x, 100.5);
    assert_eq!(samples[1].confidence, 0.3);

    fs::remove_file(path).ok();
}

#[test]
fn test_reads_comma_delimited_file() {
    let path = "tests/tmp_reader_comma.csv";
    fs::write(
        path,
        "timestamp,pupil.x,pupil.y,pupil.confidence\n0,1.0,2.0,0.8\n",
    )
    .expect("kunne ikke skrive fixture");

    let samples = read_samples(Path::new(path)).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].pupil_y, 2.0);

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_input_error() {
    let err = read_samples(Path::new("tests/does_not_exist.tsv")).unwrap_err();
    assert!(matches!(err, PipelineError::InputFile { .. }));
}

#[test]
fn test_missing_column_is_detected_before_parsing() {
    let path = "tests/tmp_reader_missing_col.tsv";
    fs::write(path, "timestamp\tpupil.x\tpupil.y\n0\t1.0\t2.0\n").unwrap();

    let err = read_samples(Path::new(path)).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::MissingColumn("pupil.confidence")
    ));

    fs::remove_file(path).ok();
}

#[test]
fn test_empty_sample_set_is_its_own_error() {
    let path = "tests/tmp_reader_empty.tsv";
    fs::write(path, "timestamp\tpupil.x\tpupil.y\tpupil.confidence\n").unwrap();

    let err = read_samples(Path::new(path)).unwrap_err();
    assert!(matches!(err, PipelineError::EmptySeries));

    fs::remove_file(path).ok();
}
