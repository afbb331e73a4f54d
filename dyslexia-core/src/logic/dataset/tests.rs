use super::loader::{load_csv, parse_csv};
use super::record::{Label, Sample};
use super::synth::{generate, SynthConfig};
use super::writer::{header, write_csv};
use super::DatasetError;
use crate::logic::features::FeatureVector;
use tempfile::tempdir;
use std::fs;

#[test]
fn test_csv_header_matches_layout() {
    assert_eq!(
        header(),
        "reading_speed,fixation_duration,saccade_length,phoneme_errors,spelling_errors,comprehension_score,dyslexia"
    );
}

#[test]
fn test_write_creates_parent_dirs_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("sample_data.csv");

    let sample = Sample::new(
        FeatureVector::from_values([45.0, 300.0, 25.0, 12.0, 3.0, 80.0]).unwrap(),
        Label::Dyslexia,
    );
    let written = write_csv(&path, &[sample]).unwrap();
    assert_eq!(written, 1);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "45,300,25,12,3,80,1");
}

#[test]
fn test_written_csv_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample_data.csv");

    let samples = generate(&SynthConfig { sample_count: 200, seed: 11 });
    write_csv(&path, &samples).unwrap();

    let loaded = load_csv(&path).unwrap();
    assert_eq!(loaded, samples);
}

#[test]
fn test_columns_in_any_order() {
    let csv = "dyslexia,comprehension_score,spelling_errors,phoneme_errors,saccade_length,fixation_duration,reading_speed\n\
               0,70,7,10,30,350,60\n";
    let samples = parse_csv(csv).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].label, Label::NoDyslexia);
    assert_eq!(samples[0].features, FeatureVector::defaults());
}

#[test]
fn test_bad_header_rejected() {
    let csv = "reading_speed,shoe_size,dyslexia\n1,2,0\n";
    assert!(matches!(parse_csv(csv), Err(DatasetError::Header(_))));

    let no_label = "reading_speed,fixation_duration,saccade_length,phoneme_errors,spelling_errors,comprehension_score\n";
    assert!(matches!(parse_csv(no_label), Err(DatasetError::Header(_))));

    assert!(matches!(parse_csv(""), Err(DatasetError::Header(_))));
}

#[test]
fn test_bad_rows_report_line() {
    let base = super::writer::header();

    let short = format!("{}\n60,350,30\n", base);
    match parse_csv(&short) {
        Err(DatasetError::Row { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected: {:?}", other),
    }

    let bad_label = format!("{}\n60,350,30,10,7,70,2\n", base);
    assert!(matches!(parse_csv(&bad_label), Err(DatasetError::Row { .. })));

    let not_number = format!("{}\n60,abc,30,10,7,70,0\n", base);
    assert!(matches!(parse_csv(&not_number), Err(DatasetError::Row { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_csv(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(DatasetError::Io { .. })));
}
