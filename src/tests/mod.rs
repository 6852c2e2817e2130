use crate::prelude::*;
use ndarray::array;

#[test]
fn read_test_settings() {
    let settings = read_settings("src/tests/config.toml").unwrap();
    assert_eq!(settings.paths.data, "src/tests/inflammation.csv");
    assert_eq!(settings.paths.output, "outputs/test/");
    assert_eq!(settings.analysis.threshold, 3.0);
    assert_eq!(settings.analysis.patient, Some(2));
    assert_eq!(settings.log.level, "debug");
    assert!(!settings.log.write);
    assert_eq!(settings.log.file, "inflammation.log");
}

#[test]
fn read_missing_settings() {
    assert!(read_settings("src/tests/missing.toml").is_err());
}

#[test]
fn summarise_test_datafile() {
    let table = load_csv("src/tests/inflammation.csv").unwrap();
    let summary = daily_summary(&table).unwrap();

    assert_eq!(summary.ndays(), 10);
    assert_eq!(summary.mean[0], 0.0);
    assert_eq!(summary.mean[1], 0.5);
    assert_eq!(summary.max[9], 9.0);
    assert_eq!(summary.min[9], 3.0);
    assert_eq!(summary.std[0], 0.0);
}

#[test]
fn flag_test_datafile() {
    let table = load_csv("src/tests/inflammation.csv").unwrap();
    let flags = daily_above_threshold(2, &table, 3.0).unwrap();
    assert_eq!(
        flags,
        array![false, false, false, false, false, false, true, false, true, true]
    );
}

#[test]
fn analyse_test_settings() {
    let mut settings = read_settings("src/tests/config.toml").unwrap();
    settings.paths.output = std::env::temp_dir()
        .join("inflammation_analyse")
        .to_string_lossy()
        .into_owned();

    let analysis = analyse(&settings).unwrap();
    assert_eq!(analysis.table.npatients(), 6);
    assert_eq!(analysis.summary.ndays(), 10);
    assert_eq!(analysis.flags.as_ref().map(|flags| flags.len()), Some(10));
    assert_eq!(analysis.outputs.len(), 2);
    assert!(analysis.outputs.iter().all(|path| path.exists()));
}

#[test]
fn analyse_patient_out_of_range() {
    let mut settings = Settings::new("src/tests/inflammation.csv");
    settings.analysis.patient = Some(6);
    settings.paths.output = std::env::temp_dir()
        .join("inflammation_out_of_range")
        .to_string_lossy()
        .into_owned();
    assert!(analyse(&settings).is_err());
}
