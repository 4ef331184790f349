use effectiveness_plots::parser::{load_results, parse_results, Percentage, ResultRecord};
use effectiveness_plots::utils::LoadError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_results_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Function,Method,Percentage,Run,Passed,Failed").unwrap();
    writeln!(file, "isPrime,baseline,37,1,120,130").unwrap();
    writeln!(file, "isPrime,decomposition,37,1,0,250").unwrap();

    let records = load_results(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], ResultRecord::new("isPrime", "baseline", 37.0, 120.0, 130.0));
    assert_eq!(records[1].passed, Some(0.0));
}

#[test]
fn test_load_results_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = load_results(temp_dir.path().join("absent.csv"));

    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_percentage_keys_unify_number_forms() {
    let input =
        "Function,Method,Percentage,Passed,Failed\nf,baseline,50,1,1\nf,baseline,50.0,1,1\n";
    let records = parse_results(input.as_bytes()).unwrap();

    assert_eq!(records[0].percentage, records[1].percentage);
    assert_eq!(records[0].percentage, Percentage::new(50.0));
}

#[test]
fn test_unparsable_cells_become_missing() {
    let input = "Function,Method,Percentage,Passed,Failed\nf,baseline,fifty,ten,-\n";
    let records = parse_results(input.as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert!(records[0].percentage.is_none());
    assert!(records[0].passed.is_none());
    assert!(records[0].failed.is_none());
}

#[test]
fn test_quoted_labels() {
    let input = "Function,Method,Percentage,Passed,Failed\n\"max, min\",baseline,87,2,2\n";
    let records = parse_results(input.as_bytes()).unwrap();

    assert_eq!(records[0].function.as_deref(), Some("max, min"));
}
