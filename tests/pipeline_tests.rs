use effectiveness_plots::charts::{prepare_categories, prepare_series};
use effectiveness_plots::commands::{
    boxplot_saved_message, execute_report, execute_summary, prepare_analysis,
    trend_saved_message, OutputFormat, PipelineConfig,
};
use effectiveness_plots::output::read_report;
use effectiveness_plots::utils::config::PERCENTAGE_CATEGORIES;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const END_TO_END_CSV: &str = "\
Function,Method,Percentage,Run,Passed,Failed
f1,baseline,50,1,8,2
f2,baseline,50,1,6,4
f1,decomposition,50,1,9,1
f2,decomposition,50,1,5,5
";

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_end_to_end_means() {
    let csv = write_csv(END_TO_END_CSV);

    let analysis = prepare_analysis(csv.path()).unwrap();

    let fine: Vec<(String, String, Option<f64>)> = analysis
        .function_means
        .iter()
        .map(|fm| (fm.function.clone(), fm.method.clone(), fm.mean))
        .collect();
    assert_eq!(
        fine,
        vec![
            ("f1".to_string(), "baseline".to_string(), Some(80.0)),
            ("f1".to_string(), "decomposition".to_string(), Some(90.0)),
            ("f2".to_string(), "baseline".to_string(), Some(60.0)),
            ("f2".to_string(), "decomposition".to_string(), Some(50.0)),
        ]
    );

    let coarse: Vec<(String, Option<f64>)> = analysis
        .method_means
        .iter()
        .map(|mm| (mm.method.clone(), mm.mean))
        .collect();
    assert_eq!(
        coarse,
        vec![
            ("baseline".to_string(), Some(70.0)),
            ("decomposition".to_string(), Some(70.0)),
        ]
    );

    let series = prepare_series(&analysis.method_means);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].segments, vec![vec![(50.0, 70.0)]]);
}

#[test]
fn test_distribution_categories_from_file() {
    let csv = write_csv(
        "Function,Method,Percentage,Passed,Failed\n\
         f1,baseline,25,1,1\n\
         f2,baseline,25,1,0\n\
         f1,baseline,40,1,0\n\
         f1,decomposition,25,0,1\n",
    );

    let analysis = prepare_analysis(csv.path()).unwrap();
    let categories = prepare_categories(
        analysis.function_means_for("baseline"),
        &PERCENTAGE_CATEGORIES,
    );

    assert_eq!(categories.len(), PERCENTAGE_CATEGORIES.len());
    assert_eq!(categories[0].values, vec![50.0, 100.0]);
    assert!(categories.iter().all(|c| c.label() != "40%"));
    assert!(categories[1..].iter().all(|c| c.stats.is_none()));
}

#[test]
fn test_repeated_runs_are_identical() {
    let csv = write_csv(END_TO_END_CSV);

    let first = prepare_analysis(csv.path()).unwrap();
    let second = prepare_analysis(csv.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        boxplot_saved_message("baseline_boxplot.png"),
        boxplot_saved_message("baseline_boxplot.png")
    );
    assert_eq!(
        trend_saved_message("effectiveness_plot.png"),
        "Liniendiagramm als effectiveness_plot.png gespeichert."
    );
}

#[test]
fn test_producer_failure_rows_count_as_zero() {
    let csv = write_csv(
        "Function,Method,Percentage,Run,Passed,Failed\n\
         f1,baseline,25,1,250,0\n\
         f1,baseline,25,2,0,250\n",
    );

    let analysis = prepare_analysis(csv.path()).unwrap();

    assert_eq!(analysis.function_means[0].mean, Some(50.0));
    assert_eq!(analysis.function_means[0].samples, 2);
}

#[test]
fn test_missing_input_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("test_results.csv");

    let result = prepare_analysis(&missing);

    assert!(result.is_err());
}

#[test]
fn test_missing_column_is_fatal() {
    let csv = write_csv("Function,Method,Passed,Failed\nf1,baseline,1,1\n");

    let err = prepare_analysis(csv.path()).unwrap_err();

    assert!(format!("{:#}", err).contains("Percentage"));
}

#[test]
fn test_summary_writes_json_report() {
    let csv = write_csv(END_TO_END_CSV);
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("reports/summary.json");

    let analysis = execute_summary(csv.path(), Some(json_path.as_path())).unwrap();
    let report = read_report(&json_path).unwrap();

    assert_eq!(report.record_count, 4);
    assert_eq!(report.function_means, analysis.function_means);
    assert_eq!(report.method_means, analysis.method_means);
}

#[test]
fn test_report_writes_all_charts_as_svg() {
    let csv = write_csv(END_TO_END_CSV);
    let temp_dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        input_path: csv.path().to_path_buf(),
        output_dir: temp_dir.path().join("charts"),
        format: OutputFormat::Svg,
        ..Default::default()
    };

    let saved = execute_report(&config).unwrap();

    let messages: Vec<&str> = saved.iter().map(|s| s.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Der Boxplot wurde als baseline_boxplot.svg gespeichert",
            "Der Boxplot wurde als decomposition_boxplot.svg gespeichert",
            "Liniendiagramm als effectiveness_plot.svg gespeichert.",
        ]
    );

    for name in [
        "baseline_boxplot.svg",
        "decomposition_boxplot.svg",
        "effectiveness_plot.svg",
    ] {
        let path = temp_dir.path().join("charts").join(name);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"), "{} is not an SVG", name);
    }
    assert!(saved.iter().all(|s| s.path.starts_with(temp_dir.path())));
}
