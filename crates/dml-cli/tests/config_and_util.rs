//! Integration tests for CLI config parsing, util helpers, and subcommand bodies.

use dml_cli::commands::{
    load_table, run_describe, run_head, run_sample, run_scale, run_tail, ScaleMode,
};
use dml_cli::config::{load_run_config, RunConfig};
use dml_cli::util::validate_tsv_or_csv_file;

fn write_data(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// ---------------------------------------------------------------------------
// validate_tsv_or_csv_file
// ---------------------------------------------------------------------------

#[test]
fn validate_tsv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.tsv", "");
    assert!(validate_tsv_or_csv_file(&path).is_ok());
}

#[test]
fn validate_csv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.CSV", "");
    assert!(validate_tsv_or_csv_file(&path).is_ok());
}

#[test]
fn validate_wrong_extension_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.txt", "");
    assert!(validate_tsv_or_csv_file(&path).is_err());
}

#[test]
fn validate_nonexistent_file_errors() {
    assert!(validate_tsv_or_csv_file("/nonexistent/path/data.tsv").is_err());
}

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

#[test]
fn run_config_default_values() {
    let cfg = RunConfig::default();
    assert!(cfg.reader.has_headers);
    assert_eq!(cfg.reader.delimiter, None);
    assert_eq!(cfg.preview.head_precision, 3);
    assert_eq!(cfg.sampling.seed, None);
}

#[test]
fn run_config_loads_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(
        &dir,
        "run.json",
        r#"{"sampling": {"seed": 11}, "preview": {"width": 8}}"#,
    );

    let cfg = load_run_config(&path).unwrap();
    assert_eq!(cfg.sampling.seed, Some(11));
    assert_eq!(cfg.preview.width, 8);
    assert_eq!(cfg.preview.tail_precision, 2);
    assert!(cfg.reader.has_headers);
}

#[test]
fn run_config_round_trips_json() {
    let cfg = RunConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("has_headers"));
    let cfg2: RunConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn run_config_invalid_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "run.json", "{ not json");
    let err = load_run_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

#[test]
fn previews_reject_bad_line_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "a\n1\n2\n");
    let cfg = RunConfig::default();
    let data = load_table(&path, &cfg).unwrap();

    assert!(run_head(&data, 3, &cfg).is_err());
    assert!(run_tail(&data, 0, &cfg).is_err());
}

#[test]
fn sample_prints_requested_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "a,b\n1,2\n3,4\n");
    let mut cfg = RunConfig::default();
    cfg.sampling.seed = Some(3);
    let data = load_table(&path, &cfg).unwrap();

    let out = render(|out| run_sample(out, &data, 6, &cfg));
    let values: Vec<f32> = out.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 6);
    assert!(values.iter().all(|v| [1.0, 2.0, 3.0, 4.0].contains(v)));
}

#[test]
fn describe_reports_named_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "height,weight\n1,7\n2,7\n3,7\n4,7\n");
    let data = load_table(&path, &RunConfig::default()).unwrap();

    let out = render(|out| run_describe(out, &data, None));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "height\t2.5000\t2.5000\t1.1180\t1.2500\t1.0000\t4.0000"
    );
    assert_eq!(
        lines[2],
        "weight\t7.0000\t7.0000\t0.0000\t0.0000\t7.0000\t7.0000"
    );
}

#[test]
fn describe_rejects_unknown_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "a\n1\n");
    let data = load_table(&path, &RunConfig::default()).unwrap();
    let mut buf = Vec::new();
    assert!(run_describe(&mut buf, &data, Some(4)).is_err());
}

#[test]
fn scale_maps_column_to_target_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "a,b\n0,10\n5,20\n10,30\n");
    let data = load_table(&path, &RunConfig::default()).unwrap();

    let out = render(|out| run_scale(out, &data, 1, ScaleMode::Range { low: -1.0, high: 1.0 }));
    assert_eq!(out, "-1.0000\n0.0000\n1.0000\n");
}

#[test]
fn scale_unity_divides_by_column_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "a\n10\n20\n30\n");
    let data = load_table(&path, &RunConfig::default()).unwrap();

    let out = render(|out| run_scale(out, &data, 0, ScaleMode::Unity));
    assert_eq!(out, "0.5000\n1.0000\n1.5000\n");
}

#[test]
fn scale_constant_column_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(&dir, "data.csv", "a\n3\n3\n");
    let data = load_table(&path, &RunConfig::default()).unwrap();
    let mut buf = Vec::new();
    assert!(run_scale(&mut buf, &data, 0, ScaleMode::Unity).is_err());
}
