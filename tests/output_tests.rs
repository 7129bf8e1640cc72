use std::collections::BTreeSet;

use subhunter::config::OutputFormat;
use subhunter::output::{write_csv, write_json, write_results};

fn result_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn csv_has_header_and_sorted_rows() {
    let set = result_set(&["www.example.com", "api.example.com", "*.dev.example.com"]);
    let mut buf = Vec::new();
    write_csv(&mut buf, &set).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(
        text,
        "subdomain\n*.dev.example.com\napi.example.com\nwww.example.com\n"
    );
}

#[test]
fn csv_with_empty_set_is_just_the_header() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &BTreeSet::new()).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "subdomain\n");
}

#[test]
fn json_is_a_sorted_array() {
    let set = result_set(&["www.example.com", "api.example.com"]);
    let mut buf = Vec::new();
    write_json(&mut buf, &set).unwrap();

    let parsed: Vec<String> = serde_json::from_slice(&buf).unwrap();
    assert_eq!(parsed, vec!["api.example.com", "www.example.com"]);
}

#[test]
fn json_output_is_deterministic() {
    // Insertion order must not leak into the serialized form.
    let a = result_set(&["b.example.com", "a.example.com", "c.example.com"]);
    let b = result_set(&["c.example.com", "a.example.com", "b.example.com"]);

    let mut buf_a = Vec::new();
    let mut buf_b = Vec::new();
    write_json(&mut buf_a, &a).unwrap();
    write_json(&mut buf_b, &b).unwrap();
    assert_eq!(buf_a, buf_b);
}

#[test]
fn write_results_creates_the_output_file() {
    let dir = std::env::temp_dir().join("subhunter-output-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("subs.json");

    let set = result_set(&["a.example.com"]);
    write_results(&set, OutputFormat::Json, Some(&path)).unwrap();

    let parsed: Vec<String> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, vec!["a.example.com"]);
    std::fs::remove_file(&path).ok();
}

#[test]
fn write_results_fails_cleanly_on_bad_path() {
    let set = result_set(&["a.example.com"]);
    let err = write_results(
        &set,
        OutputFormat::Csv,
        Some(std::path::Path::new("/nonexistent-dir/subs.csv")),
    )
    .unwrap_err();
    assert!(matches!(err, subhunter::SubhunterError::Io { .. }));
}

#[test]
fn write_results_falls_back_to_stdout() {
    let set = result_set(&["a.example.com"]);
    assert!(write_results(&set, OutputFormat::Csv, None).is_ok());
}
