//! Integration tests for parsing classroom files end to end
//!
//! These tests write realistic classroom files to a temporary directory and
//! run them through the public library surface.

use classroom_stats::{
    AppConfig, ClassroomError, ClassroomParser, compute_statistics, lookup_average, parse_complex,
    parse_simple,
};
use std::fs;
use tempfile::TempDir;

const SIMPLE_CLASSROOM: &str = "Simple classroom
Alice
France
80
90
100
###
Bob
Spain
70
75
80
";

const COMPLEX_CLASSROOM: &str = "Complex classroom
Alice
France
80
90
100
age=12
###
Bob
Spain
70
note=great effort
80
###
Carol
Chile
90
100
note=top of the class
note=helps others
###
";

/// Simple example from the format description
#[test]
fn test_simple_alice_example() {
    let students = parse_simple("header\nAlice\nFrance\n80\n90\n100\n").unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alice");
    assert_eq!(students[0].country, "France");
    assert_eq!(students[0].grades, vec![80, 90, 100]);

    // Keys are lowercased names and the lookup does not fold case
    assert_eq!(lookup_average(&students, "alice"), Some(90.0));
    assert_eq!(lookup_average(&students, "Alice"), None);
}

/// Complex example from the format description
#[test]
fn test_complex_bob_example() {
    let collection = parse_complex("header\nBob\nSpain\n70\nnote=great effort\n80\n").unwrap();
    let bob = collection.get("bob").unwrap();

    assert_eq!(bob.grades, vec![70, 80]);
    assert_eq!(bob.notes, Some(vec!["great effort".to_string()]));
    assert_eq!(bob.average, 75.0);

    let json = serde_json::to_value(bob).unwrap();
    assert_eq!(json["notes"][0], "great effort");

    let without_notes = parse_complex("header\nBob\nSpain\n70\n80\n").unwrap();
    let json = serde_json::to_value(without_notes.get("bob").unwrap()).unwrap();
    assert!(json.get("notes").is_none());
}

#[test]
fn test_full_pipeline_from_files() {
    let dir = TempDir::new().unwrap();
    let simple_path = dir.path().join("classroom_simple.txt");
    let complex_path = dir.path().join("classroom_complex.txt");
    fs::write(&simple_path, SIMPLE_CLASSROOM).unwrap();
    fs::write(&complex_path, COMPLEX_CLASSROOM).unwrap();

    let config = AppConfig::default()
        .with_simple_path(&simple_path)
        .with_complex_path(&complex_path);
    config.validate().unwrap();

    let parser = ClassroomParser::with_config(config.parser.clone());
    let simple = parser.parse_simple_file(&config.simple_path).unwrap();
    let complex = parser.parse_complex_file(&config.complex_path).unwrap();

    assert_eq!(lookup_average(&simple.records, "bob"), Some(75.0));
    assert_eq!(lookup_average(&complex.records, "carol"), Some(95.0));
    assert_eq!(lookup_average(&complex.records, "dave"), None);

    let stats = compute_statistics(&complex.records).unwrap();
    // 80 90 100 70 80 90 100
    assert!((stats.total_average - 610.0 / 7.0).abs() < 1e-9);
    assert_eq!(stats.median_grade, 90.0);

    let ranked: Vec<&str> = stats
        .ranking
        .iter()
        .map(|(_, record)| record.name.as_str())
        .collect();
    assert_eq!(ranked, vec!["Carol", "Alice", "Bob"]);
}

#[test]
fn test_every_complex_average_matches_grades() {
    let collection = parse_complex(COMPLEX_CLASSROOM).unwrap();

    for student in collection.values() {
        let expected =
            student.grades.iter().sum::<i64>() as f64 / student.grades.len() as f64;
        assert!((student.average - expected).abs() < 1e-9);
    }
}

#[test]
fn test_malformed_simple_file_aborts() {
    let text = SIMPLE_CLASSROOM.replace("75", "seventy-five");
    let err = parse_simple(&text).unwrap_err();

    assert!(matches!(err, ClassroomError::Parse { block: 2, .. }));
    assert!(err.to_string().contains("seventy-five"));
}

#[test]
fn test_complex_file_parsed_with_simple_decoder_is_shape_error() {
    let err = parse_simple(COMPLEX_CLASSROOM).unwrap_err();
    assert!(matches!(err, ClassroomError::Shape { block: 1, found: 6, .. }));
}
