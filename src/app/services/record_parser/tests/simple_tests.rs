//! Tests for the simple-format decoder

use crate::ClassroomError;
use crate::app::models::SimpleStudent;
use crate::app::services::record_parser::simple::decode_simple_block;

#[test]
fn test_decode_simple_block() {
    let student = decode_simple_block("Alice\nFrance\n80\n90\n100\n", 1).unwrap();

    assert_eq!(
        student,
        SimpleStudent {
            name: "Alice".to_string(),
            country: "France".to_string(),
            grades: vec![80, 90, 100],
        }
    );
}

#[test]
fn test_blank_lines_are_ignored() {
    let student = decode_simple_block("\nAlice\n\nFrance\n80\n  \n90\n100\n\n", 1).unwrap();
    assert_eq!(student.grades, vec![80, 90, 100]);
}

#[test]
fn test_grade_whitespace_and_sign() {
    let student = decode_simple_block("Alice\nFrance\n 80 \n+90\n-5\n", 1).unwrap();
    assert_eq!(student.grades, vec![80, 90, -5]);
}

#[test]
fn test_non_numeric_grade() {
    let err = decode_simple_block("Alice\nFrance\n80\nninety\n100\n", 4).unwrap_err();

    match err {
        ClassroomError::Parse { block, token, .. } => {
            assert_eq!(block, 4);
            assert_eq!(token, "ninety");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_too_few_lines() {
    let err = decode_simple_block("Alice\nFrance\n80\n90\n", 2).unwrap_err();
    assert!(matches!(
        err,
        ClassroomError::Shape {
            block: 2,
            found: 4,
            ..
        }
    ));
}

#[test]
fn test_too_many_lines() {
    let err = decode_simple_block("Alice\nFrance\n80\n90\n100\n70\n", 1).unwrap_err();
    assert!(matches!(err, ClassroomError::Shape { found: 6, .. }));
}

#[test]
fn test_empty_block_is_shape_error() {
    let err = decode_simple_block("", 3).unwrap_err();
    assert!(matches!(err, ClassroomError::Shape { found: 0, .. }));
    assert!(err.to_string().contains("exactly 5"));
}
