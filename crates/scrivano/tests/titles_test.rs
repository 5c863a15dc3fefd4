//! Tests for date-keyed title resolution.

use scrivano::{title_for_date, ScrivanoErrorKind, StoreErrorKind};
use std::io::Write;

fn titles_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write titles");
    file
}

#[test]
fn resolves_title_for_matching_date() {
    let file = titles_file(r#"{"2024-07-28": "Getting Started with SQL"}"#);

    let title = title_for_date(file.path(), "2024-07-28").unwrap();

    assert_eq!(title, "Getting Started with SQL");
}

#[test]
fn missing_date_fails_with_title_not_found() {
    let file = titles_file(r#"{"2024-07-28": "Getting Started with SQL"}"#);

    let err = title_for_date(file.path(), "2024-07-29").unwrap_err();

    match err.kind() {
        ScrivanoErrorKind::Store(e) => match &e.kind {
            StoreErrorKind::TitleNotFound(date) => assert_eq!(date, "2024-07-29"),
            other => panic!("unexpected store kind: {other:?}"),
        },
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn unreadable_file_fails_with_file_read() {
    let err = title_for_date("/nonexistent/titles.json", "2024-07-28").unwrap_err();

    match err.kind() {
        ScrivanoErrorKind::Store(e) => {
            assert!(matches!(e.kind, StoreErrorKind::FileRead(_)))
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn invalid_json_fails_with_json_kind() {
    let file = titles_file("not json at all");

    let err = title_for_date(file.path(), "2024-07-28").unwrap_err();

    match err.kind() {
        ScrivanoErrorKind::Store(e) => assert!(matches!(e.kind, StoreErrorKind::Json(_))),
        other => panic!("unexpected kind: {other:?}"),
    }
}
