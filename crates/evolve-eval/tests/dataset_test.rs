use evolve_core::errors::EvalError;
use evolve_eval::{builtin_dataset, load_dataset, parse_dataset, parse_thresholds, EvalRecord};
use test_fixtures::{write_dataset, write_file};

// ---------------------------------------------------------------------------
// Dataset loading
// ---------------------------------------------------------------------------

#[test]
fn missing_file_falls_back_to_builtin_rows() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_dataset(&dir.path().join("absent.jsonl")).unwrap();

    assert_eq!(rows, builtin_dataset());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], EvalRecord::new("What is alpha evolve?", false));
    assert!(rows[1].should_refuse);
}

#[test]
fn loads_rows_written_by_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(dir.path(), &[("What is BM25?", false), ("Who is Zorblax?", true)]);

    let rows = load_dataset(&path).unwrap();
    assert_eq!(
        rows,
        vec![
            EvalRecord::new("What is BM25?", false),
            EvalRecord::new("Who is Zorblax?", true),
        ]
    );
}

#[test]
fn query_alias_and_defaults() {
    let text = r#"
{"query": "alias only"}

{"question": "", "query": "empty question falls through", "should_refuse": true}
{"question": "question wins", "query": "ignored"}
{"should_refuse": true}
"#;
    let rows = parse_dataset(text).unwrap();
    assert_eq!(
        rows,
        vec![
            EvalRecord::new("alias only", false),
            EvalRecord::new("empty question falls through", true),
            EvalRecord::new("question wins", false),
            EvalRecord::new("", true),
        ]
    );
}

#[test]
fn unknown_fields_are_ignored() {
    let rows = parse_dataset(r#"{"question": "q", "source": "handwritten", "id": 7}"#).unwrap();
    assert_eq!(rows, vec![EvalRecord::new("q", false)]);
}

#[test]
fn malformed_line_reports_its_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "eval.jsonl",
        b"{\"question\": \"fine\"}\n\n{not json}\n",
    );

    match load_dataset(&path) {
        Err(EvalError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn wrong_field_type_is_malformed() {
    let err = parse_dataset(r#"{"question": "q", "should_refuse": "yes"}"#).unwrap_err();
    assert!(matches!(err, EvalError::MalformedRecord { line: 1, .. }));
}

#[test]
fn unreadable_dataset_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but can't be read as a file.
    let err = load_dataset(dir.path()).unwrap_err();
    assert!(matches!(err, EvalError::DatasetRead { .. }));
}

// ---------------------------------------------------------------------------
// Threshold lists
// ---------------------------------------------------------------------------

#[test]
fn parses_threshold_list_with_spaces_and_empty_items() {
    assert_eq!(parse_thresholds("0.5, 0.6,0.7").unwrap(), vec![0.5, 0.6, 0.7]);
    assert_eq!(parse_thresholds(" 0.9 ,, ").unwrap(), vec![0.9]);
}

#[test]
fn bad_threshold_item_is_rejected() {
    match parse_thresholds("0.5,abc,0.7") {
        Err(EvalError::InvalidSweep { item }) => assert_eq!(item, "abc"),
        other => panic!("expected InvalidSweep, got {other:?}"),
    }
    assert!(matches!(
        parse_thresholds("0.5,NaN"),
        Err(EvalError::InvalidSweep { .. })
    ));
}

#[test]
fn empty_threshold_list_is_rejected() {
    assert!(matches!(parse_thresholds(""), Err(EvalError::EmptySweep)));
    assert!(matches!(parse_thresholds(" , ,"), Err(EvalError::EmptySweep)));
}

#[test]
fn sweep_error_message_shows_expected_syntax() {
    let err = parse_thresholds("high").unwrap_err();
    assert!(err.to_string().contains("comma-separated list of floats"));
}
