use std::fs;

use csvfix_ingest::{CsvTable, IngestError, read_csv_table, read_csv_text, write_csv_table};

#[test]
fn reads_header_and_rows() {
    let table = read_csv_text("id,description - p,Status\n1,Sea view,Done\n2,Garden,sold\n")
        .expect("read csv");
    assert_eq!(table.headers, vec!["id", "description - p", "Status"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["2", "Garden", "sold"]);
}

#[test]
fn keeps_quoted_multiline_fields_and_whitespace() {
    let text = "id,description - p,Status\n3,\"  Two\nlines,  \",pending\n";
    let table = read_csv_text(text).expect("read csv");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][1], "  Two\nlines,  ");
}

#[test]
fn tolerates_short_rows() {
    let table = read_csv_text("id,description - p,Status\n4\n5,Flat,Done\n").expect("read csv");
    assert_eq!(table.rows[0], vec!["4"]);
    assert_eq!(table.rows[1].len(), 3);
}

#[test]
fn empty_input_gives_empty_table() {
    let table = read_csv_text("").expect("read csv");
    assert!(table.is_empty());
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, IngestError::Read { .. }));
}

#[test]
fn written_file_reads_back_identically() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    let table = CsvTable::new(
        vec!["id".into(), "description - p".into(), "Status".into()],
        vec![
            vec!["1".into(), "Nice flat, spacious room".into(), "Done".into()],
            vec!["2".into(), "Says \"hi\"\nthen leaves".into(), "Sold".into()],
            vec!["3".into()],
        ],
    );
    write_csv_table(&path, &table).expect("write csv");

    let raw = fs::read_to_string(&path).expect("read raw");
    assert!(raw.starts_with("id,description - p,Status\r\n"));
    assert!(raw.contains("1,\"Nice flat, spacious room\",Done\r\n"));

    let round = read_csv_table(&path).expect("read back");
    assert_eq!(round, table);
}

#[test]
fn byte_order_mark_survives_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("bom.csv");
    let output = dir.path().join("bom_out.csv");
    fs::write(&input, "\u{feff}id,description - p,Status\r\n1,Loft,Done\r\n").expect("write input");

    let table = read_csv_table(&input).expect("read csv");
    assert!(table.bom);
    assert_eq!(table.headers[0], "id");

    write_csv_table(&output, &table).expect("write csv");
    let raw = fs::read(&output).expect("read raw");
    assert_eq!(raw, fs::read(&input).expect("read input"));
}

#[test]
fn plain_input_is_written_without_bom() {
    let table = read_csv_text("id,Status\n1,Done\n").expect("read csv");
    assert!(!table.bom);
    let mut out = Vec::new();
    csvfix_ingest::write_csv_to(&mut out, &table).expect("write csv");
    assert!(out.starts_with(b"id,Status\r\n"));
}
