use proptest::prelude::*;
use wick_core::{Candle, WickError, candles_from_records, csv_to_records, records_to_json};

#[test]
fn caller_headers_replace_csv_header_row() {
    let records = csv_to_records("a,b\n1,2\n3,4", &["x", "y"]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].iter().collect::<Vec<_>>(), vec![("x", Some("1")), ("y", Some("2"))]);
    assert_eq!(records[1].iter().collect::<Vec<_>>(), vec![("x", Some("3")), ("y", Some("4"))]);
}

#[test]
fn short_rows_leave_keys_absent_and_long_rows_are_cut() {
    let records = csv_to_records("h\n1\n1,2,3", &["x", "y"]);
    assert!(records[0].contains_key("y"));
    assert_eq!(records[0].get("y"), None);
    assert_eq!(records[1].len(), 2);
    assert_eq!(records[1].get("y"), Some("2"));
}

#[test]
fn trailing_newline_yields_mostly_empty_record() {
    let records = csv_to_records("a,b\n1,2\n", &["x", "y"]);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("x"), Some(""));
    assert_eq!(records[1].get("y"), None);
}

#[test]
fn header_only_or_empty_input_has_no_records() {
    assert!(csv_to_records("a,b", &["x", "y"]).is_empty());
    assert!(csv_to_records("", &["x"]).is_empty());
}

#[test]
fn quotes_are_not_interpreted() {
    let records = csv_to_records("h\n\"a,b\",c", &["x", "y", "z"]);
    assert_eq!(records[0].get("x"), Some("\"a"));
    assert_eq!(records[0].get("y"), Some("b\""));
    assert_eq!(records[0].get("z"), Some("c"));
}

#[test]
fn json_omits_absent_values() {
    let records = csv_to_records("a,b\n1,2\n3", &["x", "y"]);
    let json = records_to_json(&records).unwrap();
    assert_eq!(json, r#"[{"x":"1","y":"2"},{"x":"3"}]"#);
}

#[test]
fn candles_from_compact_keys() {
    let csv = "time,open,high,low,close,volume\n\
               2024-01-01,10,12,9,11,100\n\
               2024-01-02,11,13,10,10.5,\r";
    let records = csv_to_records(csv, &["t", "o", "h", "l", "c", "v"]);
    let candles = candles_from_records(&records).unwrap();
    assert_eq!(
        candles,
        vec![
            Candle::new(10.0, 12.0, 9.0, 11.0)
                .with_ts("2024-01-01")
                .with_volume(100.0),
            Candle::new(11.0, 13.0, 10.0, 10.5).with_ts("2024-01-02"),
        ]
    );
}

#[test]
fn candles_require_prices() {
    let records = csv_to_records("h\n1,2,3", &["o", "h", "l", "c"]);
    let err = candles_from_records(&records).unwrap_err();
    assert!(matches!(err, WickError::Data(msg) if msg.contains("'c'")));

    let records = csv_to_records("h\n1,2,x,4", &["o", "h", "l", "c"]);
    assert!(matches!(
        candles_from_records(&records),
        Err(WickError::Data(_))
    ));
}

proptest! {
    #[test]
    fn key_set_equals_headers(
        rows in proptest::collection::vec(proptest::collection::vec("[a-z0-9]{0,4}", 0..6), 0..20),
    ) {
        let headers = ["a", "b", "c", "d"];
        let mut csv = String::from("ignored");
        for row in &rows {
            csv.push('\n');
            csv.push_str(&row.join(","));
        }
        let records = csv_to_records(&csv, &headers);
        prop_assert_eq!(records.len(), rows.len());
        for rec in &records {
            prop_assert_eq!(rec.keys().collect::<Vec<_>>(), headers.to_vec());
        }
    }
}
