use crate::types::{Candle, Record, WickError};

/// Convert header-plus-rows CSV text into records keyed by `headers`.
///
/// The text is split on `'\n'` and its first line is discarded: `headers` is
/// authoritative, not the CSV's own header row. Each remaining line is split
/// on `','` with no quote or escape handling and zipped positionally against
/// `headers`:
///
/// - fields beyond the last header are ignored;
/// - headers beyond the last field are present with an absent value;
/// - line endings are not trimmed, so `"\r\n"` input leaves a trailing `'\r'`
///   on the last field of each line.
///
/// A trailing newline produces a final record whose first key maps to `""`
/// and whose remaining keys are absent.
///
/// ```
/// use wick_core::csv_to_records;
///
/// let records = csv_to_records("a,b\n1,2\n3,4", &["x", "y"]);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].get("x"), Some("1"));
/// assert_eq!(records[1].get("y"), Some("4"));
/// assert_eq!(records[0].get("a"), None);
/// ```
#[must_use]
pub fn csv_to_records<S: AsRef<str>>(csv: &str, headers: &[S]) -> Vec<Record> {
    let records: Vec<Record> = csv
        .split('\n')
        .skip(1)
        .map(|line| {
            let mut fields = line.split(',');
            let mut rec = Record::with_capacity(headers.len());
            for h in headers {
                rec.insert(h.as_ref(), fields.next().map(str::to_string));
            }
            rec
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        headers = headers.len(),
        records = records.len(),
        "converted csv text to records"
    );

    records
}

/// Serialize records as a JSON array of objects.
///
/// Keys keep their header order; absent values are left out of each object.
///
/// # Errors
/// Returns `Err(WickError::Data)` if serialization fails.
pub fn records_to_json(records: &[Record]) -> Result<String, WickError> {
    serde_json::to_string(records).map_err(|e| WickError::data(e.to_string()))
}

/// Read candles out of records carrying the compact `t,o,h,l,c,v` keys.
///
/// `o`, `h`, `l` and `c` are required. `t` is copied verbatim and `v` is
/// parsed when present and non-empty. Numeric fields are trimmed before
/// parsing so CRLF input is accepted.
///
/// # Errors
/// Returns `Err(WickError::Data)` naming the row and key if a required price
/// is missing or any numeric field fails to parse.
pub fn candles_from_records(records: &[Record]) -> Result<Vec<Candle>, WickError> {
    records
        .iter()
        .enumerate()
        .map(|(row, rec)| candle_from_record(row, rec))
        .collect()
}

fn candle_from_record(row: usize, rec: &Record) -> Result<Candle, WickError> {
    let price = |key: &str| -> Result<f64, WickError> {
        let raw = rec
            .get(key)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| WickError::data(format!("row {row}: missing '{key}'")))?;
        parse_number(row, key, raw)
    };

    let mut candle = Candle::new(price("o")?, price("h")?, price("l")?, price("c")?);
    if let Some(t) = rec.get("t").filter(|s| !s.is_empty()) {
        candle = candle.with_ts(t);
    }
    if let Some(v) = rec.get("v").filter(|s| !s.trim().is_empty()) {
        candle = candle.with_volume(parse_number(row, "v", v)?);
    }
    Ok(candle)
}

fn parse_number(row: usize, key: &str, raw: &str) -> Result<f64, WickError> {
    raw.trim().parse::<f64>().map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(row, key, raw, error = %e, "unparsable candle field");
        WickError::data(format!("row {row}: '{key}' = {raw:?}: {e}"))
    })
}
