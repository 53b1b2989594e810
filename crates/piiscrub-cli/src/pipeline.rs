//! CSV boundary: read (record_id, data_json) rows, run the redaction core
//! over each payload, write (record_id, redacted_data_json, is_pii) rows.
//!
//! Per-row failures are isolated: a payload that does not parse as a JSON
//! object passes through untouched with the flag forced false. Only I/O and
//! malformed CSV structure are fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use piiscrub_core::{Error, Result};
use piiscrub_redact::process_record;

#[derive(Debug, Deserialize)]
struct InputRow {
    record_id: String,
    data_json: String,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    record_id: String,
    redacted_data_json: String,
    is_pii: String,
}

/// Counts for one pipeline run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub rows: usize,
    pub flagged: usize,
    pub unparsed: usize,
}

/// Canonical string form of the PII flag.
fn render_flag(is_pii: bool) -> &'static str {
    if is_pii {
        "True"
    } else {
        "False"
    }
}

/// Run the full pipeline from `input` to `output`.
pub fn run(input: &Path, output: &Path) -> Result<RunSummary> {
    let mut reader = csv::Reader::from_path(input).map_err(|e| Error::Csv(e.to_string()))?;
    let mut writer = csv::Writer::from_path(output).map_err(|e| Error::Csv(e.to_string()))?;
    let mut summary = RunSummary::default();

    for row in reader.deserialize::<InputRow>() {
        let row = row.map_err(|e| Error::Csv(e.to_string()))?;
        summary.rows += 1;

        let record = match serde_json::from_str::<Value>(&row.data_json) {
            Ok(Value::Object(record)) => record,
            _ => {
                // Defined fallback: the raw payload passes through unredacted.
                debug!(record_id = %row.record_id, "payload is not a JSON object, passing through");
                summary.unparsed += 1;
                writer
                    .serialize(OutputRow {
                        record_id: row.record_id,
                        redacted_data_json: row.data_json,
                        is_pii: render_flag(false).to_string(),
                    })
                    .map_err(|e| Error::Csv(e.to_string()))?;
                continue;
            }
        };

        let (redacted, is_pii) = process_record(&record);
        if is_pii {
            summary.flagged += 1;
        }
        writer
            .serialize(OutputRow {
                record_id: row.record_id,
                redacted_data_json: serde_json::to_string(&Value::Object(redacted))?,
                is_pii: render_flag(is_pii).to_string(),
            })
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_input(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("input.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            concat!(
                "record_id,data_json\n",
                "r1,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n",
                "r2,\"{invalid\"\n",
                "r3,\"{\"\"order_id\"\": \"\"ORD-1\"\"}\"\n",
            ),
        );
        let output = dir.path().join("out.csv");

        let summary = run(&input, &output).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.flagged, 1);
        assert_eq!(summary.unparsed, 1);

        let written = fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next().unwrap(), "record_id,redacted_data_json,is_pii");

        let row1 = lines.next().unwrap();
        assert!(row1.starts_with("r1,"));
        assert!(row1.contains("98XXXXXX10"));
        assert!(row1.ends_with(",True"));

        // The unparseable payload passes through byte-for-byte.
        let row2 = lines.next().unwrap();
        assert_eq!(row2, "r2,{invalid,False");

        let row3 = lines.next().unwrap();
        assert!(row3.contains("ORD-1"));
        assert!(row3.ends_with(",False"));
    }

    #[test]
    fn test_non_object_json_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "record_id,data_json\nr1,42\nr2,\"[1, 2]\"\n");
        let output = dir.path().join("out.csv");

        let summary = run(&input, &output).unwrap();
        assert_eq!(summary.unparsed, 2);
        assert_eq!(summary.flagged, 0);

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.lines().nth(1).unwrap().ends_with(",False"));
    }

    #[test]
    fn test_payload_key_order_survives() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            concat!(
                "record_id,data_json\n",
                "r1,\"{\"\"order_id\"\": \"\"ORD-1\"\", \"\"phone\"\": \"\"9876543210\"\", \"\"zone\"\": \"\"south\"\"}\"\n",
            ),
        );
        let output = dir.path().join("out.csv");
        run(&input, &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let row = written.lines().nth(1).unwrap();
        let order = row.find("order_id").unwrap();
        let phone = row.find("phone").unwrap();
        let zone = row.find("zone").unwrap();
        assert!(order < phone && phone < zone);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        assert!(run(&dir.path().join("absent.csv"), &output).is_err());
    }
}
