//! Minimal ADIF (.adi) log reading.
//!
//! Extracts `<FIELD:length>value` fields and `<eor>` record boundaries
//! from an ADIF export, discarding the header section when present. This
//! is not a full ADIF implementation; it reads just enough of the format
//! to recover the per-QSO fields the scorer needs, and does not validate
//! the wider grammar.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::SENTINEL_GRID;
use crate::error::{Result, ScoreError};
use crate::models::ContactRecord;

/// Matches an ADIF tag: `<name:length>`, `<name:length:type>` or a bare
/// marker like `<eor>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z0-9_]+)(?::(\d+)(?::[^>]*)?)?>").expect("tag pattern")
});

/// One ADIF record: uppercased field names mapped to raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdifRecord {
    fields: HashMap<String, String>,
}

impl AdifRecord {
    /// Field value by case-insensitive ADIF name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Convert to a contact record, applying the log conventions: absent
    /// callsign/band fields render as "ERROR", absent grid squares as the
    /// unset-grid sentinel.
    pub fn to_contact(&self) -> ContactRecord {
        ContactRecord {
            callsign: self.get("CALL").unwrap_or("ERROR").to_string(),
            band: self.get("BAND").unwrap_or("ERROR").to_string(),
            my_grid: self.get("MY_GRIDSQUARE").unwrap_or(SENTINEL_GRID).to_string(),
            grid: self.get("GRIDSQUARE").unwrap_or(SENTINEL_GRID).to_string(),
        }
    }
}

/// Read and parse an ADIF log file.
///
/// An unreadable path or malformed log is fatal to the run.
pub fn read_log(path: &Path) -> Result<Vec<AdifRecord>> {
    if !path.exists() {
        return Err(ScoreError::LogNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path)?;
    let records = parse(&raw).map_err(|reason| ScoreError::InvalidLog {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!("Parsed {} ADIF records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse ADIF text into records.
///
/// Fields seen before `<eoh>` belong to the header and are discarded.
/// A trailing record without a closing `<eor>` is kept; logs truncated
/// mid-write are common enough to tolerate.
pub fn parse(input: &str) -> std::result::Result<Vec<AdifRecord>, String> {
    let mut records = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut pos = 0;

    while pos < input.len() {
        let Some(caps) = TAG_RE.captures(&input[pos..]) else {
            break;
        };
        let tag_end = pos + caps.get(0).map_or(0, |m| m.end());
        let name = caps[1].to_ascii_uppercase();

        match caps.get(2) {
            None if name == "EOH" => {
                fields.clear();
                pos = tag_end;
            }
            None if name == "EOR" => {
                if !fields.is_empty() {
                    records.push(AdifRecord {
                        fields: std::mem::take(&mut fields),
                    });
                }
                pos = tag_end;
            }
            None => {
                // Length-less tag we don't understand, skip it.
                pos = tag_end;
            }
            Some(len) => {
                let len: usize = len
                    .as_str()
                    .parse()
                    .map_err(|_| format!("unparseable length in field {name}"))?;

                // ADIF lengths count characters, not bytes.
                let value: String = input[tag_end..].chars().take(len).collect();
                if value.chars().count() < len {
                    return Err(format!("field {name} overruns the end of the log"));
                }
                pos = tag_end + value.len();
                fields.insert(name, value);
            }
        }
    }

    if !fields.is_empty() {
        records.push(AdifRecord { fields });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let records =
            parse("<CALL:5>K1ABC<BAND:3>20m<GRIDSQUARE:4>FN31<eor>").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("CALL"), Some("K1ABC"));
        assert_eq!(records[0].get("BAND"), Some("20m"));
        assert_eq!(records[0].get("GRIDSQUARE"), Some("FN31"));
        assert_eq!(records[0].get("MODE"), None);
    }

    #[test]
    fn test_field_names_are_case_insensitive() {
        let records = parse("<call:5>K1ABC<eor>").unwrap();
        assert_eq!(records[0].get("CALL"), Some("K1ABC"));
        assert_eq!(records[0].get("call"), Some("K1ABC"));
    }

    #[test]
    fn test_header_is_discarded() {
        let input = "WSJT-X ADIF Export<adif_ver:5>3.1.0<eoh>\n<CALL:5>K1ABC<eor>";
        let records = parse(input).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("ADIF_VER"), None);
        assert_eq!(records[0].get("CALL"), Some("K1ABC"));
    }

    #[test]
    fn test_type_suffix_is_accepted() {
        let records = parse("<CALL:5:S>K1ABC<eor>").unwrap();
        assert_eq!(records[0].get("CALL"), Some("K1ABC"));
    }

    #[test]
    fn test_multiple_records() {
        let input = "<CALL:5>K1ABC<BAND:3>20m<eor><CALL:5>W5XYZ<BAND:3>40m<eor>";
        let records = parse(input).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("CALL"), Some("W5XYZ"));
    }

    #[test]
    fn test_trailing_record_without_eor_is_kept() {
        let records = parse("<CALL:5>K1ABC<BAND:3>20m").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("BAND"), Some("20m"));
    }

    #[test]
    fn test_overrunning_field_is_an_error() {
        let err = parse("<CALL:50>K1ABC").unwrap_err();
        assert!(err.contains("CALL"), "got: {err}");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("no tags here at all").unwrap().is_empty());
    }

    #[test]
    fn test_value_may_contain_angle_text() {
        // The declared length wins over any '<' inside the value.
        let records = parse("<COMMENT:3><<<<CALL:5>K1ABC<eor>").unwrap();
        assert_eq!(records[0].get("COMMENT"), Some("<<<"));
        assert_eq!(records[0].get("CALL"), Some("K1ABC"));
    }

    #[test]
    fn test_to_contact_applies_defaults() {
        let records = parse("<CALL:5>K1ABC<eor>").unwrap();
        let contact = records[0].to_contact();

        assert_eq!(contact.callsign, "K1ABC");
        assert_eq!(contact.band, "ERROR");
        assert_eq!(contact.my_grid, SENTINEL_GRID);
        assert_eq!(contact.grid, SENTINEL_GRID);
    }

    #[test]
    fn test_to_contact_full_record() {
        let input =
            "<CALL:5>K1ABC<BAND:3>20m<MY_GRIDSQUARE:4>EM12<GRIDSQUARE:6>FN31pr<eor>";
        let contact = parse(input).unwrap()[0].to_contact();

        assert_eq!(contact.callsign, "K1ABC");
        assert_eq!(contact.band, "20m");
        assert_eq!(contact.my_grid, "EM12");
        assert_eq!(contact.grid, "FN31pr");
    }
}
