//! BEDPE validation
//!
//! Checks the breakpoint columns of a BEDPE stream. The scan stops at the
//! first row that fails; rows before it are counted as valid.

use crate::core::{Delimiter, InputSource, RawRecord, RecordReader};
use log::info;
use std::fmt;
use std::io::{self, BufRead};

/// Columns every BEDPE row must carry
pub const REQUIRED_FIELDS: [&str; 6] = ["chrom1", "start1", "end1", "chrom2", "start2", "end2"];

/// Position columns among [`REQUIRED_FIELDS`]
pub const POSITION_FIELDS: [&str; 4] = ["start1", "end1", "start2", "end2"];

/// Why a row was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDefect {
    MissingField(&'static str),
    NotInteger { field: &'static str, value: String },
    BelowSentinel { field: &'static str, value: String },
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDefect::MissingField(field) => write!(f, "missing field '{}'", field),
            RowDefect::NotInteger { field, value } => {
                write!(f, "field '{}' is not an integer: '{}'", field, value)
            }
            RowDefect::BelowSentinel { field, value } => {
                write!(f, "field '{}' is below -1: {}", field, value)
            }
        }
    }
}

/// The first rejected row of a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// 0-based index among data rows
    pub row_index: usize,
    /// Line number in the input
    pub line: usize,
    /// `(column, value)` pairs of the row as read
    pub row: Vec<(String, String)>,
    pub defect: RowDefect,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid record at index {} (line {}): {}",
            self.row_index, self.line, self.defect
        )?;
        for (column, value) in &self.row {
            write!(f, "\n  {}: {}", column, value)?;
        }
        Ok(())
    }
}

/// Outcome of validating a stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Rows accepted before the scan ended
    pub valid_rows: usize,
    pub failure: Option<ValidationFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Optional sign followed by ASCII digits
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Check one row: fields present, then integer syntax, then `>= -1`
///
/// A field is present when the header names it and the row reaches its cell.
pub fn validate_row(raw: &RawRecord) -> Result<(), RowDefect> {
    for field in REQUIRED_FIELDS {
        if !raw.has_cell(field) {
            return Err(RowDefect::MissingField(field));
        }
    }

    for field in POSITION_FIELDS {
        let value = raw.get(field).unwrap_or_default();
        if !is_integer(value) {
            return Err(RowDefect::NotInteger {
                field,
                value: value.to_string(),
            });
        }
    }

    for field in POSITION_FIELDS {
        let value = raw.get(field).unwrap_or_default();
        // Digits too long for i64 are still far above -1 unless negative.
        let below = match value.parse::<i64>() {
            Ok(n) => n < -1,
            Err(_) => value.starts_with('-'),
        };
        if below {
            return Err(RowDefect::BelowSentinel {
                field,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}

/// Validate a tab-delimited BEDPE stream
///
/// Lines starting with `#` are skipped; the first remaining line is the
/// header. An empty stream is valid with zero rows.
pub fn validate<R: BufRead>(reader: R) -> io::Result<ValidationReport> {
    let mut records = RecordReader::skipping_comments(reader, Delimiter::Tab)?;
    let mut report = ValidationReport::default();

    while let Some(raw) = records.next_record()? {
        if let Err(defect) = validate_row(&raw) {
            report.failure = Some(ValidationFailure {
                row_index: report.valid_rows,
                line: raw.line(),
                row: raw
                    .iter()
                    .map(|(c, v)| (c.to_string(), v.to_string()))
                    .collect(),
                defect,
            });
            break;
        }
        report.valid_rows += 1;
    }

    info!(
        "validated {} rows ({})",
        report.valid_rows,
        if report.is_valid() { "valid" } else { "invalid" }
    );
    Ok(report)
}

/// Open `input` and run [`validate`] on it
pub fn validate_source(input: &InputSource) -> io::Result<ValidationReport> {
    info!("validating {}", input.describe());
    validate(input.open()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "chrom1\tstart1\tend1\tstrand1\tchrom2\tstart2\tend2\tstrand2\tname\tscore\n";

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("-1"));
        assert!(is_integer("+42"));
        assert!(!is_integer(""));
        assert!(!is_integer("-"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer("--1"));
        assert!(!is_integer(" 1"));
    }

    #[test]
    fn test_valid_stream() {
        let data = format!(
            "{}chr1\t10\t11\t+\tchr2\t20\t21\t-\tA-B\t0\nchr1\t-1\t-1\t.\tchr2\t5\t6\t.\tC-D\t0\n",
            HEADER
        );
        let report = validate(data.as_bytes()).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.valid_rows, 2);
    }

    #[test]
    fn test_missing_field() {
        let data = "chrom1\tstart1\tend1\tchrom2\tstart2\nchr1\t1\t2\tchr2\t3\n";
        let report = validate(data.as_bytes()).unwrap();
        let failure = report.failure.unwrap();
        assert_eq!(failure.row_index, 0);
        assert_eq!(failure.defect, RowDefect::MissingField("end2"));
    }

    #[test]
    fn test_not_integer_reported_before_range() {
        let data = format!("{}chr1\t-5\tx\t+\tchr2\t1\t2\t+\tA-B\t0\n", HEADER);
        let failure = validate(data.as_bytes()).unwrap().failure.unwrap();
        assert_eq!(
            failure.defect,
            RowDefect::NotInteger {
                field: "end1",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let data = format!("{}chr1\t1\t2\n", HEADER);
        let failure = validate(data.as_bytes()).unwrap().failure.unwrap();
        assert_eq!(failure.defect, RowDefect::MissingField("chrom2"));
    }

    #[test]
    fn test_empty_cells_fail_integer_check() {
        let data = format!("{}chr1\t\t2\t+\tchr2\t1\t2\t-\tA-B\t0\n", HEADER);
        let failure = validate(data.as_bytes()).unwrap().failure.unwrap();
        assert_eq!(
            failure.defect,
            RowDefect::NotInteger {
                field: "start1",
                value: String::new()
            }
        );
    }

    #[test]
    fn test_empty_stream_is_valid() {
        let report = validate(&b""[..]).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.valid_rows, 0);
    }

    #[test]
    fn test_failure_display_lists_row() {
        let data = format!("{}chr1\t-2\t1\t+\tchr2\t1\t2\t+\tA-B\t0\n", HEADER);
        let failure = validate(data.as_bytes()).unwrap().failure.unwrap();
        let text = failure.to_string();
        assert!(text.starts_with("Invalid record at index 0 (line 2): field 'start1' is below -1: -2"));
        assert!(text.contains("\n  name: A-B"));
    }
}
