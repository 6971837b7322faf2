//! BEDPE record model
//!
//! Every adapter emits the same ten core columns in a fixed order, followed by
//! the adapter's own extension columns. The column list is fixed once per run
//! and shared by every row, which is what keeps the output a single-header
//! table.

use log::warn;
use std::collections::HashMap;
use std::io::{self, Write};

/// The ten core BEDPE columns, in output order
pub const CORE_COLUMNS: [&str; 10] = [
    "chrom1", "start1", "end1", "strand1", "chrom2", "start2", "end2", "strand2", "name", "score",
];

/// Value written for a column with nothing to put in it
pub const PLACEHOLDER: &str = ".";

/// Score written when the tool reports no confidence value
pub const DEFAULT_SCORE: &str = "0";

/// Field delimiter of the BEDPE output
pub const OUTPUT_DELIMITER: &str = "\t";

/// Column indices of the two start fields within a record
const START1_INDEX: usize = 1;
const START2_INDEX: usize = 5;

/// The fixed core column names
pub fn core_columns() -> &'static [&'static str] {
    &CORE_COLUMNS
}

/// Full ordered column list for an adapter: core columns, then `names`
///
/// Extension names that repeat a core column or an earlier extension are
/// dropped, so the result never contains a duplicate.
///
/// # Examples
/// ```
/// use fusion_bedpe::core::record::with_extensions;
///
/// let columns = with_extensions(&["JunctionReadCount", "score", "SpliceType"]);
/// assert_eq!(columns.len(), 12);
/// assert_eq!(columns[10], "JunctionReadCount");
/// assert_eq!(columns[11], "SpliceType");
/// ```
pub fn with_extensions<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut columns: Vec<String> = CORE_COLUMNS.iter().map(|c| c.to_string()).collect();
    for name in names {
        let name = name.as_ref();
        if columns.iter().any(|c| c == name) {
            warn!("Dropping duplicate extension column '{}'", name);
            continue;
        }
        columns.push(name.to_string());
    }
    columns
}

/// Ordered output columns for one run, with name lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build the schema from an adapter's extension names
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let columns = with_extensions(extensions);
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { columns, index }
    }

    /// Schema with no extension columns
    pub fn core_only() -> Self {
        Self::new::<&str>(&[])
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Extension columns only, in declared order
    pub fn extensions(&self) -> &[String] {
        &self.columns[CORE_COLUMNS.len()..]
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column in the output row
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// Header line without the trailing newline
    pub fn header_line(&self) -> String {
        self.columns.join(OUTPUT_DELIMITER)
    }

    /// Write the header line followed by a newline
    pub fn write_header<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.header_line().as_bytes())?;
        writer.write_all(b"\n")
    }
}

/// One BEDPE row, values aligned with the [`Schema`] that built it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedpeRecord {
    values: Vec<String>,
}

impl BedpeRecord {
    pub(crate) fn from_values(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Value of a named column
    pub fn field(&self, schema: &Schema, column: &str) -> Option<&str> {
        schema.position(column).and_then(|i| self.get(i))
    }

    /// The ten core values
    pub fn core(&self) -> &[String] {
        &self.values[..CORE_COLUMNS.len().min(self.values.len())]
    }

    /// The extension values
    pub fn extensions(&self) -> &[String] {
        &self.values[CORE_COLUMNS.len().min(self.values.len())..]
    }

    /// Number of breakpoint sides (0, 1 or 2) carrying the sentinel
    pub fn sentinel_sides(&self) -> usize {
        [START1_INDEX, START2_INDEX]
            .iter()
            .filter(|&&i| self.get(i) == Some("-1"))
            .count()
    }

    /// Write the row followed by a newline
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                writer.write_all(OUTPUT_DELIMITER.as_bytes())?;
            }
            writer.write_all(value.as_bytes())?;
        }
        writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_columns_order() {
        assert_eq!(
            core_columns(),
            &["chrom1", "start1", "end1", "strand1", "chrom2", "start2", "end2", "strand2", "name", "score"]
        );
    }

    #[test]
    fn test_with_extensions_appends_in_order() {
        let columns = with_extensions(&["b", "a"]);
        assert_eq!(&columns[..10], &CORE_COLUMNS);
        assert_eq!(&columns[10..], &["b", "a"]);
    }

    #[test]
    fn test_with_extensions_drops_duplicates() {
        let columns = with_extensions(&["name", "x", "x", "strand1"]);
        assert_eq!(columns.len(), 11);
        assert_eq!(columns[10], "x");
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(&["SpliceType"]);
        assert_eq!(schema.len(), 11);
        assert_eq!(schema.position("chrom1"), Some(0));
        assert_eq!(schema.position("score"), Some(9));
        assert_eq!(schema.position("SpliceType"), Some(10));
        assert_eq!(schema.position("missing"), None);
        assert_eq!(schema.extensions(), &["SpliceType".to_string()]);
    }

    #[test]
    fn test_header_line() {
        let schema = Schema::core_only();
        assert_eq!(
            schema.header_line(),
            "chrom1\tstart1\tend1\tstrand1\tchrom2\tstart2\tend2\tstrand2\tname\tscore"
        );
    }

    #[test]
    fn test_record_write_and_sentinels() {
        let values: Vec<String> = ["chr1", "-1", "-1", ".", "chr2", "10", "11", "+", "A-B", "0"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let record = BedpeRecord::from_values(values);
        assert_eq!(record.sentinel_sides(), 1);

        let mut out = Vec::new();
        record.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chr1\t-1\t-1\t.\tchr2\t10\t11\t+\tA-B\t0\n"
        );
        assert_eq!(record.core().len(), 10);
        assert!(record.extensions().is_empty());
    }
}
