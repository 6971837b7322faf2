//! Raw records from a tool's native table
//!
//! A [`RecordReader`] takes the first line as the header and yields one
//! [`RawRecord`] per following non-empty line. Rows shorter than the header
//! read their missing trailing cells as empty strings; cells past the header
//! are dropped.

use crate::core::error::{AdapterError, AdapterResult};
use crate::core::io::{Delimiter, LineIterator};
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::rc::Rc;

/// Column names of an input table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    /// Build a header; for repeated names the first occurrence wins
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self { names, index }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }
}

/// One row of a tool's table, keyed by header names
#[derive(Debug, Clone)]
pub struct RawRecord {
    header: Rc<Header>,
    values: Vec<String>,
    /// Cells the input line actually carried, before padding
    present: usize,
    line: usize,
}

impl RawRecord {
    /// Build a record; `values` is padded or truncated to the header length
    pub fn new(header: Rc<Header>, mut values: Vec<String>, line: usize) -> Self {
        let present = values.len().min(header.len());
        values.resize(header.len(), String::new());
        Self {
            header,
            values,
            present,
            line,
        }
    }

    /// Build a one-off record from `(column, value)` pairs
    ///
    /// # Examples
    /// ```
    /// use fusion_bedpe::core::RawRecord;
    ///
    /// let raw = RawRecord::from_pairs(&[("up_chr", "chr1"), ("up_Genome_pos", "100")]);
    /// assert_eq!(raw.get("up_chr"), Some("chr1"));
    /// assert_eq!(raw.get("dw_chr"), None);
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let header = Header::new(pairs.iter().map(|(k, _)| k.to_string()).collect());
        let values = pairs.iter().map(|(_, v)| v.to_string()).collect();
        Self::new(Rc::new(header), values, 1)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// 1-based line number in the input
    pub fn line(&self) -> usize {
        self.line
    }

    /// Value of a column, if the header has it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.header
            .position(column)
            .map(|i| self.values[i].as_str())
    }

    /// Whether the header names `column` and the line reached that cell
    pub fn has_cell(&self, column: &str) -> bool {
        self.header
            .position(column)
            .map_or(false, |i| i < self.present)
    }

    /// Value of a column the caller cannot do without
    pub fn require(&self, column: &str) -> AdapterResult<&str> {
        self.get(column)
            .ok_or_else(|| AdapterError::missing_column(column, self.line))
    }

    /// `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Streaming reader of header + rows
pub struct RecordReader<R: BufRead> {
    lines: LineIterator<R>,
    header: Rc<Header>,
    delimiter: Delimiter,
    skip_comments: bool,
    line_number: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// Reader that treats every line, `#`-prefixed or not, as content
    ///
    /// Several tools start their header with `#` (`#FusionName`, `#id`), so
    /// comment skipping is opt-in.
    pub fn new(reader: R, delimiter: Delimiter) -> io::Result<Self> {
        Self::build(reader, delimiter, false)
    }

    /// Reader that drops lines starting with `#` before they are parsed
    ///
    /// Only zero-length lines count as blank here; a line of spaces or tabs
    /// is a row of empty cells.
    pub fn skipping_comments(reader: R, delimiter: Delimiter) -> io::Result<Self> {
        Self::build(reader, delimiter, true)
    }

    fn build(reader: R, delimiter: Delimiter, skip_comments: bool) -> io::Result<Self> {
        let mut this = Self {
            lines: LineIterator::new(reader),
            header: Rc::new(Header::default()),
            delimiter,
            skip_comments,
            line_number: 0,
        };
        if let Some(names) = this.next_cells()? {
            this.header = Rc::new(Header::new(names));
        }
        Ok(this)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Line number of the most recently read line
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Cells of the next content line, or None at EOF
    fn next_cells(&mut self) -> io::Result<Option<Vec<String>>> {
        loop {
            let line = match self.lines.next_line() {
                None => return Ok(None),
                Some(line) => line?,
            };
            self.line_number += 1;

            let blank = if self.skip_comments {
                line.is_empty()
            } else {
                line.trim().is_empty()
            };
            if blank || (self.skip_comments && line.starts_with('#')) {
                continue;
            }
            return Ok(Some(self.delimiter.split(line)));
        }
    }

    /// Read the next data row
    pub fn next_record(&mut self) -> io::Result<Option<RawRecord>> {
        Ok(self
            .next_cells()?
            .map(|values| RawRecord::new(Rc::clone(&self.header), values, self.line_number)))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = io::Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
