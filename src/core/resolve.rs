//! Field resolution
//!
//! Adapters compute only the fields they have rules for. Every other output
//! column is resolved the same way for all tools, in this order:
//! 1. already computed by the adapter: kept
//! 2. a raw column of exactly the same name: copied verbatim
//! 3. otherwise: the `.` placeholder

use crate::core::coords::Breakpoint;
use crate::core::raw::RawRecord;
use crate::core::record::{BedpeRecord, Schema, PLACEHOLDER};

/// Fields an adapter has computed so far, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    fields: Vec<(String, String)>,
}

impl PartialRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing an earlier value of the same name
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The core fields every adapter computes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreFields {
    pub side1: Breakpoint,
    pub side2: Breakpoint,
    pub name: String,
    pub score: String,
}

impl CoreFields {
    pub fn into_partial(self) -> PartialRecord {
        let mut record = PartialRecord::new();
        record.insert("chrom1", self.side1.chrom.clone());
        record.insert("start1", self.side1.start_field());
        record.insert("end1", self.side1.end_field());
        record.insert("strand1", self.side1.strand.as_str());
        record.insert("chrom2", self.side2.chrom.clone());
        record.insert("start2", self.side2.start_field());
        record.insert("end2", self.side2.end_field());
        record.insert("strand2", self.side2.strand.as_str());
        record.insert("name", self.name);
        record.insert("score", self.score);
        record
    }
}

/// Resolve one output column
///
/// # Examples
/// ```
/// use fusion_bedpe::core::{resolve_field, PartialRecord, RawRecord};
///
/// let so_far = PartialRecord::new().with("name", "BCR-ABL1");
/// let raw = RawRecord::from_pairs(&[("name", "ignored"), ("SpliceType", "ONLY_REF_SPLICE")]);
///
/// assert_eq!(resolve_field("name", &so_far, &raw), "BCR-ABL1");
/// assert_eq!(resolve_field("SpliceType", &so_far, &raw), "ONLY_REF_SPLICE");
/// assert_eq!(resolve_field("J_FFPM", &so_far, &raw), ".");
/// ```
pub fn resolve_field<'a>(column: &str, so_far: &'a PartialRecord, raw: &'a RawRecord) -> &'a str {
    so_far
        .get(column)
        .or_else(|| raw.get(column))
        .unwrap_or(PLACEHOLDER)
}

/// Resolve every column of `schema`, producing the finished row
///
/// Computed fields the schema does not name are dropped, as are raw columns.
pub fn resolve_record(schema: &Schema, so_far: &PartialRecord, raw: &RawRecord) -> BedpeRecord {
    let values = schema
        .columns()
        .iter()
        .map(|column| resolve_field(column, so_far, raw).to_string())
        .collect();
    BedpeRecord::from_values(values)
}
