//! JAFFA adapter
//!
//! JAFFA writes quoted CSV. Each side is a single 0-based base position, and
//! the fusion is named `GENE1:GENE2` in the `fusion genes` column.

use super::{fixed_columns, FusionAdapter, Tool};
use crate::core::{
    single_position, AdapterResult, Breakpoint, CoreFields, Delimiter, Header, PartialRecord,
    RawRecord, Strand, DEFAULT_SCORE,
};

pub const CHROM_1: &str = "chrom1";
pub const BASE_1: &str = "base1";
pub const STRAND_1: &str = "strand1";
pub const CHROM_2: &str = "chrom2";
pub const BASE_2: &str = "base2";
pub const STRAND_2: &str = "strand2";
pub const FUSION_GENES: &str = "fusion genes";

/// Extension column naming the caller
pub const PROGRAM: &str = "program";
pub const PROGRAM_NAME: &str = "jaffa";

pub const EXTENSION_COLUMNS: [&str; 12] = [
    PROGRAM,
    "sample",
    "gap (kb)",
    "spanning pairs",
    "spanning reads",
    "inframe",
    "aligns",
    "rearrangement",
    "contig",
    "contig break",
    "classification",
    "known",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Jaffa;

impl Jaffa {
    fn side(raw: &RawRecord, chrom: &str, base: &str, strand: &str) -> AdapterResult<Breakpoint> {
        // Older JAFFA releases have no strand columns.
        let strand = raw.get(strand).map(Strand::from_token).unwrap_or_default();
        Ok(Breakpoint::new(
            raw.require(chrom)?,
            single_position(raw.require(base)?),
            strand,
        ))
    }
}

impl FusionAdapter for Jaffa {
    fn tool(&self) -> Tool {
        Tool::Jaffa
    }

    fn delimiter(&self) -> Delimiter {
        Delimiter::Comma
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let core = CoreFields {
            side1: Self::side(raw, CHROM_1, BASE_1, STRAND_1)?,
            side2: Self::side(raw, CHROM_2, BASE_2, STRAND_2)?,
            name: raw.require(FUSION_GENES)?.trim().replace(':', "-"),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial().with(PROGRAM, PROGRAM_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_record() {
        let raw = RawRecord::from_pairs(&[
            ("sample", "MCF7"),
            ("fusion genes", "BCAS4:BCAS3"),
            ("chrom1", "chr20"),
            ("base1", "49411710"),
            ("strand1", "+"),
            ("chrom2", "chr17"),
            ("base2", "59445688"),
            ("strand2", "+"),
            ("spanning reads", "208"),
            ("classification", "HighConfidence"),
        ]);
        let schema = Jaffa.schema(raw.header());
        let record = Jaffa.map_record(&raw, &schema).unwrap();

        assert_eq!(record.len(), 22);
        assert_eq!(
            record.core(),
            &["chr20", "49411710", "49411711", "+", "chr17", "59445688", "59445689", "+", "BCAS4-BCAS3", "0"]
        );
        assert_eq!(record.field(&schema, "program"), Some("jaffa"));
        assert_eq!(record.field(&schema, "sample"), Some("MCF7"));
        assert_eq!(record.field(&schema, "spanning reads"), Some("208"));
        assert_eq!(record.field(&schema, "known"), Some("."));
    }

    #[test]
    fn test_missing_strand_columns() {
        let raw = RawRecord::from_pairs(&[
            ("fusion genes", "A:B"),
            ("chrom1", "chr1"),
            ("base1", "5"),
            ("chrom2", "chr2"),
            ("base2", "x"),
        ]);
        let partial = Jaffa.core_fields(&raw).unwrap();
        assert_eq!(partial.get("strand1"), Some("."));
        assert_eq!(partial.get("strand2"), Some("."));
        assert_eq!(partial.get("start2"), Some("-1"));
    }
}
