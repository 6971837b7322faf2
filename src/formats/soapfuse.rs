//! SOAPfuse adapter
//!
//! Upstream (`up_*`) and downstream (`dw_*`) partners each report a single
//! 0-based genome position.

use super::{fixed_columns, fusion_name, FusionAdapter, Tool};
use crate::core::{
    single_position, AdapterResult, Breakpoint, CoreFields, Header, PartialRecord, RawRecord,
    Strand, DEFAULT_SCORE,
};

pub const UP_CHR: &str = "up_chr";
pub const UP_POS: &str = "up_Genome_pos";
pub const UP_STRAND: &str = "up_strand";
pub const UP_GENE: &str = "up_gene";
pub const DW_CHR: &str = "dw_chr";
pub const DW_POS: &str = "dw_Genome_pos";
pub const DW_STRAND: &str = "dw_strand";
pub const DW_GENE: &str = "dw_gene";

pub const EXTENSION_COLUMNS: [&str; 6] = [
    "up_loc",
    "dw_loc",
    "Span_reads_num",
    "Junc_reads_num",
    "Fusion_Type",
    "down_fusion_part_frame-shift_or_not",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Soapfuse;

impl Soapfuse {
    fn side(raw: &RawRecord, chr: &str, pos: &str, strand: &str) -> AdapterResult<Breakpoint> {
        Ok(Breakpoint::new(
            raw.require(chr)?,
            single_position(raw.require(pos)?),
            Strand::from_token(raw.require(strand)?),
        ))
    }
}

impl FusionAdapter for Soapfuse {
    fn tool(&self) -> Tool {
        Tool::Soapfuse
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let core = CoreFields {
            side1: Self::side(raw, UP_CHR, UP_POS, UP_STRAND)?,
            side2: Self::side(raw, DW_CHR, DW_POS, DW_STRAND)?,
            name: fusion_name(raw.require(UP_GENE)?, raw.require(DW_GENE)?),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(up_pos: &str, dw_pos: &str) -> RawRecord {
        RawRecord::from_pairs(&[
            ("up_gene", "TMPRSS2"),
            ("up_chr", "chr21"),
            ("up_strand", "-"),
            ("up_Genome_pos", up_pos),
            ("up_loc", "M5P"),
            ("dw_gene", "ERG"),
            ("dw_chr", "chr21"),
            ("dw_strand", "-"),
            ("dw_Genome_pos", dw_pos),
            ("dw_loc", "M3P"),
            ("Span_reads_num", "4"),
            ("Junc_reads_num", "9"),
            ("Fusion_Type", "INTRACHR-SS-INV"),
        ])
    }

    #[test]
    fn test_map_record() {
        let schema = Soapfuse.schema(&Header::default());
        let record = Soapfuse.map_record(&raw("42880008", "39817544"), &schema).unwrap();

        assert_eq!(record.len(), 16);
        assert_eq!(
            record.core(),
            &["chr21", "42880008", "42880009", "-", "chr21", "39817544", "39817545", "-", "TMPRSS2-ERG", "0"]
        );
        assert_eq!(record.field(&schema, "up_loc"), Some("M5P"));
        assert_eq!(record.field(&schema, "Junc_reads_num"), Some("9"));
        assert_eq!(record.field(&schema, "down_fusion_part_frame-shift_or_not"), Some("."));
    }

    #[test]
    fn test_sides_fall_back_independently() {
        let partial = Soapfuse.core_fields(&raw("abc", "10")).unwrap();
        assert_eq!(partial.get("start1"), Some("-1"));
        assert_eq!(partial.get("end1"), Some("-1"));
        assert_eq!(partial.get("start2"), Some("10"));
        assert_eq!(partial.get("end2"), Some("11"));

        let partial = Soapfuse.core_fields(&raw("10", "")).unwrap();
        assert_eq!(partial.get("start1"), Some("10"));
        assert_eq!(partial.get("start2"), Some("-1"));
    }
}
