//! PanCan fusion database adapter
//!
//! Each partner is a whole gene span (`gene_A_start`/`gene_A_end`) with an
//! integer-coded strand.

use super::{fixed_columns, fusion_name, FusionAdapter, Tool};
use crate::core::{
    prefix_chrom, start_stop_pair, AdapterResult, Breakpoint, CoreFields, Header, PartialRecord,
    RawRecord, Strand, DEFAULT_SCORE,
};

pub const A_CHR: &str = "A_chr";
pub const A_START: &str = "gene_A_start";
pub const A_END: &str = "gene_A_end";
pub const A_STRAND: &str = "A_strand";
pub const GENE_A: &str = "Gene_A";
pub const B_CHR: &str = "B_chr";
pub const B_START: &str = "gene_B_start";
pub const B_END: &str = "gene_B_end";
pub const B_STRAND: &str = "B_strand";
pub const GENE_B: &str = "Gene_B";

pub const EXTENSION_COLUMNS: [&str; 17] = [
    "WGS",
    "Evalue",
    "sampleId",
    "Junction_B",
    "Junction_A",
    "id",
    "centrality",
    "Discordant_n",
    "frame",
    "phos_A",
    "phos_B",
    "tier",
    "ubiq_A",
    "ubiq_B",
    "Cancer",
    "perfectJSR_n",
    "JSR_n",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PanCan;

impl PanCan {
    fn side(
        raw: &RawRecord,
        chr: &str,
        start: &str,
        end: &str,
        strand: &str,
    ) -> AdapterResult<Breakpoint> {
        Ok(Breakpoint::new(
            prefix_chrom(raw.require(chr)?),
            start_stop_pair(raw.require(start)?, raw.require(end)?),
            Strand::from_int_code(raw.require(strand)?),
        ))
    }
}

impl FusionAdapter for PanCan {
    fn tool(&self) -> Tool {
        Tool::PanCan
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let core = CoreFields {
            side1: Self::side(raw, A_CHR, A_START, A_END, A_STRAND)?,
            side2: Self::side(raw, B_CHR, B_START, B_END, B_STRAND)?,
            name: fusion_name(raw.require(GENE_A)?, raw.require(GENE_B)?),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial())
    }
}
