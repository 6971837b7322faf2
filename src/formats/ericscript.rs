//! EricScript adapter
//!
//! Breakpoints are 1-based positions; each side carries its own strand.
//! EricScript is the one tool that reports a usable score (`EricScore`).

use super::{fixed_columns, fusion_name, FusionAdapter, Tool};
use crate::core::{
    one_based_position, AdapterResult, Breakpoint, CoreFields, Header, PartialRecord, RawRecord,
    Strand,
};

pub const CHR_1: &str = "chr1";
pub const CHR_2: &str = "chr2";
pub const BREAKPOINT_1: &str = "Breakpoint1";
pub const BREAKPOINT_2: &str = "Breakpoint2";
pub const STRAND_1: &str = "strand1";
pub const STRAND_2: &str = "strand2";
pub const GENE_NAME_1: &str = "GeneName1";
pub const GENE_NAME_2: &str = "GeneName2";
pub const ERIC_SCORE: &str = "EricScore";

pub const EXTENSION_COLUMNS: [&str; 16] = [
    "ES",
    "EnsembleGene1",
    "EnsembleGene2",
    "GJS",
    "GeneExpr1",
    "GeneExpr2",
    "GeneExpr_Fused",
    "InfoGene1",
    "InfoGene2",
    "JunctionSequence",
    "US",
    "crossingreads",
    "fusiontype",
    "homology",
    "mean.insertsize",
    "spanningreads",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EricScript;

impl EricScript {
    fn side(raw: &RawRecord, chr: &str, pos: &str, strand: &str) -> AdapterResult<Breakpoint> {
        Ok(Breakpoint::new(
            raw.require(chr)?,
            one_based_position(raw.require(pos)?),
            Strand::from_token(raw.require(strand)?),
        )
        .with_chr_prefix())
    }
}

impl FusionAdapter for EricScript {
    fn tool(&self) -> Tool {
        Tool::EricScript
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let core = CoreFields {
            side1: Self::side(raw, CHR_1, BREAKPOINT_1, STRAND_1)?,
            side2: Self::side(raw, CHR_2, BREAKPOINT_2, STRAND_2)?,
            name: fusion_name(raw.require(GENE_NAME_1)?, raw.require(GENE_NAME_2)?),
            score: raw.require(ERIC_SCORE)?.to_string(),
        };
        Ok(core.into_partial())
    }
}
