//! STAR-Fusion adapter
//!
//! Breakpoints are compound `chrom:pos:strand` tokens with 1-based positions.
//! The end field keeps the position token as STAR-Fusion wrote it.

use super::{fixed_columns, FusionAdapter, Tool};
use crate::core::{
    compound_breakpoint, AdapterResult, CoreFields, EndConvention, Header, PartialRecord,
    RawRecord, DEFAULT_SCORE,
};

pub const FUSION_NAME: &str = "#FusionName";
pub const LEFT_BREAKPOINT: &str = "LeftBreakpoint";
pub const RIGHT_BREAKPOINT: &str = "RightBreakpoint";

pub const EXTENSION_COLUMNS: [&str; 12] = [
    "JunctionReadCount",
    "SpanningFragCount",
    "SpliceType",
    "LeftGene",
    "RightGene",
    "LargeAnchorSupport",
    "LeftBreakDinuc",
    "LeftBreakEntropy",
    "RightBreakDinuc",
    "RightBreakEntropy",
    "J_FFPM",
    "S_FFPM",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StarFusion;

impl FusionAdapter for StarFusion {
    fn tool(&self) -> Tool {
        Tool::StarFusion
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let side1 = compound_breakpoint(raw.require(LEFT_BREAKPOINT)?, EndConvention::Verbatim);
        let side2 = compound_breakpoint(raw.require(RIGHT_BREAKPOINT)?, EndConvention::Verbatim);

        let core = CoreFields {
            side1,
            side2,
            name: raw.require(FUSION_NAME)?.to_string(),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial())
    }
}
