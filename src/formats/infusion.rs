//! INFUSION adapter
//!
//! Whitespace-separated table; each side is a single 0-based break position
//! and the fusion is named by its `#id`.

use super::{fixed_columns, FusionAdapter, Tool};
use crate::core::{
    single_position, AdapterResult, Breakpoint, CoreFields, Delimiter, Header, PartialRecord,
    RawRecord, Strand, DEFAULT_SCORE,
};

pub const ID: &str = "#id";
pub const REF_1: &str = "ref1";
pub const BREAK_POS_1: &str = "break_pos1";
pub const REF_2: &str = "ref2";
pub const BREAK_POS_2: &str = "break_pos2";

pub const PROGRAM: &str = "program";
pub const PROGRAM_NAME: &str = "infusion";

pub const EXTENSION_COLUMNS: [&str; 1] = [PROGRAM];

#[derive(Debug, Clone, Copy, Default)]
pub struct Infusion;

impl FusionAdapter for Infusion {
    fn tool(&self) -> Tool {
        Tool::Infusion
    }

    fn delimiter(&self) -> Delimiter {
        Delimiter::Whitespace
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let side1 = Breakpoint::new(
            raw.require(REF_1)?,
            single_position(raw.require(BREAK_POS_1)?),
            Strand::Unknown,
        );
        let side2 = Breakpoint::new(
            raw.require(REF_2)?,
            single_position(raw.require(BREAK_POS_2)?),
            Strand::Unknown,
        );

        let core = CoreFields {
            side1,
            side2,
            name: raw.require(ID)?.to_string(),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial().with(PROGRAM, PROGRAM_NAME))
    }
}
