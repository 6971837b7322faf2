//! ChimerDB adapter
//!
//! ChimerDB exports are comma-separated. Head (`H_*`) and tail (`T_*`)
//! partners each report a single 0-based position. The oncogene and tumour
//! suppressor annotations are carried under renamed extension columns.

use super::{fixed_columns, FusionAdapter, Tool};
use crate::core::{
    single_position, AdapterResult, Breakpoint, CoreFields, Delimiter, Header, PartialRecord,
    RawRecord, Strand, DEFAULT_SCORE, PLACEHOLDER,
};

pub const H_CHR: &str = "H_chr";
pub const H_POSITION: &str = "H_position";
pub const H_STRAND: &str = "H_strand";
pub const T_CHR: &str = "T_chr";
pub const T_POSITION: &str = "T_position";
pub const T_STRAND: &str = "T_strand";
pub const FUSION_PAIR: &str = "Fusion_pair";

/// `(output column, ChimerDB column)` for the renamed annotations
pub const RENAMED_COLUMNS: [(&str, &str); 2] = [
    ("oncogene", "Oncogene"),
    ("tumorsupressor", "Tumor_suppressor"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ChimerDb;

impl ChimerDb {
    fn side(raw: &RawRecord, chr: &str, pos: &str, strand: &str) -> AdapterResult<Breakpoint> {
        Ok(Breakpoint::new(
            raw.require(chr)?,
            single_position(raw.require(pos)?),
            Strand::from_token(raw.require(strand)?),
        ))
    }
}

impl FusionAdapter for ChimerDb {
    fn tool(&self) -> Tool {
        Tool::ChimerDb
    }

    fn delimiter(&self) -> Delimiter {
        Delimiter::Comma
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        let names: Vec<&str> = RENAMED_COLUMNS.iter().map(|(out, _)| *out).collect();
        fixed_columns(&names)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let core = CoreFields {
            side1: Self::side(raw, H_CHR, H_POSITION, H_STRAND)?,
            side2: Self::side(raw, T_CHR, T_POSITION, T_STRAND)?,
            name: raw.require(FUSION_PAIR)?.to_string(),
            score: DEFAULT_SCORE.to_string(),
        };

        let mut partial = core.into_partial();
        for (out, source) in RENAMED_COLUMNS {
            partial.insert(out, raw.get(source).unwrap_or(PLACEHOLDER));
        }
        Ok(partial)
    }
}
