//! FusionMap adapter
//!
//! FusionMap writes one `Strand` column holding both sides (`+-`), and its
//! extension columns are whatever the input carries beyond the seven columns
//! consumed here, in input order.

use super::{fusion_name, FusionAdapter, Tool};
use crate::core::{
    prefix_chrom, single_position, AdapterResult, Breakpoint, CoreFields, Header, PartialRecord,
    RawRecord, Strand, DEFAULT_SCORE,
};

pub const CHROMOSOME_1: &str = "Chromosome1";
pub const CHROMOSOME_2: &str = "Chromosome2";
pub const POSITION_1: &str = "Position1";
pub const POSITION_2: &str = "Position2";
pub const STRAND: &str = "Strand";
pub const KNOWN_GENE_1: &str = "KnownGene1";
pub const KNOWN_GENE_2: &str = "KnownGene2";

/// Columns turned into core fields and therefore not carried as extensions
pub const CONSUMED_COLUMNS: [&str; 7] = [
    CHROMOSOME_1,
    CHROMOSOME_2,
    POSITION_1,
    POSITION_2,
    STRAND,
    KNOWN_GENE_1,
    KNOWN_GENE_2,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FusionMap;

impl FusionAdapter for FusionMap {
    fn tool(&self) -> Tool {
        Tool::FusionMap
    }

    fn extension_columns(&self, header: &Header) -> Vec<String> {
        header
            .names()
            .iter()
            .filter(|name| !CONSUMED_COLUMNS.contains(&name.as_str()))
            .cloned()
            .collect()
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let (strand1, strand2) = Strand::pair_from_shared(raw.require(STRAND)?);

        let side1 = Breakpoint::new(
            prefix_chrom(raw.require(CHROMOSOME_1)?),
            single_position(raw.require(POSITION_1)?),
            strand1,
        );
        let side2 = Breakpoint::new(
            prefix_chrom(raw.require(CHROMOSOME_2)?),
            single_position(raw.require(POSITION_2)?),
            strand2,
        );

        let core = CoreFields {
            side1,
            side2,
            name: fusion_name(raw.require(KNOWN_GENE_1)?, raw.require(KNOWN_GENE_2)?),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial())
    }
}
