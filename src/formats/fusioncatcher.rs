//! FusionCatcher adapter
//!
//! Same compound breakpoint encoding as STAR-Fusion, but chromosomes are
//! reported without the `chr` prefix and the name is built from the two
//! gene symbol columns.

use super::{fixed_columns, fusion_name, FusionAdapter, Tool};
use crate::core::{
    compound_breakpoint, AdapterResult, CoreFields, EndConvention, Header, PartialRecord,
    RawRecord, DEFAULT_SCORE,
};

pub const FUSION_POINT_1: &str = "Fusion_point_for_gene_1(5end_fusion_partner)";
pub const FUSION_POINT_2: &str = "Fusion_point_for_gene_2(3end_fusion_partner)";
pub const GENE_1_SYMBOL: &str = "Gene_1_symbol(5end_fusion_partner)";
pub const GENE_2_SYMBOL: &str = "Gene_2_symbol(3end_fusion_partner)";

pub const EXTENSION_COLUMNS: [&str; 12] = [
    "Fusion_description",
    "Counts_of_common_mapping_reads",
    "Spanning_pairs",
    "Spanning_unique_reads",
    "Longest_anchor_found",
    "Fusion_finding_method",
    "Gene_1_id(5end_fusion_partner)",
    "Gene_2_id(3end_fusion_partner)",
    "Exon_1_id(5end_fusion_partner)",
    "Exon_2_id(3end_fusion_partner)",
    "Fusion_sequence",
    "Predicted_effect",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FusionCatcher;

impl FusionAdapter for FusionCatcher {
    fn tool(&self) -> Tool {
        Tool::FusionCatcher
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let side1 = compound_breakpoint(raw.require(FUSION_POINT_1)?, EndConvention::Verbatim)
            .with_chr_prefix();
        let side2 = compound_breakpoint(raw.require(FUSION_POINT_2)?, EndConvention::Verbatim)
            .with_chr_prefix();

        let core = CoreFields {
            side1,
            side2,
            name: fusion_name(raw.require(GENE_1_SYMBOL)?, raw.require(GENE_2_SYMBOL)?),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_record() {
        let raw = RawRecord::from_pairs(&[
            (GENE_1_SYMBOL, "BCR"),
            (GENE_2_SYMBOL, "ABL1"),
            ("Fusion_description", "known,oncogene"),
            ("Spanning_pairs", "12"),
            (FUSION_POINT_1, "22:23632600:+"),
            (FUSION_POINT_2, "9:133729451:+"),
            ("Predicted_effect", "in-frame"),
        ]);
        let schema = FusionCatcher.schema(&Header::default());
        let record = FusionCatcher.map_record(&raw, &schema).unwrap();

        assert_eq!(record.len(), 22);
        assert_eq!(
            record.core(),
            &["chr22", "23632599", "23632600", "+", "chr9", "133729450", "133729451", "+", "BCR-ABL1", "0"]
        );
        assert_eq!(record.field(&schema, "Fusion_description"), Some("known,oncogene"));
        assert_eq!(record.field(&schema, "Predicted_effect"), Some("in-frame"));
        assert_eq!(record.field(&schema, "Fusion_sequence"), Some("."));
    }

    #[test]
    fn test_malformed_point_keeps_other_side() {
        let raw = RawRecord::from_pairs(&[
            (GENE_1_SYMBOL, "A"),
            (GENE_2_SYMBOL, "B"),
            (FUSION_POINT_1, "X"),
            (FUSION_POINT_2, "1:1000:-"),
        ]);
        let partial = FusionCatcher.core_fields(&raw).unwrap();
        assert_eq!(partial.get("chrom1"), Some("chrX"));
        assert_eq!(partial.get("start1"), Some("-1"));
        assert_eq!(partial.get("strand1"), Some("."));
        assert_eq!(partial.get("start2"), Some("999"));
        assert_eq!(partial.get("strand2"), Some("-"));
    }
}
