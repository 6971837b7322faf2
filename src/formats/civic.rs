//! CIViC variant export adapter
//!
//! Each side is a `chromosome`/`start`/`stop` span. CIViC records carry no
//! strand, and the name is built from the two representative transcripts.

use super::{fixed_columns, fusion_name, FusionAdapter, Tool};
use crate::core::{
    prefix_chrom, start_stop_pair, AdapterResult, Breakpoint, CoreFields, Header, PartialRecord,
    RawRecord, Strand, DEFAULT_SCORE,
};

pub const CHROMOSOME: &str = "chromosome";
pub const START: &str = "start";
pub const STOP: &str = "stop";
pub const CHROMOSOME_2: &str = "chromosome2";
pub const START_2: &str = "start2";
pub const STOP_2: &str = "stop2";
pub const TRANSCRIPT: &str = "representative_transcript";
pub const TRANSCRIPT_2: &str = "representative_transcript2";

pub const EXTENSION_COLUMNS: [&str; 14] = [
    "ensembl_version",
    "entrez_id",
    "gene",
    "hgvs_expressions",
    "last_review_date",
    "reference_bases",
    "reference_build",
    "summary",
    "variant",
    "variant_bases",
    "variant_civic_url",
    "variant_groups",
    "variant_id",
    "variant_types",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Civic;

impl Civic {
    fn side(raw: &RawRecord, chrom: &str, start: &str, stop: &str) -> AdapterResult<Breakpoint> {
        Ok(Breakpoint::new(
            prefix_chrom(raw.require(chrom)?),
            start_stop_pair(raw.require(start)?, raw.require(stop)?),
            Strand::Unknown,
        ))
    }
}

impl FusionAdapter for Civic {
    fn tool(&self) -> Tool {
        Tool::Civic
    }

    fn extension_columns(&self, _header: &Header) -> Vec<String> {
        fixed_columns(&EXTENSION_COLUMNS)
    }

    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord> {
        let core = CoreFields {
            side1: Self::side(raw, CHROMOSOME, START, STOP)?,
            side2: Self::side(raw, CHROMOSOME_2, START_2, STOP_2)?,
            name: fusion_name(raw.require(TRANSCRIPT)?, raw.require(TRANSCRIPT_2)?),
            score: DEFAULT_SCORE.to_string(),
        };
        Ok(core.into_partial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawRecord {
        RawRecord::from_pairs(&[
            ("gene", "ALK"),
            ("entrez_id", "238"),
            ("variant", "EML4-ALK"),
            ("chromosome", "2"),
            ("start", "42396490"),
            ("stop", "42559688"),
            ("chromosome2", "2"),
            ("start2", "29415640"),
            ("stop2", "29446394"),
            ("representative_transcript", "ENST00000318522.5"),
            ("representative_transcript2", "ENST00000389048.3"),
            ("reference_build", "GRCh37"),
            ("variant_id", "499"),
        ])
    }

    #[test]
    fn test_map_record() {
        let schema = Civic.schema(&Header::default());
        let record = Civic.map_record(&raw(), &schema).unwrap();

        assert_eq!(record.len(), 24);
        assert_eq!(
            record.core(),
            &[
                "chr2", "42396490", "42559688", ".", "chr2", "29415640", "29446394", ".",
                "ENST00000318522.5-ENST00000389048.3", "0"
            ]
        );
        assert_eq!(record.field(&schema, "gene"), Some("ALK"));
        assert_eq!(record.field(&schema, "reference_build"), Some("GRCh37"));
        assert_eq!(record.field(&schema, "summary"), Some("."));
    }

    #[test]
    fn test_second_partner_uses_its_own_chromosome() {
        let raw = RawRecord::from_pairs(&[
            ("chromosome", "9"),
            ("start", "1"),
            ("stop", "2"),
            ("chromosome2", "22"),
            ("start2", ""),
            ("stop2", ""),
            ("representative_transcript", "T1"),
            ("representative_transcript2", ""),
        ]);
        let partial = Civic.core_fields(&raw).unwrap();
        assert_eq!(partial.get("chrom1"), Some("chr9"));
        assert_eq!(partial.get("chrom2"), Some("chr22"));
        assert_eq!(partial.get("start2"), Some("-1"));
        assert_eq!(partial.get("end2"), Some("-1"));
        assert_eq!(partial.get("name"), Some("T1-"));
    }
}
