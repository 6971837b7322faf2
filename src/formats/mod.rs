//! Fusion caller adapters
//!
//! One adapter per supported tool (STAR-Fusion, FusionCatcher, SOAPfuse,
//! FusionMap, EricScript, PanCan, CIViC, ChimerDB, JAFFA, INFUSION). Each
//! supplies only its core-field rules, its extension column list and the
//! delimiter of its native table; everything else is shared.

pub mod chimerdb;
pub mod civic;
pub mod ericscript;
pub mod fusioncatcher;
pub mod fusionmap;
pub mod infusion;
pub mod jaffa;
pub mod pancan;
pub mod soapfuse;
pub mod star_fusion;

use crate::core::{
    resolve_record, AdapterResult, BedpeRecord, Delimiter, Header, PartialRecord, RawRecord,
    Schema,
};

pub use chimerdb::ChimerDb;
pub use civic::Civic;
pub use ericscript::EricScript;
pub use fusioncatcher::FusionCatcher;
pub use fusionmap::FusionMap;
pub use infusion::Infusion;
pub use jaffa::Jaffa;
pub use pancan::PanCan;
pub use soapfuse::Soapfuse;
pub use star_fusion::StarFusion;

/// The closed set of supported tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    StarFusion,
    FusionCatcher,
    Soapfuse,
    FusionMap,
    EricScript,
    PanCan,
    Civic,
    ChimerDb,
    Jaffa,
    Infusion,
}

impl Tool {
    pub const ALL: [Tool; 10] = [
        Tool::StarFusion,
        Tool::FusionCatcher,
        Tool::Soapfuse,
        Tool::FusionMap,
        Tool::EricScript,
        Tool::PanCan,
        Tool::Civic,
        Tool::ChimerDb,
        Tool::Jaffa,
        Tool::Infusion,
    ];

    /// Command-line name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Tool::StarFusion => "star-fusion",
            Tool::FusionCatcher => "fusioncatcher",
            Tool::Soapfuse => "soapfuse",
            Tool::FusionMap => "fusionmap",
            Tool::EricScript => "ericscript",
            Tool::PanCan => "pancan",
            Tool::Civic => "civic",
            Tool::ChimerDb => "chimerdb",
            Tool::Jaffa => "jaffa",
            Tool::Infusion => "infusion",
        }
    }

    /// The adapter implementing this tool's rules
    pub fn adapter(&self) -> &'static dyn FusionAdapter {
        match self {
            Tool::StarFusion => &StarFusion,
            Tool::FusionCatcher => &FusionCatcher,
            Tool::Soapfuse => &Soapfuse,
            Tool::FusionMap => &FusionMap,
            Tool::EricScript => &EricScript,
            Tool::PanCan => &PanCan,
            Tool::Civic => &Civic,
            Tool::ChimerDb => &ChimerDb,
            Tool::Jaffa => &Jaffa,
            Tool::Infusion => &Infusion,
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps one raw record of a tool's table to one BEDPE record
pub trait FusionAdapter {
    fn tool(&self) -> Tool;

    /// Delimiter of the tool's native table
    fn delimiter(&self) -> Delimiter {
        Delimiter::Tab
    }

    /// Extension columns appended after the core columns
    ///
    /// Most tools declare a fixed list and ignore `header`.
    fn extension_columns(&self, header: &Header) -> Vec<String>;

    /// Core fields, plus any extension values the tool computes
    fn core_fields(&self, raw: &RawRecord) -> AdapterResult<PartialRecord>;

    /// Output schema for an input with this header
    fn schema(&self, header: &Header) -> Schema {
        Schema::new(&self.extension_columns(header))
    }

    /// Produce the finished BEDPE row
    fn map_record(&self, raw: &RawRecord, schema: &Schema) -> AdapterResult<BedpeRecord> {
        let so_far = self.core_fields(raw)?;
        Ok(resolve_record(schema, &so_far, raw))
    }
}

/// `gene1-gene2` fusion name
pub(crate) fn fusion_name(gene1: &str, gene2: &str) -> String {
    format!("{}-{}", gene1, gene2)
}

pub(crate) fn fixed_columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
