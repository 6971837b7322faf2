//! Core BEDPE normalization functionality
//!
//! This module contains the record model, coordinate normalization,
//! raw-table reading and the shared field resolution policy.

pub mod coords;
mod error;
pub mod io;
pub mod raw;
pub mod record;
pub mod resolve;

pub use coords::{
    compound_breakpoint, one_based_position, prefix_chrom, single_position, start_stop_pair,
    Breakpoint, EndConvention, Interval, Normalized, PositionOutcome, Strand, SENTINEL,
};
pub use error::{AdapterError, AdapterResult, FusionBedpeError, Result};
pub use io::{Delimiter, InputSource, LineIterator, OutputSink, DEFAULT_BUFFER_SIZE};
pub use raw::{Header, RawRecord, RecordReader};
pub use record::{
    core_columns, with_extensions, BedpeRecord, Schema, CORE_COLUMNS, DEFAULT_SCORE, PLACEHOLDER,
};
pub use resolve::{resolve_field, resolve_record, CoreFields, PartialRecord};
