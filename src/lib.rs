//! FusionBedpe - normalize gene-fusion caller output to BEDPE
//!
//! Each supported fusion caller or database writes its own table layout. This
//! crate maps every one of them onto a single BEDPE layout: ten core columns
//! (both breakpoints, a name and a score) followed by per-tool extension
//! columns. Unparseable positions become the `-1` sentinel instead of
//! aborting the run. A validator checks the breakpoint columns of any BEDPE
//! stream.
//!
//! # Example
//!
//! ```
//! use fusion_bedpe::{convert, validate, Tool};
//!
//! let input = "#FusionName\tLeftBreakpoint\tRightBreakpoint\n\
//!              BCR--ABL1\tchr22:23632600:+\tchr9:130854064:+\n";
//! let mut out = Vec::new();
//! let stats = convert(Tool::StarFusion, input.as_bytes(), &mut out).unwrap();
//! assert_eq!(stats.total, 1);
//!
//! let report = validate(out.as_slice()).unwrap();
//! assert!(report.is_valid());
//! ```

pub mod core;
pub mod formats;
pub mod pipeline;
pub mod validate;

// Re-export commonly used types
pub use self::core::{
    AdapterError, BedpeRecord, Breakpoint, FusionBedpeError, InputSource, OutputSink,
    RawRecord, Schema, Strand,
};
pub use formats::{FusionAdapter, Tool};
pub use pipeline::{convert, convert_path, ConversionStats};
pub use validate::{validate, validate_source, ValidationFailure, ValidationReport};
