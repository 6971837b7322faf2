//! Shared conversion pipeline
//!
//! Reads a tool's native table, maps each row through the tool's adapter and
//! writes BEDPE. Rows stream through one at a time in input order.

use crate::core::{FusionBedpeError, InputSource, OutputSink, RecordReader, Result};
use crate::formats::Tool;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Statistics for one conversion run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Data rows written
    pub total: usize,
    /// Breakpoint sides written as the `-1` sentinel
    pub sentinel_sides: usize,
}

/// Convert a tool's table read from `reader` into BEDPE on `writer`
///
/// The header row is always written, even for an input with no data rows.
/// A missing required column aborts the run at the offending row.
pub fn convert<R: BufRead, W: Write>(tool: Tool, reader: R, writer: &mut W) -> Result<ConversionStats> {
    let adapter = tool.adapter();
    let mut records = RecordReader::new(reader, adapter.delimiter())?;
    let schema = adapter.schema(records.header());
    debug!(
        "{}: {} input columns, {} output columns",
        tool,
        records.header().len(),
        schema.len()
    );

    schema.write_header(writer)?;

    let mut stats = ConversionStats::default();
    while let Some(raw) = records.next_record()? {
        let record = adapter
            .map_record(&raw, &schema)
            .map_err(|source| FusionBedpeError::Adapter {
                tool: tool.name(),
                source,
            })?;

        let sentinels = record.sentinel_sides();
        if sentinels > 0 {
            debug!("{}: line {}: {} side(s) fell back to -1", tool, raw.line(), sentinels);
        }
        stats.sentinel_sides += sentinels;
        stats.total += 1;

        record.write_to(writer)?;
    }

    writer.flush()?;
    info!(
        "{}: converted {} records ({} sentinel sides)",
        tool, stats.total, stats.sentinel_sides
    );
    Ok(stats)
}

/// Open `input` and `output` and run [`convert`] between them
pub fn convert_path(tool: Tool, input: &InputSource, output: &OutputSink) -> Result<ConversionStats> {
    info!("{}: {} -> {}", tool, input.describe(), output.describe());
    let reader = input.open()?;
    let mut writer = output.open()?;
    convert(tool, reader, &mut writer)
}
