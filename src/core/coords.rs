//! Coordinate normalization
//!
//! Converts each tool's position and strand encoding into BEDPE's half-open
//! `(start, end)` pair and `{+, -, .}` strand. No rule here ever fails: a
//! position that cannot be read becomes the sentinel pair `(-1, -1)` for that
//! breakpoint side only, and the outcome says which of the two happened.
//!
//! The supported shapes are:
//! 1. Compound breakpoint `chrom:position:strand`, 1-based
//! 2. A single 1-based position
//! 3. A single 0-based position (`Genome_pos` style)
//! 4. A separate start/stop pair
//! 5. Integer-coded strands (`1` / `-1`)

use crate::core::record::PLACEHOLDER;

/// Value written for an unparseable position
pub const SENTINEL: i64 = -1;

/// Half-open genomic interval on one breakpoint side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// The `(-1, -1)` pair
    pub const SENTINEL: Interval = Interval {
        start: SENTINEL,
        end: SENTINEL,
    };

    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// How a position was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionOutcome {
    /// The source value was a usable integer
    Parsed,
    /// The source value was unusable and the sentinel was substituted
    Sentinel,
}

/// Result of normalizing one side's position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub interval: Interval,
    pub outcome: PositionOutcome,
}

impl Normalized {
    pub const SENTINEL: Normalized = Normalized {
        interval: Interval::SENTINEL,
        outcome: PositionOutcome::Sentinel,
    };

    pub fn parsed(start: i64, end: i64) -> Self {
        Self {
            interval: Interval::new(start, end),
            outcome: PositionOutcome::Parsed,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.outcome == PositionOutcome::Sentinel
    }
}

/// Strand orientation, with `.` for unreported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Strand {
    Plus,
    Minus,
    #[default]
    Unknown,
}

impl Strand {
    /// Parse a textual strand token; anything but `+` or `-` is unknown
    ///
    /// # Examples
    /// ```
    /// use fusion_bedpe::core::Strand;
    /// assert_eq!(Strand::from_token("+"), Strand::Plus);
    /// assert_eq!(Strand::from_token(" - "), Strand::Minus);
    /// assert_eq!(Strand::from_token("1"), Strand::Unknown);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "+" => Strand::Plus,
            "-" => Strand::Minus,
            _ => Strand::Unknown,
        }
    }

    /// Parse strand from char
    pub fn from_char(c: char) -> Self {
        match c {
            '+' => Strand::Plus,
            '-' => Strand::Minus,
            _ => Strand::Unknown,
        }
    }

    /// Parse an integer-coded strand: `1` is plus, `-1` is minus
    ///
    /// # Examples
    /// ```
    /// use fusion_bedpe::core::Strand;
    /// assert_eq!(Strand::from_int_code("1"), Strand::Plus);
    /// assert_eq!(Strand::from_int_code("-1"), Strand::Minus);
    /// assert_eq!(Strand::from_int_code("0"), Strand::Unknown);
    /// assert_eq!(Strand::from_int_code("NA"), Strand::Unknown);
    /// ```
    pub fn from_int_code(token: &str) -> Self {
        match parse_integer(token) {
            Some(1) => Strand::Plus,
            Some(-1) => Strand::Minus,
            _ => Strand::Unknown,
        }
    }

    /// Split a two-character strand column (`+-`) into one strand per side
    ///
    /// A missing character leaves that side unknown.
    pub fn pair_from_shared(token: &str) -> (Strand, Strand) {
        let mut chars = token.trim().chars();
        let first = chars.next().map(Strand::from_char).unwrap_or_default();
        let second = chars.next().map(Strand::from_char).unwrap_or_default();
        (first, second)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Plus => "+",
            Strand::Minus => "-",
            Strand::Unknown => PLACEHOLDER,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form a compound breakpoint's end takes in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndConvention {
    /// End is the converted integer position
    Converted,
    /// End is the position token exactly as the tool wrote it (trimmed)
    Verbatim,
}

/// One normalized side of a fusion: chromosome, interval and strand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub chrom: String,
    pub position: Normalized,
    pub strand: Strand,
    verbatim_end: Option<String>,
}

impl Breakpoint {
    /// A chromosome starting with `#` becomes the placeholder, so the row can
    /// never be read back as a comment line.
    pub fn new(chrom: impl Into<String>, position: Normalized, strand: Strand) -> Self {
        let chrom: String = chrom.into();
        let chrom = if chrom.starts_with('#') {
            PLACEHOLDER.to_string()
        } else {
            chrom
        };
        Self {
            chrom,
            position,
            strand,
            verbatim_end: None,
        }
    }

    /// Emit `token` as the end value when the position parsed
    pub fn with_verbatim_end(mut self, token: &str) -> Self {
        if !self.position.is_sentinel() {
            self.verbatim_end = Some(token.trim().to_string());
        }
        self
    }

    /// Add the `chr` prefix to the chromosome
    pub fn with_chr_prefix(mut self) -> Self {
        self.chrom = prefix_chrom(&self.chrom);
        self
    }

    pub fn is_sentinel(&self) -> bool {
        self.position.is_sentinel()
    }

    pub fn start_field(&self) -> String {
        self.position.interval.start.to_string()
    }

    pub fn end_field(&self) -> String {
        match &self.verbatim_end {
            Some(token) => token.clone(),
            None => self.position.interval.end.to_string(),
        }
    }
}

/// Parse an integer token, tolerating surrounding whitespace and a sign
///
/// # Examples
/// ```
/// use fusion_bedpe::core::coords::parse_integer;
/// assert_eq!(parse_integer(" 42 "), Some(42));
/// assert_eq!(parse_integer("+7"), Some(7));
/// assert_eq!(parse_integer("-1"), Some(-1));
/// assert_eq!(parse_integer("4.2"), None);
/// assert_eq!(parse_integer(""), None);
/// ```
pub fn parse_integer(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}

/// Single 0-based position: `start = pos`, `end = pos + 1`
///
/// # Examples
/// ```
/// use fusion_bedpe::core::coords::{single_position, Interval};
/// assert_eq!(single_position("100").interval, Interval::new(100, 101));
/// assert!(single_position("abc").is_sentinel());
/// ```
pub fn single_position(token: &str) -> Normalized {
    match parse_integer(token) {
        Some(pos) if pos >= 0 => match pos.checked_add(1) {
            Some(end) => Normalized::parsed(pos, end),
            None => Normalized::SENTINEL,
        },
        _ => Normalized::SENTINEL,
    }
}

/// Single 1-based position: `start = pos - 1`, `end = pos`
///
/// # Examples
/// ```
/// use fusion_bedpe::core::coords::{one_based_position, Interval};
/// assert_eq!(one_based_position("12345").interval, Interval::new(12344, 12345));
/// assert!(one_based_position("0").is_sentinel());
/// ```
pub fn one_based_position(token: &str) -> Normalized {
    match parse_integer(token) {
        Some(pos) if pos >= 1 => Normalized::parsed(pos - 1, pos),
        _ => Normalized::SENTINEL,
    }
}

/// Separate start and stop values, used as-is when both are usable
///
/// Both must be non-negative integers with `start <= stop`; otherwise the
/// side is the sentinel pair.
pub fn start_stop_pair(start: &str, stop: &str) -> Normalized {
    match (parse_integer(start), parse_integer(stop)) {
        (Some(s), Some(e)) if s >= 0 && s <= e => Normalized::parsed(s, e),
        _ => Normalized::SENTINEL,
    }
}

/// Parse a compound `chrom:position:strand` breakpoint
///
/// The position is 1-based. A chromosome name containing `:` keeps every
/// part before the last two. With fewer than three parts the first part is
/// taken as the chromosome, the position is the sentinel and the strand is
/// unknown.
///
/// # Examples
/// ```
/// use fusion_bedpe::core::coords::{compound_breakpoint, EndConvention, Interval};
/// use fusion_bedpe::core::Strand;
///
/// let bp = compound_breakpoint("1:12345:+", EndConvention::Converted);
/// assert_eq!(bp.chrom, "1");
/// assert_eq!(bp.position.interval, Interval::new(12344, 12345));
/// assert_eq!(bp.strand, Strand::Plus);
/// ```
pub fn compound_breakpoint(token: &str, convention: EndConvention) -> Breakpoint {
    let parts: Vec<&str> = token.trim().split(':').collect();
    if parts.len() < 3 {
        return Breakpoint::new(parts[0], Normalized::SENTINEL, Strand::Unknown);
    }

    let n = parts.len();
    let chrom = parts[..n - 2].join(":");
    let pos = parts[n - 2];
    let breakpoint = Breakpoint::new(chrom, one_based_position(pos), Strand::from_token(parts[n - 1]));

    match convention {
        EndConvention::Converted => breakpoint,
        EndConvention::Verbatim => breakpoint.with_verbatim_end(pos),
    }
}

/// Add a `chr` prefix unless one is already present (case-insensitive)
///
/// An empty name, the placeholder itself or a `#`-leading name becomes the
/// placeholder.
///
/// # Examples
/// ```
/// use fusion_bedpe::core::coords::prefix_chrom;
/// assert_eq!(prefix_chrom("1"), "chr1");
/// assert_eq!(prefix_chrom("X"), "chrX");
/// assert_eq!(prefix_chrom("chr7"), "chr7");
/// assert_eq!(prefix_chrom("Chr7"), "chr7");
/// assert_eq!(prefix_chrom(""), ".");
/// assert_eq!(prefix_chrom("#1"), ".");
/// ```
pub fn prefix_chrom(chrom: &str) -> String {
    let chrom = chrom.trim();
    if chrom.is_empty() || chrom == PLACEHOLDER || chrom.starts_with('#') {
        return PLACEHOLDER.to_string();
    }
    match chrom.get(..3) {
        Some(prefix) if chrom.len() > 3 && prefix.eq_ignore_ascii_case("chr") => {
            format!("chr{}", &chrom[3..])
        }
        _ => format!("chr{}", chrom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_breakpoint_one_based() {
        let bp = compound_breakpoint("1:12345:+", EndConvention::Converted);
        assert_eq!(bp.chrom, "1");
        assert_eq!(bp.start_field(), "12344");
        assert_eq!(bp.end_field(), "12345");
        assert_eq!(bp.strand, Strand::Plus);
        assert_eq!(bp.position.outcome, PositionOutcome::Parsed);
    }

    #[test]
    fn test_compound_breakpoint_verbatim_end() {
        let bp = compound_breakpoint("chr2:+00500:-", EndConvention::Verbatim);
        assert_eq!(bp.start_field(), "499");
        assert_eq!(bp.end_field(), "+00500");
        assert_eq!(bp.strand, Strand::Minus);
    }

    #[test]
    fn test_compound_breakpoint_bad_position() {
        let bp = compound_breakpoint("chr2:abc:-", EndConvention::Verbatim);
        assert!(bp.is_sentinel());
        assert_eq!(bp.start_field(), "-1");
        assert_eq!(bp.end_field(), "-1");
        assert_eq!(bp.chrom, "chr2");
        assert_eq!(bp.strand, Strand::Minus);
    }

    #[test]
    fn test_compound_breakpoint_too_few_parts() {
        let bp = compound_breakpoint("chr2", EndConvention::Converted);
        assert_eq!(bp.chrom, "chr2");
        assert!(bp.is_sentinel());
        assert_eq!(bp.strand, Strand::Unknown);

        let bp = compound_breakpoint("", EndConvention::Converted);
        assert_eq!(bp.chrom, "");
        assert!(bp.is_sentinel());
    }

    #[test]
    fn test_compound_breakpoint_chrom_with_colon() {
        let bp = compound_breakpoint("HLA:A:100:+", EndConvention::Converted);
        assert_eq!(bp.chrom, "HLA:A");
        assert_eq!(bp.position.interval, Interval::new(99, 100));
    }

    #[test]
    fn test_hash_chromosome_becomes_placeholder() {
        let bp = Breakpoint::new("#chr1", single_position("5"), Strand::Plus);
        assert_eq!(bp.chrom, ".");
        assert_eq!(bp.with_chr_prefix().chrom, ".");

        let bp = compound_breakpoint("#1:100:+", EndConvention::Verbatim).with_chr_prefix();
        assert_eq!(bp.chrom, ".");
        assert_eq!(bp.start_field(), "99");
        assert_eq!(prefix_chrom("."), ".");
    }

    #[test]
    fn test_single_position() {
        assert_eq!(single_position("0"), Normalized::parsed(0, 1));
        assert_eq!(single_position("abc"), Normalized::SENTINEL);
        assert_eq!(single_position("-5"), Normalized::SENTINEL);
        assert_eq!(single_position(""), Normalized::SENTINEL);
        assert_eq!(single_position(&i64::MAX.to_string()), Normalized::SENTINEL);
    }

    #[test]
    fn test_start_stop_pair() {
        assert_eq!(start_stop_pair("10", "20"), Normalized::parsed(10, 20));
        assert_eq!(start_stop_pair("10", "10"), Normalized::parsed(10, 10));
        assert_eq!(start_stop_pair("20", "10"), Normalized::SENTINEL);
        assert_eq!(start_stop_pair("", "10"), Normalized::SENTINEL);
        assert_eq!(start_stop_pair("10", "NA"), Normalized::SENTINEL);
    }

    #[test]
    fn test_int_coded_strand() {
        assert_eq!(Strand::from_int_code("-1"), Strand::Minus);
        assert_eq!(Strand::from_int_code("1"), Strand::Plus);
        assert_eq!(Strand::from_int_code("2"), Strand::Unknown);
        assert_eq!(Strand::from_int_code("+"), Strand::Unknown);
    }

    #[test]
    fn test_shared_strand_pair() {
        assert_eq!(Strand::pair_from_shared("+-"), (Strand::Plus, Strand::Minus));
        assert_eq!(Strand::pair_from_shared("-"), (Strand::Minus, Strand::Unknown));
        assert_eq!(Strand::pair_from_shared(""), (Strand::Unknown, Strand::Unknown));
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Plus.to_string(), "+");
        assert_eq!(Strand::Minus.to_string(), "-");
        assert_eq!(Strand::Unknown.to_string(), ".");
    }
}
