//! Stream construction and line splitting
//!
//! Inputs and outputs are chosen explicitly by the caller: a file path or
//! the process's standard stream. File inputs may be gzip or bzip2
//! compressed.

use memchr::memchr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for BufReader/BufWriter (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file path and/or content
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    // BZ2 magic: "BZh"
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Where rows are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Open the source as a buffered reader
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                io::stdin(),
            ))),
            InputSource::File(path) => {
                let file = File::open(path)?;
                let reader: Box<dyn BufRead> = match detect_compression(path)? {
                    CompressionFormat::Gzip => Box::new(BufReader::with_capacity(
                        DEFAULT_BUFFER_SIZE,
                        flate2::read::MultiGzDecoder::new(file),
                    )),
                    CompressionFormat::Bzip2 => Box::new(BufReader::with_capacity(
                        DEFAULT_BUFFER_SIZE,
                        bzip2::read::BzDecoder::new(file),
                    )),
                    CompressionFormat::Plain => {
                        Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
                    }
                };
                Ok(reader)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }
}

/// Where rows are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    /// Open the sink as a buffered writer
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            OutputSink::Stdout => Ok(Box::new(BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                io::stdout(),
            ))),
            OutputSink::File(path) => Ok(Box::new(BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                File::create(path)?,
            ))),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OutputSink::Stdout => "<stdout>".to_string(),
            OutputSink::File(path) => path.display().to_string(),
        }
    }
}

impl From<Option<PathBuf>> for OutputSink {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Stdout, OutputSink::File)
    }
}

/// Line iterator that reuses a buffer to avoid allocations
pub struct LineIterator<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line into the internal buffer
    /// Returns None at EOF, Some(Ok(&str)) on success, Some(Err) on error
    pub fn next_line(&mut self) -> Option<io::Result<&str>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                // Remove trailing newline
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(&self.buffer))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Field delimiter of a tool's native output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Tab-separated
    Tab,
    /// Comma-separated, with double-quoted cells
    Comma,
    /// Runs of spaces or tabs
    Whitespace,
}

impl Delimiter {
    /// Split one line into its cells
    pub fn split(&self, line: &str) -> Vec<String> {
        match self {
            Delimiter::Tab => split_on_byte(line, b'\t'),
            Delimiter::Comma => {
                if memchr(b'"', line.as_bytes()).is_some() {
                    split_quoted(line, ',')
                } else {
                    split_on_byte(line, b',')
                }
            }
            Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
        }
    }
}

fn split_on_byte(line: &str, delimiter: u8) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(16);
    let mut start = 0;
    while let Some(offset) = memchr(delimiter, &bytes[start..]) {
        fields.push(line[start..start + offset].to_string());
        start += offset + 1;
    }
    fields.push(line[start..].to_string());
    fields
}

/// Split honouring `"..."` cells, with `""` as an escaped quote
fn split_quoted(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::with_capacity(16);
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}
