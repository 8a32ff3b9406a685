use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A whole CSV file held in memory: the first record plus every record after it.
///
/// Cells are kept byte-for-byte as parsed; rows may be narrower or wider
/// than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// The source started with a UTF-8 byte-order mark. The parser drops it
    /// from the first header cell; writing puts it back.
    pub bom: bool,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            bom: false,
        }
    }

    #[must_use]
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// True when the source had no records at all, not even a header.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Read the entire file into memory, then parse it.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let bytes = fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded csv");
    parse_records(&bytes)
}

/// Parse CSV already held as text.
pub fn read_csv_text(text: &str) -> Result<CsvTable> {
    parse_records(text.as_bytes())
}

fn parse_records(bytes: &[u8]) -> Result<CsvTable> {
    let bom = bytes.starts_with(UTF8_BOM);
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);
    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => record
            .map_err(|source| IngestError::Parse { record: 1, source })?
            .iter()
            .map(str::to_string)
            .collect(),
        None => return Ok(CsvTable::default().with_bom(bom)),
    };
    let mut rows = Vec::new();
    for (index, record) in records.enumerate() {
        let record = record.map_err(|source| IngestError::Parse {
            record: index as u64 + 2,
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(columns = ?headers, rows = rows.len(), bom, "parsed csv");
    Ok(CsvTable { headers, rows, bom })
}

/// Write the header followed by every row to `path`, replacing any existing file.
pub fn write_csv_table(path: &Path, table: &CsvTable) -> Result<()> {
    let file = fs::File::create(path).map_err(|source| IngestError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, table)?;
    debug!(path = %path.display(), rows = table.rows.len(), "wrote csv");
    Ok(())
}

/// Write the table to any sink. Fields are quoted only when needed and
/// records end in CRLF.
pub fn write_csv_to<W: Write>(mut sink: W, table: &CsvTable) -> Result<()> {
    if table.bom {
        sink.write_all(UTF8_BOM)?;
    }
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(sink);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
