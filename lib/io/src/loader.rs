//! CSV loader for location-indexed demographic tables

use crate::error::{IoError, IoResult};
use demosim_core::{Cell, DataTable, Error};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_INDEX_COLUMN: &str = "Location";

/// Reads a CSV file with a header row into a [`DataTable`].
///
/// One column holds the location id; every other column becomes a table
/// column, with cells parsed as numbers where possible.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    index_column: String,
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            index_column: DEFAULT_INDEX_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_column(mut self, name: impl Into<String>) -> Self {
        self.index_column = name.into();
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> IoResult<DataTable> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }
        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let table = self.load_from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "loaded table"
        );
        Ok(table)
    }

    pub fn load_from_reader<R: Read>(&self, reader: R) -> IoResult<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let index = headers
            .iter()
            .position(|h| h == self.index_column)
            .ok_or_else(|| Error::MissingColumn(vec![self.index_column.clone()]))?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, h)| h.to_string())
            .collect();
        let mut table = DataTable::new(self.index_column.clone(), columns)?;

        for result in reader.records() {
            let record = result?;
            let id = record.get(index).unwrap_or_default().to_string();
            let cells = record
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, value)| parse_cell(value))
                .collect();
            table.push_row(id, cells)?;
        }

        debug!(rows = table.len(), index = %self.index_column, "parsed csv records");
        Ok(table)
    }
}

/// Empty, `NA`, `NaN` and `null` are missing; numbers may carry thousands
/// separators.
fn parse_cell(value: &str) -> Cell {
    let value = value.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case("na")
        || value.eq_ignore_ascii_case("nan")
        || value.eq_ignore_ascii_case("null")
    {
        return Cell::Missing;
    }
    if let Ok(n) = value.parse::<f64>() {
        return Cell::Number(n);
    }
    if value.contains(',') {
        if let Ok(n) = value.replace(',', "").parse::<f64>() {
            return Cell::Number(n);
        }
    }
    Cell::Text(value.to_string())
}
