//! Raw input tables
//!
//! A [`DataTable`] is the loosely typed table handed over by a data loader:
//! one row per location, any number of named columns, cells that may be
//! numeric, textual or missing. Row order is preserved exactly as pushed,
//! because pair enumeration and tie-breaking downstream depend on it.

use crate::error::{Error, Result};
use ahash::AHashMap;

/// A single cell of a raw table
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Missing, Cell::Number)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// Table indexed by location identifier
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    index_name: String,
    columns: Vec<String>,
    column_lookup: AHashMap<String, usize>,
    ids: Vec<String>,
    row_lookup: AHashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Create an empty table. Column names must be unique.
    pub fn new(index_name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let mut column_lookup = AHashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if column_lookup.insert(name.clone(), i).is_some() {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self {
            index_name: index_name.into(),
            columns,
            column_lookup,
            ids: Vec::new(),
            row_lookup: AHashMap::new(),
            rows: Vec::new(),
        })
    }

    /// Append a row. The cell count must match the column count.
    pub fn push_row(&mut self, id: impl Into<String>, cells: Vec<Cell>) -> Result<()> {
        let id = id.into();
        if cells.len() != self.columns.len() {
            return Err(Error::InvalidRow {
                location: id,
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        if self.row_lookup.contains_key(&id) {
            return Err(Error::DuplicateLocation(id));
        }
        self.row_lookup.insert(id.clone(), self.rows.len());
        self.ids.push(id);
        self.rows.push(cells);
        Ok(())
    }

    /// Add a column holding the row-wise sum of `sources`; missing and
    /// non-numeric cells count as zero.
    pub fn add_sum_column(&mut self, name: impl Into<String>, sources: &[&str]) -> Result<()> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(Error::DuplicateColumn(name));
        }
        let indices = sources
            .iter()
            .map(|source| self.column_index(source).ok_or_else(|| source.to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|missing| Error::MissingColumn(vec![missing]))?;

        for row in &mut self.rows {
            let total: f64 = indices
                .iter()
                .map(|&i| row[i].as_number().unwrap_or(0.0))
                .sum();
            row.push(Cell::Number(total));
        }

        self.column_lookup.insert(name.clone(), self.columns.len());
        self.columns.push(name);
        Ok(())
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_lookup.contains_key(name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_lookup.get(name).copied()
    }

    /// Location ids in row order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn row(&self, id: &str) -> Option<&[Cell]> {
        self.row_lookup.get(id).map(|&i| self.rows[i].as_slice())
    }

    pub fn value(&self, id: &str, column: &str) -> Option<&Cell> {
        let col = self.column_index(column)?;
        self.row(id).map(|row| &row[col])
    }

    /// Rows in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.ids
            .iter()
            .zip(self.rows.iter())
            .map(|(id, row)| (id.as_str(), row.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        let mut table = DataTable::new(
            "Location",
            vec!["Male".to_string(), "Female".to_string(), "Note".to_string()],
        )
        .unwrap();
        table
            .push_row("Ohio", vec![Cell::Number(10.0), Cell::Number(12.0), Cell::from("x")])
            .unwrap();
        table
            .push_row("Utah", vec![Cell::Number(5.0), Cell::Missing, Cell::Missing])
            .unwrap();
        table
    }

    #[test]
    fn test_row_order_and_lookup() {
        let table = sample();
        assert_eq!(table.ids(), &["Ohio".to_string(), "Utah".to_string()]);
        assert_eq!(table.value("Utah", "Male"), Some(&Cell::Number(5.0)));
        assert_eq!(table.value("Utah", "Nope"), None);
        assert_eq!(table.value("Texas", "Male"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_push_row_rejects_bad_width() {
        let mut table = sample();
        let err = table.push_row("Iowa", vec![Cell::Number(1.0)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRow {
                location: "Iowa".to_string(),
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn test_push_row_rejects_duplicate() {
        let mut table = sample();
        let err = table
            .push_row("Ohio", vec![Cell::Number(1.0), Cell::Number(1.0), Cell::Missing])
            .unwrap_err();
        assert_eq!(err, Error::DuplicateLocation("Ohio".to_string()));
    }

    #[test]
    fn test_add_sum_column() {
        let mut table = sample();
        table.add_sum_column("total", &["Male", "Female"]).unwrap();
        assert!(table.has_column("total"));
        assert_eq!(table.value("Ohio", "total"), Some(&Cell::Number(22.0)));
        assert_eq!(table.value("Utah", "total"), Some(&Cell::Number(5.0)));
    }

    #[test]
    fn test_add_sum_column_missing_source() {
        let mut table = sample();
        let err = table.add_sum_column("total", &["Male", "Other"]).unwrap_err();
        assert_eq!(err, Error::MissingColumn(vec!["Other".to_string()]));
        assert!(!table.has_column("total"));
    }

    #[test]
    fn test_new_rejects_duplicate_column() {
        let err = DataTable::new(
            "Location",
            vec!["White".to_string(), "Black".to_string(), "White".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, Error::DuplicateColumn("White".to_string()));
    }

    #[test]
    fn test_add_sum_column_rejects_existing_name() {
        let mut table = sample();
        table.add_sum_column("total", &["Male", "Female"]).unwrap();
        let err = table.add_sum_column("total", &["Male"]).unwrap_err();
        assert_eq!(err, Error::DuplicateColumn("total".to_string()));
        assert_eq!(table.columns().len(), 4);
        assert_eq!(table.value("Ohio", "total"), Some(&Cell::Number(22.0)));
    }
}
