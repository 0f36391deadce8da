//! Feature selection
//!
//! Reduces a raw [`DataTable`] to the seven race/ethnicity categories and
//! validates every cell on the way in, so everything downstream can assume
//! finite, non-negative vectors of a fixed width.

use crate::error::{Error, Result};
use crate::table::{Cell, DataTable};
use crate::vector::FeatureVector;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Recognized race/ethnicity categories, in canonical column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    White,
    Black,
    Hispanic,
    Asian,
    AmericanIndianOrAlaskaNative,
    NativeHawaiianOrOtherPacificIslander,
    TwoOrMoreRaces,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::White,
        Race::Black,
        Race::Hispanic,
        Race::Asian,
        Race::AmericanIndianOrAlaskaNative,
        Race::NativeHawaiianOrOtherPacificIslander,
        Race::TwoOrMoreRaces,
    ];

    /// Exact column header used in input tables
    pub fn column_name(self) -> &'static str {
        match self {
            Race::White => "White",
            Race::Black => "Black",
            Race::Hispanic => "Hispanic",
            Race::Asian => "Asian",
            Race::AmericanIndianOrAlaskaNative => "American_Indian_or_Alaska_Native",
            Race::NativeHawaiianOrOtherPacificIslander => {
                "Native_Hawaiian_or_Other_Pacific_Islander"
            }
            Race::TwoOrMoreRaces => "Two_Or_More_Races",
        }
    }

    pub fn column_names() -> Vec<String> {
        Self::ALL.iter().map(|r| r.column_name().to_string()).collect()
    }
}

/// Locations in row order, each mapped to its feature vector
#[derive(Debug, Clone)]
pub struct FeatureTable {
    columns: Vec<String>,
    ids: Vec<String>,
    vectors: AHashMap<String, FeatureVector>,
}

impl FeatureTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            ids: Vec::new(),
            vectors: AHashMap::new(),
        }
    }

    /// Append a location. Values must match the column count and be
    /// finite and non-negative.
    pub fn push(&mut self, id: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let id = id.into();
        if values.len() != self.columns.len() {
            return Err(Error::InvalidDimension {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        for (column, &value) in self.columns.iter().zip(&values) {
            if let Some(reason) = invalid_reason(value) {
                return Err(Error::InvalidVector {
                    location: id,
                    column: column.clone(),
                    reason,
                });
            }
        }
        if self.vectors.contains_key(&id) {
            return Err(Error::DuplicateLocation(id));
        }
        self.vectors.insert(id.clone(), FeatureVector::new(values));
        self.ids.push(id);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Location ids in original row order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn get(&self, id: &str) -> Option<&FeatureVector> {
        self.vectors.get(id)
    }

    /// Rows in original order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureVector)> {
        self.ids
            .iter()
            .map(move |id| (id.as_str(), &self.vectors[id]))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn invalid_reason(value: f64) -> Option<String> {
    if !value.is_finite() {
        Some(format!("{} is not a finite number", value))
    } else if value < 0.0 {
        Some(format!("{} is negative", value))
    } else {
        None
    }
}

/// Keep only the race/ethnicity columns, in canonical order.
///
/// Missing cells become 0. All absent columns are reported together;
/// textual, negative or non-finite cells are rejected.
pub fn filter_by_race(table: &DataTable) -> Result<FeatureTable> {
    let mut missing = Vec::new();
    let mut indices = Vec::with_capacity(Race::ALL.len());
    for race in Race::ALL {
        match table.column_index(race.column_name()) {
            Some(i) => indices.push(i),
            None => missing.push(race.column_name().to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(Error::MissingColumn(missing));
    }

    let columns = Race::column_names();
    let mut features = FeatureTable::new(columns);
    for (id, row) in table.iter() {
        let mut values = Vec::with_capacity(indices.len());
        for (race, &i) in Race::ALL.iter().zip(&indices) {
            let value = match &row[i] {
                Cell::Number(n) => *n,
                Cell::Missing => 0.0,
                Cell::Text(text) => {
                    return Err(Error::InvalidVector {
                        location: id.to_string(),
                        column: race.column_name().to_string(),
                        reason: format!("{:?} is not numeric", text),
                    });
                }
            };
            values.push(value);
        }
        features.push(id, values)?;
    }

    let empty = features.iter().filter(|(_, v)| v.is_zero()).count();
    if empty > 0 {
        warn!(
            locations = empty,
            "locations with no population in any category score 0.0 against every other location"
        );
    }

    debug!(
        locations = features.len(),
        dropped_columns = table.columns().len() - Race::ALL.len(),
        "filtered table to race columns"
    );
    Ok(features)
}
