//! Selection of the most and least similar location pairs

use crate::similarity::SimilarityRecord;
use serde::{Deserialize, Serialize};

/// A location pair with its score dropped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionPair {
    pub location_a: String,
    pub location_b: String,
}

impl SelectionPair {
    pub fn new(location_a: impl Into<String>, location_b: impl Into<String>) -> Self {
        Self {
            location_a: location_a.into(),
            location_b: location_b.into(),
        }
    }
}

impl From<&SimilarityRecord> for SelectionPair {
    fn from(record: &SimilarityRecord) -> Self {
        Self::new(record.location_a.clone(), record.location_b.clone())
    }
}

impl std::fmt::Display for SelectionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.location_a, self.location_b)
    }
}

/// Split a descending similarity list into its `top` most similar pairs
/// (most similar first) and its `top` least similar pairs (least similar
/// first).
///
/// A `top` larger than the list returns the whole list in both. The two
/// windows may overlap on short lists.
pub fn get_sim_info(
    similarities: &[SimilarityRecord],
    top: usize,
) -> (Vec<SelectionPair>, Vec<SelectionPair>) {
    let top = top.min(similarities.len());
    let most_similar = similarities[..top].iter().map(SelectionPair::from).collect();
    let least_similar = similarities[similarities.len() - top..]
        .iter()
        .rev()
        .map(SelectionPair::from)
        .collect();
    (most_similar, least_similar)
}
