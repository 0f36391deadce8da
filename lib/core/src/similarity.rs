//! Pairwise cosine similarity between locations
//!
//! Every unordered pair of rows is scored exactly once. A pair is always
//! represented as (earlier row, later row), and pairs are produced by
//! [`pair_indices`] in canonical order: outer index ascending, then inner
//! index ascending. The final list is stable-sorted by score descending, so
//! equal scores keep that canonical order.
//!
//! All pairs are evaluated by brute force, which is O(N²) in the number of
//! locations. That is intended for tables of tens to a few hundred rows.

use crate::features::FeatureTable;
use crate::simd::{dot_product_simd, norm_simd};
use crate::vector::FeatureVector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Similarity of two locations; `location_a` precedes `location_b` in row order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRecord {
    pub location_a: String,
    pub location_b: String,
    pub score: f64,
}

impl SimilarityRecord {
    pub fn new(location_a: impl Into<String>, location_b: impl Into<String>, score: f64) -> Self {
        Self {
            location_a: location_a.into(),
            location_b: location_b.into(),
            score,
        }
    }
}

/// Cosine similarity of two vectors.
///
/// An undefined result (either vector has zero norm) is reported as 0.0,
/// the same value as fully dissimilar vectors. Vectors of different length
/// also score 0.0.
pub fn get_cos_sim(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let score = dot_product_simd(a, b) / (norm_simd(a) * norm_simd(b));
    if score.is_nan() {
        0.0
    } else {
        score
    }
}

/// Like [`get_cos_sim`], but `None` when the similarity is undefined
/// (a zero-norm vector or mismatched lengths).
pub fn try_cos_sim(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    let norms = norm_simd(a) * norm_simd(b);
    if norms == 0.0 {
        return None;
    }
    let score = dot_product_simd(a, b) / norms;
    (!score.is_nan()).then_some(score)
}

/// Number of unordered pairs among `n` items
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Iterator over index pairs `(i, j)` with `i < j`
#[derive(Debug, Clone)]
pub struct PairIndices {
    n: usize,
    i: usize,
    j: usize,
    remaining: usize,
}

/// All index pairs `(i, j)`, `i < j < n`, ordered by `i` then `j`
pub fn pair_indices(n: usize) -> PairIndices {
    PairIndices {
        n,
        i: 0,
        j: 1,
        remaining: pair_count(n),
    }
}

impl Iterator for PairIndices {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
        }
        let pair = (self.i, self.j);
        self.j += 1;
        self.remaining -= 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PairIndices {}

impl std::iter::FusedIterator for PairIndices {}

/// Score every pair of locations and sort by similarity, most similar first.
///
/// Fewer than two locations yields an empty list.
pub fn get_state_similarities(table: &FeatureTable) -> Vec<SimilarityRecord> {
    let rows: Vec<(&str, &FeatureVector)> = table.iter().collect();
    let mut records: Vec<SimilarityRecord> = pair_indices(rows.len())
        .map(|(i, j)| score_pair(rows[i], rows[j]))
        .collect();
    sort_by_score(&mut records);

    debug!(
        locations = rows.len(),
        comparisons = records.len(),
        "computed pairwise similarities"
    );
    records
}

/// Parallel [`get_state_similarities`]. Produces exactly the same list:
/// pairs are scored on the rayon pool but collected in canonical order
/// before sorting.
pub fn get_state_similarities_par(table: &FeatureTable) -> Vec<SimilarityRecord> {
    let rows: Vec<(&str, &FeatureVector)> = table.iter().collect();
    let pairs: Vec<(usize, usize)> = pair_indices(rows.len()).collect();
    let mut records: Vec<SimilarityRecord> = pairs
        .par_iter()
        .map(|&(i, j)| score_pair(rows[i], rows[j]))
        .collect();
    sort_by_score(&mut records);

    debug!(
        locations = rows.len(),
        comparisons = records.len(),
        threads = rayon::current_num_threads(),
        "computed pairwise similarities in parallel"
    );
    records
}

fn score_pair(
    (id_a, vector_a): (&str, &FeatureVector),
    (id_b, vector_b): (&str, &FeatureVector),
) -> SimilarityRecord {
    SimilarityRecord::new(id_a, id_b, vector_a.cosine_similarity(vector_b))
}

// sort_by is stable: ties keep enumeration order
fn sort_by_score(records: &mut [SimilarityRecord]) {
    records.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
