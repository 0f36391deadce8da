use serde::{Deserialize, Serialize};

/// The numeric demographic vector of one location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        crate::simd::dot_product_simd(&self.data, &other.data)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        crate::simd::norm_simd(&self.data)
    }

    /// True when every component is zero, i.e. no reported population
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Cosine similarity with another vector, 0.0 for zero-norm inputs
    #[inline]
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f64 {
        crate::similarity::get_cos_sim(&self.data, &other.data)
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}
