//! # demosim Core
//!
//! Similarity of locations by racial/ethnic population composition.
//!
//! The pipeline runs strictly one way, each stage a pure function of its input:
//!
//! - [`filter_by_race`] - raw [`DataTable`] to a validated [`FeatureTable`]
//! - [`get_state_similarities`] - cosine similarity of every location pair,
//!   most similar first
//! - [`get_sim_info`] - the top-N most and least similar pairs
//!
//! ## Example
//!
//! ```rust
//! use demosim_core::{filter_by_race, get_sim_info, get_state_similarities, Cell, DataTable, Race};
//!
//! let mut table = DataTable::new("Location", Race::column_names()).unwrap();
//! table.push_row("A", vec![Cell::Number(1.0); 7]).unwrap();
//! table.push_row("B", vec![Cell::Number(2.0); 7]).unwrap();
//! table.push_row("C", vec![Cell::Missing; 7]).unwrap();
//!
//! let features = filter_by_race(&table).unwrap();
//! let similarities = get_state_similarities(&features);
//! assert_eq!(similarities.len(), 3);
//!
//! let (most, least) = get_sim_info(&similarities, 1);
//! assert_eq!(most[0].location_a, "A");
//! assert_eq!(least[0].location_b, "C");
//! ```

pub mod error;
pub mod features;
pub mod rank;
pub mod similarity;
pub mod table;
pub mod vector;

/// Dot product and norm kernels
pub mod simd;

pub use error::{Error, Result};
pub use features::{filter_by_race, FeatureTable, Race};
pub use rank::{get_sim_info, SelectionPair};
pub use similarity::{
    get_cos_sim, get_state_similarities, get_state_similarities_par, pair_count, pair_indices,
    try_cos_sim, PairIndices, SimilarityRecord,
};
pub use table::{Cell, DataTable};
pub use vector::FeatureVector;
