//! # demosim
//!
//! Pairwise similarity of locations by racial/ethnic population composition.
//!
//! Each location's population counts across seven race/ethnicity categories
//! form a vector; every pair of locations is compared by cosine similarity,
//! and the most and least similar pairs are reported.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! demosim --data data/demographics.csv --top-results 5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use demosim::prelude::*;
//!
//! let csv = "\
//! Location,White,Black,Hispanic,Asian,American_Indian_or_Alaska_Native,Native_Hawaiian_or_Other_Pacific_Islander,Two_Or_More_Races,Male,Female
//! A,10,2,3,1,0,0,1,8,9
//! B,20,4,6,2,0,0,2,16,18
//! C,1,30,2,0,0,0,0,16,17
//! ";
//! let table = CsvLoader::new().load_from_reader(csv.as_bytes()).unwrap();
//! let features = filter_by_race(&table).unwrap();
//! let similarities = get_state_similarities(&features);
//! let (most, least) = get_sim_info(&similarities, 1);
//!
//! assert_eq!(most, vec![SelectionPair::new("A", "B")]);
//! assert_eq!(least[0].location_b, "C");
//! ```
//!
//! ## Crate Structure
//!
//! - `demosim-core` - tables, feature selection, similarity engine, ranking
//! - `demosim-io` - CSV loading and text/JSON reports

// Re-export core types
pub use demosim_core::{
    filter_by_race, get_cos_sim, get_sim_info, get_state_similarities,
    get_state_similarities_par, try_cos_sim, Cell, DataTable, Error, FeatureTable, FeatureVector,
    Race, Result, SelectionPair, SimilarityRecord,
};

// Re-export I/O
pub use demosim_io::{CsvLoader, IoError, OutputFormat, SimilarityReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        filter_by_race, get_cos_sim, get_sim_info, get_state_similarities,
        get_state_similarities_par, Cell, CsvLoader, DataTable, FeatureTable, OutputFormat, Race,
        SelectionPair, SimilarityRecord, SimilarityReport,
    };
}
