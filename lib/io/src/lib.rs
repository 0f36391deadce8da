//! demosim-io - getting tables in and reports out
//!
//! - [`CsvLoader`] reads a location-indexed CSV file into a
//!   [`demosim_core::DataTable`]
//! - [`SimilarityReport`] collects pipeline results and renders them as
//!   plain text or JSON

pub mod error;
pub mod loader;
pub mod report;

pub use error::{IoError, IoResult};
pub use loader::{CsvLoader, DEFAULT_INDEX_COLUMN};
pub use report::{OutputFormat, SimilarityReport};
