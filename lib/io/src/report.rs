//! Presentation of similarity results

use crate::error::IoResult;
use demosim_core::{get_sim_info, SelectionPair, SimilarityRecord};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

/// Most and least similar location pairs of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub top: usize,
    pub locations: usize,
    pub comparisons: usize,
    pub most_similar: Vec<SelectionPair>,
    pub least_similar: Vec<SelectionPair>,
}

impl SimilarityReport {
    /// Build a report from a descending similarity list
    pub fn from_similarities(
        similarities: &[SimilarityRecord],
        locations: usize,
        top: usize,
    ) -> Self {
        let (most_similar, least_similar) = get_sim_info(similarities, top);
        Self {
            top,
            locations,
            comparisons: similarities.len(),
            most_similar,
            least_similar,
        }
    }

    pub fn render(&self, format: OutputFormat) -> IoResult<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!(
            "These are the {} most similar locations based on race distribution \
             (from most to least similar).\n",
            self.top
        );
        write_pairs(&mut out, &self.most_similar);
        out.push('\n');
        out.push_str(&format!(
            "These are the {} least similar locations based on race distribution \
             (from least to most similar).\n",
            self.top
        ));
        write_pairs(&mut out, &self.least_similar);
        out
    }

    pub fn render_json(&self) -> IoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn write_pairs(out: &mut String, pairs: &[SelectionPair]) {
    if pairs.is_empty() {
        out.push_str("  (none)\n");
    }
    for pair in pairs {
        out.push_str(&format!("  {}\n", pair));
    }
}
