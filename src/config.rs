use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::store::ByteSource;
use crate::table::{COL_POPULATION, FilterSelection};

/// Dashboard configuration. The dashboard variants in circulation differ
/// only in defaults like the preselected states and panel knobs, so those
/// all live here rather than in core logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Dataset CSV, relative to the data source root.
    pub dataset: String,
    /// Boundary GeoJSON, relative to the data source root.
    pub boundaries: String,
    /// States preselected when a session starts.
    pub default_states: Vec<String>,
    /// How many municipalities the ranked bar chart shows.
    pub top_n: usize,
    /// Bin count for the hospitalization-cost histogram.
    pub histogram_bins: usize,
    /// Maximum municipalities in the comparison view.
    pub comparison_limit: usize,
    /// Optional page background image; missing is non-fatal.
    pub background_image: Option<String>,
    /// Optional logo image; missing is non-fatal.
    pub logo_image: Option<String>,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            dataset: "DATASET_CLUSTERIZADO.csv".to_string(),
            boundaries: "brasil_municipios.json".to_string(),
            default_states: vec!["SP".to_string()],
            top_n: 10,
            histogram_bins: 50,
            comparison_limit: 3,
            background_image: None,
            logo_image: None,
        }
    }
}

impl DashConfig {
    /// Load a configuration file from the source. An explicitly named file
    /// that is missing or malformed is an error.
    pub fn from_source(source: &dyn ByteSource, rel: &str) -> Result<Self> {
        let bytes = source.get(rel)?;
        serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse config {rel}"))
    }

    /// The selection a fresh session starts from: the configured states
    /// over the dataset's full population range.
    pub fn default_selection(&self, df: &DataFrame) -> Result<FilterSelection> {
        let populacao = df
            .column(COL_POPULATION)
            .with_context(|| format!("dataset has no {COL_POPULATION} column"))?
            .i64()?;
        let min = populacao.min().unwrap_or(0);
        let max = populacao.max().unwrap_or(0);
        Ok(FilterSelection::new(
            self.default_states.iter().cloned(),
            (min, max),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemSource;
    use crate::table::read_from_csv_bytes;

    #[test]
    fn defaults_match_the_reference_dashboard() {
        let cfg = DashConfig::default();
        assert_eq!(cfg.default_states, vec!["SP"]);
        assert_eq!(cfg.top_n, 10);
        assert_eq!(cfg.histogram_bins, 50);
        assert_eq!(cfg.comparison_limit, 3);
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let mut source = MemSource::default();
        source.insert("dash.json", br#"{"default_states": ["RJ", "ES"]}"#);
        let cfg = DashConfig::from_source(&source, "dash.json").unwrap();
        assert_eq!(cfg.default_states, vec!["RJ", "ES"]);
        assert_eq!(cfg.dataset, "DATASET_CLUSTERIZADO.csv");
        assert_eq!(cfg.top_n, 10);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let source = MemSource::default();
        assert!(DashConfig::from_source(&source, "dash.json").is_err());
    }

    #[test]
    fn default_selection_spans_the_population_range() {
        let csv = "\
cod,mun,populacao
3550308,São Paulo,12000000
3304557,Rio de Janeiro,6700000
";
        let df = read_from_csv_bytes(csv.as_bytes()).unwrap();
        let selection = DashConfig::default().default_selection(&df).unwrap();
        assert!(selection.states.contains("SP"));
        assert_eq!(selection.population, (6700000, 12000000));
    }
}
