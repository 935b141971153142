use std::collections::BTreeMap;

use serde::Serialize;

use super::cluster::{CLUSTER_LABEL_COLUMN, discrete_palette};
use super::Metric;

/// Continuous scale used for every numeric metric. The dashboard keeps a
/// single warm sequential scale so panels read consistently.
pub const CONTINUOUS_SCALE: &str = "Reds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Categorical,
    Continuous,
}

/// Everything the rendering layer needs to color a panel. Carries no
/// rendering-library types; it serializes straight into the chart spec.
#[derive(Debug, Clone, Serialize)]
pub struct ColorSpec {
    pub mode: ColorMode,
    pub color_column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrete_map: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_scale: Option<String>,
    pub legend_title: String,
}

impl Metric {
    /// Decide the color encoding for this metric: the cluster grouping is
    /// categorical with the fixed label palette, every numeric column is
    /// continuous on the shared warm scale.
    pub fn color_spec(&self) -> ColorSpec {
        match self {
            Metric::Cluster => ColorSpec {
                mode: ColorMode::Categorical,
                color_column: CLUSTER_LABEL_COLUMN.to_string(),
                discrete_map: Some(discrete_palette()),
                continuous_scale: None,
                legend_title: self.label().to_string(),
            },
            _ => ColorSpec {
                mode: ColorMode::Continuous,
                color_column: self.column().to_string(),
                discrete_map: None,
                continuous_scale: Some(CONTINUOUS_SCALE.to_string()),
                legend_title: self.label().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::UNCLASSIFIED_LABEL;

    #[test]
    fn cluster_metric_is_categorical_with_the_fixed_palette() {
        let spec = Metric::Cluster.color_spec();
        assert_eq!(spec.mode, ColorMode::Categorical);
        assert_eq!(spec.color_column, CLUSTER_LABEL_COLUMN);
        assert!(spec.continuous_scale.is_none());
        let palette = spec.discrete_map.unwrap();
        assert_eq!(palette.len(), 5);
        assert!(palette.contains_key(UNCLASSIFIED_LABEL));
    }

    #[test]
    fn numeric_metrics_are_continuous_on_the_shared_scale() {
        for metric in [
            Metric::InfantMortality,
            Metric::GdpPerCapita,
            Metric::PrenatalCoverage,
            Metric::AvoidableAdmissions,
        ] {
            let spec = metric.color_spec();
            assert_eq!(spec.mode, ColorMode::Continuous);
            assert_eq!(spec.color_column, metric.column());
            assert_eq!(spec.continuous_scale.as_deref(), Some(CONTINUOUS_SCALE));
            assert!(spec.discrete_map.is_none());
            assert_eq!(spec.legend_title, metric.label());
        }
    }

    #[test]
    fn spec_serializes_without_library_internals() {
        let value = serde_json::to_value(Metric::GdpPerCapita.color_spec()).unwrap();
        assert_eq!(value["mode"], "continuous");
        assert_eq!(value["continuous_scale"], "Reds");
        assert!(value.get("discrete_map").is_none());
    }
}
