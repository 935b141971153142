mod cluster;
mod resolve;

pub use cluster::{
    CLUSTER_CLASSES, CLUSTER_LABEL_COLUMN, ClusterClass, UNCLASSIFIED_COLOR, UNCLASSIFIED_LABEL,
    cluster_label, discrete_palette,
};
pub use resolve::{CONTINUOUS_SCALE, ColorMode, ColorSpec};

use crate::table;

/// Display metrics the map can be colored by. A closed set: the selection
/// UI only ever offers these, so there is no invalid-input path downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cluster,
    InfantMortality,
    GdpPerCapita,
    PrenatalCoverage,
    AvoidableAdmissions,
}

impl Metric {
    /// The dataset column backing this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Cluster => table::COL_CLUSTER,
            Metric::InfantMortality => table::COL_INFANT_MORTALITY,
            Metric::GdpPerCapita => table::COL_GDP,
            Metric::PrenatalCoverage => table::COL_PRENATAL,
            Metric::AvoidableAdmissions => table::COL_ICSAP,
        }
    }

    /// Human-readable legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cluster => "Cluster (Grupos Semelhantes)",
            Metric::InfantMortality => "Taxa de Mortalidade Infantil",
            Metric::GdpPerCapita => "PIB per Capita (R$)",
            Metric::PrenatalCoverage => "Cobertura de Pré-Natal (%)",
            Metric::AvoidableAdmissions => "Internações Sensíveis (ICSAP %)",
        }
    }

    pub fn order() -> [Metric; 5] {
        [
            Metric::Cluster,
            Metric::InfantMortality,
            Metric::GdpPerCapita,
            Metric::PrenatalCoverage,
            Metric::AvoidableAdmissions,
        ]
    }
}
