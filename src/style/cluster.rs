use std::collections::BTreeMap;

/// A precomputed municipality grouping with its display name and fixed
/// color. The ids are produced upstream; this system only labels them.
#[derive(Debug, Clone, Copy)]
pub struct ClusterClass {
    pub id: i64,
    pub name: &'static str,
    pub color: &'static str,
}

/// The four known cluster classes.
pub const CLUSTER_CLASSES: [ClusterClass; 4] = [
    ClusterClass { id: 0, name: "Eficiente (Saúde/Segurança Alta)", color: "#2ecc71" },
    ClusterClass { id: 1, name: "Crise de Gestão (ICSAP Alto)", color: "#e67e22" },
    ClusterClass { id: 2, name: "Riqueza Desequilibrada", color: "#f1c40f" },
    ClusterClass { id: 3, name: "Vulnerável (Mortalidade Alta)", color: "#e74c3c" },
];

/// Sentinel for cluster ids outside the known set (or absent).
pub const UNCLASSIFIED_LABEL: &str = "Sem Classificação";
pub const UNCLASSIFIED_COLOR: &str = "#95a5a6";

/// Name of the derived display column carrying cluster labels.
pub const CLUSTER_LABEL_COLUMN: &str = "cluster_nome";

/// Display label for a cluster id. Ids outside the known set resolve to the
/// unclassified sentinel, never an error.
pub fn cluster_label(id: Option<i64>) -> &'static str {
    id.and_then(|id| {
        CLUSTER_CLASSES
            .iter()
            .find(|class| class.id == id)
            .map(|class| class.name)
    })
    .unwrap_or(UNCLASSIFIED_LABEL)
}

/// Label → color mapping for categorical rendering, sentinel included.
pub fn discrete_palette() -> BTreeMap<String, String> {
    let mut palette: BTreeMap<String, String> = CLUSTER_CLASSES
        .iter()
        .map(|class| (class.name.to_string(), class.color.to_string()))
        .collect();
    palette.insert(UNCLASSIFIED_LABEL.to_string(), UNCLASSIFIED_COLOR.to_string());
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_fixed_labels() {
        assert_eq!(cluster_label(Some(0)), "Eficiente (Saúde/Segurança Alta)");
        assert_eq!(cluster_label(Some(1)), "Crise de Gestão (ICSAP Alto)");
        assert_eq!(cluster_label(Some(2)), "Riqueza Desequilibrada");
        assert_eq!(cluster_label(Some(3)), "Vulnerável (Mortalidade Alta)");
    }

    #[test]
    fn out_of_range_and_absent_ids_fall_back_to_the_sentinel() {
        assert_eq!(cluster_label(Some(7)), UNCLASSIFIED_LABEL);
        assert_eq!(cluster_label(Some(-1)), UNCLASSIFIED_LABEL);
        assert_eq!(cluster_label(None), UNCLASSIFIED_LABEL);
    }

    #[test]
    fn palette_covers_every_class_plus_the_sentinel() {
        let palette = discrete_palette();
        assert_eq!(palette.len(), 5);
        assert_eq!(
            palette.get("Riqueza Desequilibrada").map(String::as_str),
            Some("#f1c40f")
        );
        assert_eq!(
            palette.get(UNCLASSIFIED_LABEL).map(String::as_str),
            Some(UNCLASSIFIED_COLOR)
        );
    }
}
