use anyhow::Result;
use serde_json::{Value, json};

use crate::config::DashConfig;
use crate::store::{ByteSource, DashStore};
use crate::style::Metric;
use crate::table::{FilterSelection, summarize};

use super::{choropleth, cost_histogram, listing, top_avoidable_admissions};

/// Assemble the full dashboard page spec for one interaction: load (or hit
/// the cache for) both sources, apply the selection, and bundle the KPI
/// header with every panel.
pub fn assemble_page<S: ByteSource>(
    store: &mut DashStore<S>,
    cfg: &DashConfig,
    selection: &FilterSelection,
    metric: Metric,
) -> Result<Value> {
    let df = store.table(&cfg.dataset)?;
    let boundaries = store.atlas_geojson(&cfg.boundaries)?;

    let filtered = selection.apply(&df)?;
    let kpis = summarize(&filtered)?;

    let map = choropleth(&filtered, &boundaries, metric)?;
    let bar = top_avoidable_admissions(&filtered, cfg.top_n)?;
    let hist = cost_histogram(&filtered, cfg.histogram_bins)?;
    let table = listing(&filtered)?;

    Ok(json!({
        "title": format!("Panorama Municipal ({} filtrados)", filtered.height()),
        "background_image": asset(store.source(), cfg.background_image.as_deref()),
        "logo_image": asset(store.source(), cfg.logo_image.as_deref()),
        "kpis": serde_json::to_value(&kpis)?,
        "panels": {
            "mapa": map,
            "icsap": bar,
            "custo": hist,
            "dados": table,
        },
    }))
}

/// Optional styling asset: a configured path that is missing degrades to
/// null with a warning, never a failure.
fn asset<S: ByteSource>(source: &S, rel: Option<&str>) -> Value {
    match rel {
        Some(rel) if source.has(rel) => json!(rel),
        Some(rel) => {
            log::warn!("optional asset {rel} not found, falling back");
            Value::Null
        }
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemSource;

    const CSV: &str = "\
cod,mun,populacao,taxa_mortalidade_infantil,pct_prenatal,pib_per_capita,pct_icsap,custo_medio,Cluster
3550308,São Paulo,12000000,11.2,88.5,58000.0,12.1,1500.0,0
3304557,Rio de Janeiro,6700000,12.8,85.0,51000.0,14.3,1620.5,3
";

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"id": "3550308"},
                "geometry": {"type": "Polygon", "coordinates": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}
            },
            {
                "type": "Feature",
                "properties": {"id": "3304557"},
                "geometry": {"type": "Polygon", "coordinates": [[[2.0,2.0],[3.0,2.0],[3.0,3.0],[2.0,2.0]]]}
            }
        ]
    }"#;

    fn store_with_logo() -> DashStore<MemSource> {
        let mut source = MemSource::default();
        source.insert("dataset.csv", CSV.as_bytes());
        source.insert("borders.json", GEOJSON.as_bytes());
        source.insert("logo.jpg", b"\xff\xd8");
        DashStore::new(source)
    }

    fn config() -> DashConfig {
        DashConfig {
            dataset: "dataset.csv".into(),
            boundaries: "borders.json".into(),
            logo_image: Some("logo.jpg".into()),
            background_image: Some("fundo.png".into()),
            ..DashConfig::default()
        }
    }

    #[test]
    fn page_bundles_kpis_and_panels() {
        let mut store = store_with_logo();
        let selection = FilterSelection::new(["SP"], (0, i64::MAX));
        let page = assemble_page(&mut store, &config(), &selection, Metric::Cluster).unwrap();

        assert_eq!(page["title"], "Panorama Municipal (1 filtrados)");
        assert_eq!(page["kpis"]["municipios"], 1);
        assert_eq!(page["kpis"]["populacao_total"], 12000000);
        assert_eq!(page["panels"]["mapa"]["kind"], "choropleth");
        assert_eq!(page["panels"]["icsap"]["kind"], "bar");
        assert_eq!(page["panels"]["custo"]["kind"], "histogram");
        assert_eq!(page["panels"]["dados"]["kind"], "table");

        // The map joins against the full simplified boundary set.
        let features = page["panels"]["mapa"]["geojson"]["features"]
            .as_array()
            .unwrap();
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn missing_optional_assets_degrade_to_null() {
        let mut store = store_with_logo();
        let selection = FilterSelection::new(["SP"], (0, i64::MAX));
        let page = assemble_page(&mut store, &config(), &selection, Metric::Cluster).unwrap();

        assert_eq!(page["logo_image"], "logo.jpg");
        assert!(page["background_image"].is_null());
    }
}
