use anyhow::{Context, Result};
use polars::prelude::*;
use serde_json::{Value, json};

use crate::style::{ColorMode, Metric, cluster_label};
use crate::table::{COL_CLUSTER, COL_CODE, COL_NAME, COL_POPULATION, COL_STATE};

/// Build the choropleth spec: filtered rows joined to the boundary
/// FeatureCollection by region code (`featureidkey "properties.id"`), with
/// per-row color values resolved by the metric's color spec.
pub fn choropleth(df: &DataFrame, boundaries: &Value, metric: Metric) -> Result<Value> {
    let spec = metric.color_spec();

    let cod = df
        .column(COL_CODE)
        .with_context(|| format!("dataset has no {COL_CODE} column"))?
        .str()?;
    let locations: Vec<Value> = cod.into_iter().map(Value::from).collect();

    let values: Vec<Value> = match spec.mode {
        ColorMode::Categorical => cluster_labels(df),
        ColorMode::Continuous => {
            let col = df
                .column(spec.color_column.as_str())
                .with_context(|| format!("dataset has no {} column", spec.color_column))?
                .f64()?;
            col.into_iter().map(Value::from).collect()
        }
    };

    Ok(json!({
        "kind": "choropleth",
        "title": format!("Mapa de {} por Município", metric.label()),
        "geojson": boundaries.clone(),
        "locations": locations,
        "featureidkey": "properties.id",
        "color": serde_json::to_value(&spec)?,
        "values": values,
        "hover": {
            "name": string_values(df, COL_NAME),
            "populacao": int_values(df, COL_POPULATION),
            "uf": string_values(df, COL_STATE),
        },
    }))
}

/// Display labels for the cluster column. A missing column (dataset without
/// the precomputed grouping) degrades to all-sentinel, never a failure.
fn cluster_labels(df: &DataFrame) -> Vec<Value> {
    match df.column(COL_CLUSTER).ok().and_then(|col| col.i64().ok()) {
        Some(ids) => ids
            .into_iter()
            .map(|id| Value::from(cluster_label(id)))
            .collect(),
        None => vec![Value::from(cluster_label(None)); df.height()],
    }
}

fn string_values(df: &DataFrame, name: &str) -> Vec<Value> {
    match df.column(name).ok().and_then(|col| col.str().ok()) {
        Some(values) => values.into_iter().map(Value::from).collect(),
        None => vec![Value::Null; df.height()],
    }
}

fn int_values(df: &DataFrame, name: &str) -> Vec<Value> {
    match df.column(name).ok().and_then(|col| col.i64().ok()) {
        Some(values) => values.into_iter().map(Value::from).collect(),
        None => vec![Value::Null; df.height()],
    }
}
