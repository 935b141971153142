use anyhow::{Context, Result, bail};
use polars::prelude::*;
use serde_json::{Value, json};

use crate::style::{Metric, cluster_label};
use crate::table::{
    COL_CLUSTER, COL_COST, COL_GDP, COL_ICSAP, COL_INFANT_MORTALITY, COL_NAME, COL_POPULATION,
    COL_PRENATAL,
};

/// Side-by-side comparison of up to `limit` municipalities, selected by
/// name from the FULL table (the comparison view ignores the map filters).
/// Produces summary records plus a bar chart of one numeric metric.
pub fn comparison(df: &DataFrame, names: &[String], metric: Metric, limit: usize) -> Result<Value> {
    if names.len() > limit {
        bail!(
            "comparison accepts at most {limit} municipalities, got {}",
            names.len()
        );
    }
    if metric == Metric::Cluster {
        bail!("comparison chart needs a numeric metric");
    }

    let mun = df
        .column(COL_NAME)
        .with_context(|| format!("dataset has no {COL_NAME} column"))?
        .str()?;
    let selected: Vec<usize> = mun
        .into_iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            name.filter(|name| names.iter().any(|wanted| wanted == name))
                .map(|_| idx)
        })
        .collect();

    let cluster = df.column(COL_CLUSTER).ok().and_then(|col| col.i64().ok());
    let populacao = df
        .column(COL_POPULATION)
        .with_context(|| format!("dataset has no {COL_POPULATION} column"))?
        .i64()?;
    let metric_values = df
        .column(metric.column())
        .with_context(|| format!("dataset has no {} column", metric.column()))?
        .f64()?;

    let mut records = Vec::with_capacity(selected.len());
    let mut x = Vec::with_capacity(selected.len());
    let mut y = Vec::with_capacity(selected.len());
    for &idx in &selected {
        records.push(json!({
            "mun": mun.get(idx),
            "cluster": cluster_label(cluster.and_then(|ids| ids.get(idx))),
            "populacao": populacao.get(idx),
            "pib_per_capita": float_cell(df, COL_GDP, idx),
            "taxa_mortalidade_infantil": float_cell(df, COL_INFANT_MORTALITY, idx),
            "pct_prenatal": float_cell(df, COL_PRENATAL, idx),
            "pct_icsap": float_cell(df, COL_ICSAP, idx),
            "custo_medio": float_cell(df, COL_COST, idx),
        }));
        x.push(Value::from(mun.get(idx)));
        y.push(Value::from(metric_values.get(idx)));
    }

    Ok(json!({
        "kind": "comparison",
        "records": records,
        "chart": {
            "kind": "bar",
            "title": format!("Comparativo: {}", metric.label()),
            "x": x,
            "y": y,
            "text_auto": ".2f",
        },
    }))
}

fn float_cell(df: &DataFrame, name: &str, idx: usize) -> Value {
    df.column(name)
        .ok()
        .and_then(|col| col.f64().ok())
        .and_then(|values| values.get(idx))
        .map(Value::from)
        .unwrap_or(Value::Null)
}
