use anyhow::{Context, Result};
use polars::prelude::*;
use serde_json::{Value, json};

use crate::table::{
    COL_CODE, COL_COST, COL_GDP, COL_ICSAP, COL_INFANT_MORTALITY, COL_NAME, COL_POPULATION,
    COL_PRENATAL, COL_STATE,
};

/// Ranked horizontal bar of the `n` municipalities with the highest
/// avoidable-admission percentage. Rows come out in ascending order so the
/// largest bar renders on top.
pub fn top_avoidable_admissions(df: &DataFrame, n: usize) -> Result<Value> {
    let mun = df
        .column(COL_NAME)
        .with_context(|| format!("dataset has no {COL_NAME} column"))?
        .str()?;
    let uf = df
        .column(COL_STATE)
        .with_context(|| format!("dataset has no {COL_STATE} column"))?
        .str()?;
    let pct = df
        .column(COL_ICSAP)
        .with_context(|| format!("dataset has no {COL_ICSAP} column"))?
        .f64()?;

    let mut ranked: Vec<(usize, f64)> = pct
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| value.map(|value| (idx, value)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked.reverse();

    let rows: Vec<Value> = ranked
        .iter()
        .map(|(idx, value)| {
            json!({
                "mun": mun.get(*idx),
                "uf": uf.get(*idx),
                "pct_icsap": value,
            })
        })
        .collect();

    Ok(json!({
        "kind": "bar",
        "orientation": "h",
        "title": format!("Top {n} Municípios com maior % de Internações Evitáveis"),
        "color_by": "uf",
        "rows": rows,
    }))
}

/// Distribution of the average hospitalization cost. The renderer bins the
/// raw values itself; the spec only fixes the bin count.
pub fn cost_histogram(df: &DataFrame, nbins: usize) -> Result<Value> {
    let custo = df
        .column(COL_COST)
        .with_context(|| format!("dataset has no {COL_COST} column"))?
        .f64()?;
    let values: Vec<f64> = custo.into_iter().flatten().collect();

    Ok(json!({
        "kind": "histogram",
        "title": "Distribuição do Custo Médio Hospitalar",
        "column": COL_COST,
        "nbins": nbins,
        "color": "green",
        "values": values,
    }))
}

/// Columns shown in the raw-data listing, in display order.
const LISTING_COLUMNS: [&str; 7] = [
    COL_CODE,
    COL_NAME,
    COL_STATE,
    COL_POPULATION,
    COL_GDP,
    COL_INFANT_MORTALITY,
    COL_PRENATAL,
];

/// Tabular listing of the filtered rows.
pub fn listing(df: &DataFrame) -> Result<Value> {
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut record = serde_json::Map::new();
        for name in LISTING_COLUMNS {
            record.insert(name.to_string(), cell(df, name, idx));
        }
        rows.push(Value::Object(record));
    }

    Ok(json!({
        "kind": "table",
        "columns": LISTING_COLUMNS,
        "rows": rows,
    }))
}

/// One cell as JSON, by column dtype. Unknown columns and unsupported
/// dtypes come out as null.
fn cell(df: &DataFrame, name: &str, idx: usize) -> Value {
    let Ok(col) = df.column(name) else {
        return Value::Null;
    };
    match col.dtype() {
        DataType::String => col
            .str()
            .ok()
            .and_then(|values| values.get(idx))
            .map(Value::from)
            .unwrap_or(Value::Null),
        DataType::Int64 => col
            .i64()
            .ok()
            .and_then(|values| values.get(idx))
            .map(Value::from)
            .unwrap_or(Value::Null),
        DataType::Float64 => col
            .f64()
            .ok()
            .and_then(|values| values.get(idx))
            .map(Value::from)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
