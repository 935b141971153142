use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;

use super::{COL_GDP, COL_INFANT_MORTALITY, COL_POPULATION, COL_PRENATAL};

/// Headline aggregates over a (filtered) municipality table.
/// Means are null over an empty selection.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub municipios: usize,
    pub populacao_total: i64,
    pub media_mortalidade_infantil: Option<f64>,
    pub media_pct_prenatal: Option<f64>,
    pub media_pib_per_capita: Option<f64>,
}

pub fn summarize(df: &DataFrame) -> Result<Summary> {
    let populacao = df
        .column(COL_POPULATION)
        .with_context(|| format!("dataset has no {COL_POPULATION} column"))?
        .i64()?;

    Ok(Summary {
        municipios: df.height(),
        populacao_total: populacao.sum().unwrap_or(0),
        media_mortalidade_infantil: mean_of(df, COL_INFANT_MORTALITY)?,
        media_pct_prenatal: mean_of(df, COL_PRENATAL)?,
        media_pib_per_capita: mean_of(df, COL_GDP)?,
    })
}

fn mean_of(df: &DataFrame, name: &str) -> Result<Option<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("dataset has no {name} column"))?;
    Ok(col.f64()?.mean())
}
