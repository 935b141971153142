use std::{io::Cursor, sync::Arc};

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::region;

use super::{
    COL_CLUSTER, COL_CODE, COL_COST, COL_GDP, COL_ICSAP, COL_INFANT_MORTALITY, COL_POPULATION,
    COL_PRENATAL, COL_STATE, COL_STATE_PREFIX,
};

/// Read the municipality dataset from CSV bytes and normalize it.
pub fn read_from_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let mut options = CsvReadOptions::default();
    if header_has_column(bytes, COL_CODE) {
        // Force the municipality code to be read as text to preserve
        // leading zeros.
        options = options.with_schema_overwrite(Some(dataset_csv_schema()));
    }

    let df = CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()
        .context("Failed to parse dataset CSV")?;
    normalize_dataset(df)
}

/// Schema overwrite for the dataset CSV.
fn dataset_csv_schema() -> SchemaRef {
    Arc::new(Schema::from_iter([Field::new(
        COL_CODE.into(),
        DataType::String,
    )]))
}

/// Cheap header sniff: the code column is optional in the source, and the
/// schema overwrite must only name columns that exist.
fn header_has_column(bytes: &[u8], name: &str) -> bool {
    let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    String::from_utf8_lossy(header)
        .split(',')
        .any(|field| field.trim().trim_matches('"') == name)
}

/// Normalize a freshly parsed dataset:
/// 1. Zero-pad the code column and derive `uf_cod`/`uf` from its prefix;
///    unknown prefixes yield a null `uf` and the row is retained.
/// 2. Cast `populacao` (and `Cluster`, when present) to Int64 and the
///    metric columns to Float64.
fn normalize_dataset(mut df: DataFrame) -> Result<DataFrame> {
    if let Ok(col) = df.column(COL_CODE) {
        let series = col.as_materialized_series();
        let string_series = if col.dtype() != &DataType::String {
            series.cast(&DataType::String)?
        } else {
            series.clone()
        };
        let codes = string_series
            .str()
            .map_err(|e| anyhow::anyhow!("{COL_CODE} is not a string column: {e}"))?;

        let padded: StringChunked = codes
            .into_iter()
            .map(|opt| opt.map(region::pad_code))
            .collect();
        let prefixes: StringChunked = padded
            .into_iter()
            .map(|opt| opt.map(|code| region::state_prefix(code).to_string()))
            .collect();
        let ufs: StringChunked = padded
            .into_iter()
            .map(|opt| opt.and_then(region::state_abbr_of_code).map(str::to_string))
            .collect();

        let unresolved = padded
            .into_iter()
            .filter(|opt| opt.is_some_and(|code| region::state_abbr_of_code(code).is_none()))
            .count();
        if unresolved > 0 {
            log::warn!("{unresolved} municipality codes have no known state prefix");
        }

        df.replace_or_add(COL_CODE.into(), padded.into_series())
            .map_err(|e| anyhow::anyhow!("Failed to normalize {COL_CODE}: {e}"))?;
        df.replace_or_add(COL_STATE_PREFIX.into(), prefixes.into_series())
            .map_err(|e| anyhow::anyhow!("Failed to derive {COL_STATE_PREFIX}: {e}"))?;
        df.replace_or_add(COL_STATE.into(), ufs.into_series())
            .map_err(|e| anyhow::anyhow!("Failed to derive {COL_STATE}: {e}"))?;
    }

    for (name, dtype) in [
        (COL_POPULATION, DataType::Int64),
        (COL_CLUSTER, DataType::Int64),
        (COL_INFANT_MORTALITY, DataType::Float64),
        (COL_PRENATAL, DataType::Float64),
        (COL_GDP, DataType::Float64),
        (COL_ICSAP, DataType::Float64),
        (COL_COST, DataType::Float64),
    ] {
        if let Ok(col) = df.column(name) {
            if col.dtype() != &dtype {
                let cast = col
                    .as_materialized_series()
                    .cast(&dtype)
                    .with_context(|| format!("Failed to cast {name}"))?;
                df.replace_or_add(name.into(), cast)
                    .map_err(|e| anyhow::anyhow!("Failed to replace {name}: {e}"))?;
            }
        }
    }

    Ok(df)
}
