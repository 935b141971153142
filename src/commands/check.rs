use std::collections::HashSet;

use anyhow::Result;

use crate::cli::{CheckArgs, Cli};
use crate::config::DashConfig;
use crate::store::{DashStore, DiskSource};
use crate::table::{COL_CODE, COL_STATE};

/// Report how well the dataset and the boundary file join. Informational
/// only: partial joins render fine (unmatched rows simply don't paint), so
/// this never fails the run.
pub fn run(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let source = DiskSource::new(&args.data_dir);
    let cfg = match &args.config {
        Some(rel) => DashConfig::from_source(&source, rel)?,
        None => DashConfig::default(),
    };
    let mut store = DashStore::new(source);

    let df = store.table(&cfg.dataset)?;
    let atlas = store.atlas(&cfg.boundaries)?;

    let codes: HashSet<&str> = match df.column(COL_CODE) {
        Ok(col) => col.str()?.into_iter().flatten().collect(),
        Err(_) => HashSet::new(),
    };
    let features: HashSet<&str> = atlas.ids.iter().map(|id| &**id).collect();

    let rows_without_boundary = codes.difference(&features).count();
    let features_without_row = features.difference(&codes).count();
    let unresolved_uf = df
        .column(COL_STATE)
        .map(|col| col.null_count())
        .unwrap_or(df.height());

    println!("dataset:    {} municipalities ({})", df.height(), cfg.dataset);
    println!("boundaries: {} features ({})", atlas.len(), cfg.boundaries);
    println!("rows without a boundary feature: {rows_without_boundary}");
    println!("features without a dataset row:  {features_without_row}");
    println!("rows with unresolved UF:         {unresolved_uf}");

    if cli.verbose > 0 {
        for code in codes.difference(&features) {
            eprintln!("[check] no boundary for {code}");
        }
    }

    Ok(())
}
