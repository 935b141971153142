use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::{Cli, RenderArgs};
use crate::config::DashConfig;
use crate::panel::{assemble_page, comparison};
use crate::store::{DashStore, DiskSource};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    // Assert output path is not stdout
    if args.output == Path::new("-") {
        bail!("stdout is not supported.");
    }
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let source = DiskSource::new(&args.data_dir);
    let cfg = match &args.config {
        Some(rel) => DashConfig::from_source(&source, rel)?,
        None => DashConfig::default(),
    };
    let mut store = DashStore::new(source);
    let df = store.table(&cfg.dataset)?;

    let mut selection = cfg.default_selection(&df)?;
    if !args.states.is_empty() {
        selection.states = args.states.iter().cloned().collect();
    }
    if let Some(min) = args.pop_min {
        selection.population.0 = min;
    }
    if let Some(max) = args.pop_max {
        selection.population.1 = max;
    }

    if cli.verbose > 0 {
        eprintln!(
            "[render] {} rows, states={:?} pop={:?}",
            df.height(),
            selection.states,
            selection.population
        );
    }

    let mut page = assemble_page(&mut store, &cfg, &selection, args.metric.into())?;
    if !args.compare.is_empty() {
        page["panels"]["comparacao"] = comparison(
            &df,
            &args.compare,
            args.compare_metric.into(),
            cfg.comparison_limit,
        )?;
    }

    std::fs::write(&args.output, serde_json::to_vec_pretty(&page)?)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Wrote dashboard spec -> {}", args.output.display());
    Ok(())
}
