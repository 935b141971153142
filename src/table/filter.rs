use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::{COL_POPULATION, COL_STATE};

/// One user interaction's worth of filtering: a set of UF abbreviations and
/// an inclusive population range. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub states: BTreeSet<String>,
    pub population: (i64, i64),
}

impl FilterSelection {
    pub fn new<I, T>(states: I, population: (i64, i64)) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            population,
        }
    }

    /// Retain rows whose `uf` is one of the selected states and whose
    /// `populacao` lies within the inclusive range. The source frame is
    /// never modified; the result is always a subset of it.
    ///
    /// An empty state selection matches nothing. A null `uf` (unresolved
    /// state prefix) never matches.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        let uf = df
            .column(COL_STATE)
            .with_context(|| format!("dataset has no {COL_STATE} column"))?
            .str()?;
        let populacao = df
            .column(COL_POPULATION)
            .with_context(|| format!("dataset has no {COL_POPULATION} column"))?
            .i64()?;

        let (min, max) = self.population;
        let mask: BooleanChunked = uf
            .into_iter()
            .zip(populacao.into_iter())
            .map(|(uf, populacao)| {
                Some(match (uf, populacao) {
                    (Some(uf), Some(populacao)) => {
                        self.states.contains(uf) && (min..=max).contains(&populacao)
                    }
                    _ => false,
                })
            })
            .collect();

        Ok(df.filter(&mask)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{COL_CODE, read_from_csv_bytes};

    const CSV: &str = "\
cod,mun,populacao,taxa_mortalidade_infantil,pct_prenatal,pib_per_capita,pct_icsap,custo_medio
3550308,São Paulo,12000000,11.2,88.5,58000.0,12.1,1500.0
3304557,Rio de Janeiro,6700000,12.8,85.0,51000.0,14.3,1620.5
3509502,Campinas,1200000,9.8,91.0,49000.0,10.5,1380.0
9900001,Lugar Nenhum,1000,20.0,50.0,9000.0,30.0,900.0
";

    fn table() -> DataFrame {
        read_from_csv_bytes(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn retains_matching_states_within_range() {
        let df = table();
        let selection = FilterSelection::new(["SP"], (0, 20_000_000));
        let filtered = selection.apply(&df).unwrap();
        assert_eq!(filtered.height(), 2);
        let cod = filtered.column(COL_CODE).unwrap().str().unwrap();
        assert_eq!(cod.get(0), Some("3550308"));
        assert_eq!(cod.get(1), Some("3509502"));
    }

    #[test]
    fn population_bounds_are_inclusive() {
        let df = table();
        let selection = FilterSelection::new(["SP"], (1_200_000, 12_000_000));
        let filtered = selection.apply(&df).unwrap();
        assert_eq!(filtered.height(), 2);
    }

    #[test]
    fn empty_state_selection_matches_nothing() {
        let df = table();
        let selection = FilterSelection::new(Vec::<String>::new(), (0, i64::MAX));
        assert_eq!(selection.apply(&df).unwrap().height(), 0);
    }

    #[test]
    fn unresolved_uf_never_matches() {
        let df = table();
        // Every state selected; the row with the unknown "99" prefix still
        // has to stay out.
        let all: Vec<&str> = crate::region::STATE_PREFIXES.iter().map(|(_, uf)| *uf).collect();
        let selection = FilterSelection::new(all, (0, i64::MAX));
        assert_eq!(selection.apply(&df).unwrap().height(), 3);
    }

    #[test]
    fn apply_is_idempotent_and_leaves_the_source_intact() {
        let df = table();
        let selection = FilterSelection::new(["SP", "RJ"], (0, i64::MAX));
        let once = selection.apply(&df).unwrap();
        let twice = selection.apply(&once).unwrap();
        assert!(once.equals(&twice));
        // Source is reusable across repeated filters.
        assert_eq!(df.height(), 4);
        assert!(selection.apply(&df).unwrap().equals(&once));
    }

    #[test]
    fn result_is_a_subset_of_the_input() {
        let df = table();
        let selection = FilterSelection::new(["RJ"], (0, i64::MAX));
        let filtered = selection.apply(&df).unwrap();
        assert!(filtered.height() <= df.height());
        let cod = filtered.column(COL_CODE).unwrap().str().unwrap();
        let source: Vec<Option<&str>> =
            df.column(COL_CODE).unwrap().str().unwrap().into_iter().collect();
        for opt in cod.into_iter() {
            assert!(source.contains(&opt));
        }
    }
}
