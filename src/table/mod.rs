//! The municipality table: one row per municipality, loaded from CSV and
//! normalized so the region code is text and the UF abbreviation is always
//! derived from it, never trusted from the source.

mod filter;
mod read;
mod summary;

pub use filter::FilterSelection;
pub use read::read_from_csv_bytes;
pub use summary::{Summary, summarize};

pub const COL_CODE: &str = "cod";
pub const COL_NAME: &str = "mun";
pub const COL_POPULATION: &str = "populacao";
pub const COL_INFANT_MORTALITY: &str = "taxa_mortalidade_infantil";
pub const COL_PRENATAL: &str = "pct_prenatal";
pub const COL_GDP: &str = "pib_per_capita";
pub const COL_ICSAP: &str = "pct_icsap";
pub const COL_COST: &str = "custo_medio";
pub const COL_CLUSTER: &str = "Cluster";

// Derived columns, added by normalization.
pub const COL_STATE_PREFIX: &str = "uf_cod";
pub const COL_STATE: &str = "uf";
