#![doc = "Munidash public API"]
mod atlas;
mod common;
mod config;
mod panel;
mod region;
mod store;
mod style;
mod table;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use atlas::{Atlas, SIMPLIFY_TOLERANCE};

#[doc(inline)]
pub use config::DashConfig;

#[doc(inline)]
pub use store::{ByteSource, DashStore, DiskSource, MemSource};

#[doc(inline)]
pub use style::{ColorMode, ColorSpec, Metric};

#[doc(inline)]
pub use table::{FilterSelection, Summary, summarize};

#[doc(inline)]
pub use panel::{
    assemble_page, choropleth, comparison, cost_histogram, listing, top_avoidable_admissions,
};
