//! Chart-spec builders. Every function here consumes prepared data and
//! produces a plain JSON value for the rendering layer; no rendering-library
//! types cross this boundary.

mod charts;
mod choropleth;
mod compare;
mod page;

pub use charts::{cost_histogram, listing, top_avoidable_admissions};
pub use choropleth::choropleth;
pub use compare::comparison;
pub use page::assemble_page;
