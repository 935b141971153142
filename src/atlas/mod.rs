mod geojson;
mod read;
mod simplify;

use std::sync::Arc;

use geo::MultiPolygon;

/// Simplification tolerance for boundary geometry, in coordinate degrees.
/// Applied exactly once when an atlas is loaded; the original precision is
/// discarded.
pub const SIMPLIFY_TOLERANCE: f64 = 0.005;

/// Municipality boundaries keyed by region code.
///
/// `ids[i]` pairs with `geoms[i]`; the pairing is established at parse time
/// and never reordered, so feature counts survive simplification untouched.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    pub ids: Vec<Arc<str>>,
    pub geoms: Vec<MultiPolygon<f64>>,
}

impl Atlas {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
