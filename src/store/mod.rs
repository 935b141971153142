mod source;

use std::sync::Arc;

use ahash::AHashMap;
use anyhow::Result;
use polars::frame::DataFrame;
use serde_json::Value;

use crate::atlas::{Atlas, SIMPLIFY_TOLERANCE};
use crate::table;

pub use source::{ByteSource, DiskSource, MemSource};

/// Process-lifetime store for the two dashboard inputs.
///
/// Parsed results are memoized per source-relative path: the first access
/// loads and normalizes, every later access returns the cached value. There
/// is no invalidation; a file changed on disk after first load is not
/// detected.
pub struct DashStore<S: ByteSource> {
    source: S,
    tables: AHashMap<String, Arc<DataFrame>>,
    atlases: AHashMap<String, Arc<Atlas>>,
    // Serialized FeatureCollections, cached so repeated renders reuse the
    // same simplified wire payload.
    collections: AHashMap<String, Arc<Value>>,
}

impl<S: ByteSource> DashStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tables: AHashMap::new(),
            atlases: AHashMap::new(),
            collections: AHashMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The normalized municipality table at `rel`, loaded once.
    pub fn table(&mut self, rel: &str) -> Result<Arc<DataFrame>> {
        if let Some(df) = self.tables.get(rel) {
            return Ok(df.clone());
        }
        let bytes = self.source.get(rel)?;
        let df = Arc::new(table::read_from_csv_bytes(&bytes)?);
        log::info!("loaded dataset {rel}: {} municipalities", df.height());
        self.tables.insert(rel.to_string(), df.clone());
        Ok(df)
    }

    /// The boundary atlas at `rel`, loaded and simplified once.
    pub fn atlas(&mut self, rel: &str) -> Result<Arc<Atlas>> {
        if let Some(atlas) = self.atlases.get(rel) {
            return Ok(atlas.clone());
        }
        let bytes = self.source.get(rel)?;
        let mut atlas = Atlas::read_from_geojson_bytes(&bytes)?;
        atlas.simplify(SIMPLIFY_TOLERANCE);
        log::info!("loaded boundaries {rel}: {} features", atlas.len());
        let atlas = Arc::new(atlas);
        self.atlases.insert(rel.to_string(), atlas.clone());
        Ok(atlas)
    }

    /// The simplified boundaries at `rel` in FeatureCollection wire format.
    pub fn atlas_geojson(&mut self, rel: &str) -> Result<Arc<Value>> {
        if let Some(value) = self.collections.get(rel) {
            return Ok(value.clone());
        }
        let atlas = self.atlas(rel)?;
        let value = Arc::new(atlas.to_geojson());
        self.collections.insert(rel.to_string(), value.clone());
        Ok(value)
    }
}
