use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use super::Atlas;

/// Property field holding the region code in the boundary source.
pub const FEATURE_ID_KEY: &str = "id";

impl Atlas {
    /// Read an atlas from GeoJSON bytes, taking feature ids from the
    /// default property field.
    pub fn read_from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_from_geojson_bytes_keyed(bytes, FEATURE_ID_KEY)
    }

    /// Read an atlas from GeoJSON bytes, taking feature ids from the
    /// property field `id_key` (falling back to the feature-level "id").
    /// Features without a usable id or geometry are skipped with a warning;
    /// an unparsable document is a fatal error.
    pub fn read_from_geojson_bytes_keyed(bytes: &[u8], id_key: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(bytes).context("Failed to parse boundary GeoJSON")?;
        let features = value["features"]
            .as_array()
            .ok_or_else(|| anyhow!("Boundary source is not a FeatureCollection"))?;

        let mut atlas = Atlas::default();
        let mut skipped = 0usize;
        for feature in features {
            let id = feature_id(feature, id_key);
            let geom = feature["geometry"]
                .as_object()
                .and_then(|geometry| parse_geometry(geometry));
            match (id, geom) {
                (Some(id), Some(geom)) => {
                    atlas.ids.push(Arc::from(id));
                    atlas.geoms.push(geom);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("skipped {skipped} boundary features without id or polygon geometry");
        }
        Ok(atlas)
    }
}

/// Extract the feature id, accepting string or integer encodings.
fn feature_id(feature: &Value, id_key: &str) -> Option<String> {
    let candidate = match &feature["properties"][id_key] {
        Value::Null => &feature["id"],
        found => found,
    };
    match candidate {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_i64().map(|n| n.to_string()),
        _ => None,
    }
}

fn parse_geometry(geometry: &serde_json::Map<String, Value>) -> Option<MultiPolygon<f64>> {
    let coords = geometry.get("coordinates")?.as_array()?;
    match geometry.get("type")?.as_str()? {
        "Polygon" => parse_polygon_coords(coords).map(|p| MultiPolygon(vec![p])),
        "MultiPolygon" => {
            let polygons: Option<Vec<Polygon<f64>>> = coords
                .iter()
                .map(|p| p.as_array().and_then(|rings| parse_polygon_coords(rings)))
                .collect();
            polygons.map(MultiPolygon)
        }
        _ => None,
    }
}

/// Parse standard GeoJSON polygon coordinates: the first ring is the
/// exterior, any further rings are holes.
fn parse_polygon_coords(rings: &[Value]) -> Option<Polygon<f64>> {
    let mut parsed = rings.iter().map(|ring| {
        ring.as_array().and_then(|coords| parse_ring_coords(coords))
    });
    let exterior = parsed.next()??;
    let interiors: Option<Vec<LineString<f64>>> = parsed.collect();
    Some(Polygon::new(exterior, interiors?))
}

/// Parse a ring from GeoJSON coordinates: [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Option<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());
    for pair in coords {
        let pair = pair.as_array()?;
        if pair.len() < 2 {
            return None;
        }
        let x = pair[0].as_f64()?;
        let y = pair[1].as_f64()?;
        points.push(Coord { x, y });
    }

    // Ensure the ring is closed (first point == last point).
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Some(LineString(points))
}
