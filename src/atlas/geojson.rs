use geo::MultiPolygon;
use serde_json::{Value, json};

use super::Atlas;
use super::read::FEATURE_ID_KEY;

impl Atlas {
    /// Export the atlas as a GeoJSON FeatureCollection.
    ///
    /// This is the wire format the rendering layer joins against: each
    /// feature carries the region code both as the feature id and under
    /// `properties.id`, so a choropleth can use `featureidkey
    /// "properties.id"`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .ids
            .iter()
            .zip(&self.geoms)
            .map(|(id, mp)| {
                json!({
                    "type": "Feature",
                    "id": &**id,
                    "geometry": multipolygon_to_geojson(mp),
                    "properties": { FEATURE_ID_KEY: &**id },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

/// Convert a MultiPolygon to a GeoJSON geometry value. Rings follow the
/// standard nesting: exterior first, then any holes.
fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = mp
        .0
        .iter()
        .map(|polygon| {
            let mut rings: Vec<Vec<Vec<f64>>> = Vec::with_capacity(1 + polygon.interiors().len());
            rings.push(ring_coords(polygon.exterior()));
            rings.extend(polygon.interiors().iter().map(ring_coords));
            json!(rings)
        })
        .collect();
    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

fn ring_coords(ring: &geo::LineString<f64>) -> Vec<Vec<f64>> {
    ring.coords().map(|c| vec![c.x, c.y]).collect()
}
