use geo::{LineString, MultiPolygon, Polygon, Simplify};

use super::Atlas;

impl Atlas {
    /// Simplify every boundary in place with the Douglas-Peucker algorithm.
    ///
    /// Simplification affects geometry only: the feature count and the
    /// id → geometry pairing are untouched. The deviation of the output
    /// boundary from the input is bounded by `tolerance` per segment; this
    /// is a visual-only approximation, so self-intersections are acceptable.
    pub fn simplify(&mut self, tolerance: f64) {
        for mp in &mut self.geoms {
            *mp = simplify_multipolygon(mp, tolerance);
        }
    }
}

/// Simplify a MultiPolygon using the Douglas-Peucker algorithm.
fn simplify_multipolygon(mp: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    let simplified_polygons: Vec<Polygon<f64>> = mp
        .0
        .iter()
        .map(|poly| {
            let simplified_exterior = poly.exterior().simplify(&tolerance);
            let simplified_interiors: Vec<LineString<f64>> = poly
                .interiors()
                .iter()
                .map(|ring| ring.simplify(&tolerance))
                .collect();
            Polygon::new(simplified_exterior, simplified_interiors)
        })
        .collect();
    MultiPolygon(simplified_polygons)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::{Coord, LineString, MultiPolygon, Polygon};

    use super::*;
    use crate::atlas::SIMPLIFY_TOLERANCE;

    fn square_with_detour() -> MultiPolygon<f64> {
        // Unit square with one extra vertex deviating 0.001 from the
        // bottom edge, well inside the fixed tolerance.
        let exterior = LineString(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.5, y: 0.001 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 0.0, y: 0.0 },
        ]);
        MultiPolygon(vec![Polygon::new(exterior, vec![])])
    }

    #[test]
    fn removes_vertices_within_tolerance() {
        let simplified = simplify_multipolygon(&square_with_detour(), SIMPLIFY_TOLERANCE);
        let exterior = simplified.0[0].exterior();
        assert_eq!(exterior.0.len(), 5);
        assert!(!exterior.0.contains(&Coord { x: 0.5, y: 0.001 }));
    }

    #[test]
    fn keeps_vertices_beyond_tolerance() {
        let simplified = simplify_multipolygon(&square_with_detour(), 0.0001);
        assert_eq!(simplified.0[0].exterior().0.len(), 6);
    }

    #[test]
    fn preserves_feature_count_and_pairing() {
        let mut atlas = Atlas {
            ids: vec![Arc::from("3550308"), Arc::from("3304557")],
            geoms: vec![square_with_detour(), square_with_detour()],
        };
        atlas.simplify(SIMPLIFY_TOLERANCE);
        assert_eq!(atlas.len(), 2);
        assert_eq!(&*atlas.ids[0], "3550308");
        assert_eq!(&*atlas.ids[1], "3304557");
        assert_eq!(atlas.geoms.len(), 2);
    }
}
