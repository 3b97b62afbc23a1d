//! Route geometry returned by the trip backend.
//!
//! The backend sends either an encoded flexible-polyline string or a list of
//! `[lat, lng]` pairs. Decoding the string form is left to the map layer; the
//! planner only carries it through.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A route as decoded (latitude, longitude) points.
///
/// Serializes as a list of `[lat, lng]` pairs. When deserializing, points may
/// carry extra values (altitude, for instance); only the first two are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Wraps already decoded points, each a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Borrows the points in route order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline, handing back its points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

impl<'de> Deserialize<'de> for Polyline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<Vec<f64>>::deserialize(deserializer)?;
        let points = raw
            .iter()
            .map(|point| match point.as_slice() {
                [lat, lon, ..] => Ok((*lat, *lon)),
                _ => Err(D::Error::invalid_length(point.len(), &"at least two coordinates")),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(points))
    }
}

/// Geometry in whichever form the backend chose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteGeometry {
    Encoded(String),
    Points(Polyline),
}

impl RouteGeometry {
    /// Decoded points, when the backend sent them.
    pub fn points(&self) -> Option<&[(f64, f64)]> {
        match self {
            RouteGeometry::Encoded(_) => None,
            RouteGeometry::Points(polyline) => Some(polyline.points()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_points() {
        let points = vec![(-23.55, -46.63), (-22.90, -47.06)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
        assert_eq!(polyline.into_points(), points);
    }

    #[test]
    fn test_deserialize_point_list() {
        let geometry: RouteGeometry =
            serde_json::from_str("[[-23.55, -46.63], [-22.9, -47.06]]").unwrap();
        assert_eq!(geometry.points(), Some(&[(-23.55, -46.63), (-22.9, -47.06)][..]));
    }

    #[test]
    fn test_deserialize_keeps_first_two_values() {
        let geometry: RouteGeometry =
            serde_json::from_str("[[-23.55, -46.63, 760.0], [-22.9, -47.06, 685.5]]").unwrap();
        assert_eq!(geometry.points(), Some(&[(-23.55, -46.63), (-22.9, -47.06)][..]));
    }

    #[test]
    fn test_deserialize_rejects_short_point() {
        let result = serde_json::from_str::<Polyline>("[[-23.55, -46.63], [-22.9]]");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_encoded() {
        let geometry: RouteGeometry = serde_json::from_str("\"BFoz5xJ67i1B1B7PzIhaxL7Y\"").unwrap();
        assert_eq!(
            geometry,
            RouteGeometry::Encoded("BFoz5xJ67i1B1B7PzIhaxL7Y".to_string())
        );
        assert!(geometry.points().is_none());
    }

    #[test]
    fn test_serialize_points_as_pairs() {
        let geometry = RouteGeometry::Points(Polyline::new(vec![(1.5, 2.5)]));
        assert_eq!(serde_json::to_string(&geometry).unwrap(), "[[1.5,2.5]]");
    }
}
