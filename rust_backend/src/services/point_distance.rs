use qtty::{Kilometer, Meter};
use serde::Serialize;

use crate::algorithms::geodesic::geodesic_distance;
use crate::core::domain::GeoPoint;
use crate::error::AnalysisResult;
use crate::parsing::coordinates::{parse_point_pair, InputFormat};

/// An echoed input point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoedPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for EchoedPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude.value(),
            longitude: point.longitude.value(),
        }
    }
}

/// Ellipsoidal distance between two requested points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointDistance {
    pub distance_km: f64,
    pub distance_m: f64,
    pub point1: EchoedPoint,
    pub point2: EchoedPoint,
    pub input_format: InputFormat,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Parses a coordinate pair and measures the WGS-84 geodesic distance between the points.
///
/// # Examples
///
/// ```
/// use geo_hotspot::services::point_distance::point_distance;
///
/// let result = point_distance("39.90923_116.397428,31.23039_121.473702").unwrap();
/// assert!((result.distance_km - 1067.0).abs() < 10.0);
/// ```
pub fn point_distance(input: &str) -> AnalysisResult<PointDistance> {
    let pair = parse_point_pair(input)?;
    let distance = geodesic_distance(&pair.first, &pair.second);

    Ok(PointDistance {
        distance_km: round2(distance.to::<Kilometer>().value()),
        distance_m: round2(distance.to::<Meter>().value()),
        point1: pair.first.into(),
        point2: pair.second.into(),
        input_format: pair.format,
    })
}
