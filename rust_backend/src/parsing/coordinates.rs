//! Parsing of coordinate-pair requests.
//!
//! Two encodings are accepted:
//!
//! - JSON: `{"point1": [lat, lon], "point2": [lat, lon]}`
//! - simple: `"lat_lon,lat_lon"`, e.g. `"39.90923_116.397428,31.23039_121.473702"`

use serde::{Deserialize, Serialize};

use crate::core::domain::GeoPoint;
use crate::error::{AnalysisError, AnalysisResult};

/// Which encoding a coordinate pair arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Simple,
}

/// Two points parsed from a request string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    pub first: GeoPoint,
    pub second: GeoPoint,
    pub format: InputFormat,
}

#[derive(Deserialize)]
struct JsonPair {
    point1: [f64; 2],
    point2: [f64; 2],
}

/// Parses either supported encoding, detected by surrounding braces.
///
/// # Examples
///
/// ```
/// use geo_hotspot::parsing::coordinates::{parse_point_pair, InputFormat};
///
/// let pair = parse_point_pair("39.90923_116.397428,31.23039_121.473702").unwrap();
/// assert_eq!(pair.format, InputFormat::Simple);
/// assert_eq!(pair.second.longitude.value(), 121.473702);
///
/// let pair = parse_point_pair(r#"{"point1": [1.0, 2.0], "point2": [3.0, 4.0]}"#).unwrap();
/// assert_eq!(pair.format, InputFormat::Json);
/// ```
pub fn parse_point_pair(input: &str) -> AnalysisResult<PointPair> {
    let trimmed = input.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        parse_json_pair(trimmed)
    } else {
        parse_simple_pair(trimmed)
    }
}

fn parse_json_pair(input: &str) -> AnalysisResult<PointPair> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    let pair: JsonPair = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        AnalysisError::InvalidCoordinates {
            message: format!(
                "expected {{\"point1\": [latitude, longitude], \"point2\": [latitude, longitude]}} ({} at '{}')",
                e.inner(),
                e.path()
            ),
            input: input.to_string(),
        }
    })?;

    Ok(PointPair {
        first: GeoPoint::new(pair.point1[0], pair.point1[1]),
        second: GeoPoint::new(pair.point2[0], pair.point2[1]),
        format: InputFormat::Json,
    })
}

fn parse_simple_pair(input: &str) -> AnalysisResult<PointPair> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return Err(AnalysisError::InvalidCoordinates {
            message: format!("expected 'lat_lon,lat_lon', got '{}'", input),
            input: input.to_string(),
        });
    }

    Ok(PointPair {
        first: parse_simple_point(parts[0], "first")?,
        second: parse_simple_point(parts[1], "second")?,
        format: InputFormat::Simple,
    })
}

fn parse_simple_point(part: &str, ordinal: &str) -> AnalysisResult<GeoPoint> {
    let invalid = || AnalysisError::InvalidCoordinates {
        message: format!("{} point must be 'lat_lon', got '{}'", ordinal, part),
        input: part.to_string(),
    };

    let (lat, lon) = part.trim().split_once('_').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    Ok(GeoPoint::new(lat, lon))
}
