//! Python bindings for the hotspot analysis functions.
//!
//! Every binding returns the JSON response document produced by
//! [`crate::api::render_json`]; analysis failures are reported inside that
//! document with `"status": "failure"` rather than raised as exceptions.
//!
//! ```python
//! import json, geo_hotspot
//!
//! doc = json.loads(geo_hotspot.hotspot_analysis_getis_ord_gi_star(
//!     [39.90, 39.91], [116.39, 116.40], [3.0, 5.0], distance_threshold=2000.0))
//! assert doc["status"] == "success"
//! ```

use pyo3::prelude::*;

use crate::api::render_json;
use crate::config::AnalysisConfig;
use crate::error::AnalysisResult;
use crate::io::ColumnTable;
use crate::services::{self, distance_distribution::describe_distances, HotspotReport, HotspotRequest};

const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";
const VALUE: &str = "value";

fn hotspot_from_lists(
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    values: Vec<f64>,
    distances: Option<Vec<f64>>,
    distance_threshold: Option<f64>,
) -> AnalysisResult<HotspotReport> {
    let config = AnalysisConfig::from_default_location();

    let mut table = ColumnTable::new()
        .with_numeric(LATITUDE, latitudes)?
        .with_numeric(LONGITUDE, longitudes)?
        .with_numeric(VALUE, values)?;
    if let Some(radii) = distances {
        table = table.with_numeric(config.hotspot.distance_column.clone(), radii)?;
    }

    let mut request = HotspotRequest::new(LATITUDE, LONGITUDE, VALUE);
    if let Some(meters) = distance_threshold {
        request = request.with_threshold(meters);
    }
    services::analyze_table(&table, &request, &config)
}

/// Getis-Ord Gi* hotspot analysis over parallel coordinate and value lists.
///
/// `distances` holds optional per-point catchment radii in meters and is
/// only used when `distance_threshold` is not given.
#[pyfunction]
#[pyo3(signature = (latitudes, longitudes, values, distances=None, distance_threshold=None))]
pub fn hotspot_analysis_getis_ord_gi_star(
    py: Python<'_>,
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    values: Vec<f64>,
    distances: Option<Vec<f64>>,
    distance_threshold: Option<f64>,
) -> String {
    py.detach(|| {
        render_json(hotspot_from_lists(
            latitudes,
            longitudes,
            values,
            distances,
            distance_threshold,
        ))
    })
}

/// Descriptive statistics and range histogram of a list of distances in meters.
#[pyfunction]
pub fn analyze_distance_distribution(distances: Vec<f64>) -> String {
    let config = AnalysisConfig::from_default_location();
    render_json(describe_distances(&distances, &config))
}

/// Distance between two points given as JSON or `"lat_lon,lat_lon"`.
#[pyfunction]
pub fn calculate_distance(coordinates: &str) -> String {
    render_json(services::point_distance(coordinates))
}

/// Geo Hotspot - Getis-Ord Gi* spatial hotspot analysis
#[pymodule]
fn geo_hotspot(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(hotspot_analysis_getis_ord_gi_star, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_distance_distribution, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_distance, m)?)?;
    Ok(())
}
