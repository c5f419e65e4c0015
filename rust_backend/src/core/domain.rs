//! Domain models for geographic points and hotspot classifications.
//!
//! A [`PointSet`] is the immutable input snapshot of one analysis run: every
//! point carries a position in degrees and the numeric attribute under study,
//! optionally accompanied by a per-point catchment radius in meters.

use qtty::{Degrees, Meters};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AnalysisError, AnalysisResult};

/// A position on the Earth's surface in geographic degrees.
///
/// # Examples
///
/// ```
/// use geo_hotspot::core::domain::GeoPoint;
///
/// let beijing = GeoPoint::new(39.90923, 116.397428);
/// assert_eq!(beijing.latitude.value(), 39.90923);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        }
    }
}

/// One input observation: a location and the attribute value measured there.
///
/// `index` is the 0-based position of the record in input order and is the
/// key used by every matrix in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    pub index: usize,
    pub location: GeoPoint,
    pub value: f64,
}

/// Validated, immutable collection of points for one analysis run.
///
/// Construction checks that the coordinate and value arrays have equal
/// lengths; the optional catchment radii (one per point) must match too.
///
/// # Examples
///
/// ```
/// use geo_hotspot::core::domain::PointSet;
///
/// let points = PointSet::from_columns(
///     &[39.9, 39.91],
///     &[116.39, 116.40],
///     &[3.0, 5.0],
/// ).unwrap();
///
/// assert_eq!(points.len(), 2);
/// assert!(points.radii().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PointSet {
    records: Vec<PointRecord>,
    radii: Option<Vec<Meters>>,
}

impl PointSet {
    /// Builds a point set from parallel latitude, longitude and value arrays.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`] when the arrays differ in length.
    pub fn from_columns(
        latitudes: &[f64],
        longitudes: &[f64],
        values: &[f64],
    ) -> AnalysisResult<Self> {
        let n = latitudes.len();
        check_length("longitude", n, longitudes.len())?;
        check_length("value", n, values.len())?;

        let records = latitudes
            .iter()
            .zip(longitudes)
            .zip(values)
            .enumerate()
            .map(|(index, ((&lat, &lon), &value))| PointRecord {
                index,
                location: GeoPoint::new(lat, lon),
                value,
            })
            .collect();

        Ok(Self {
            records,
            radii: None,
        })
    }

    /// Attaches a per-point catchment radius, in meters.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`] when `radii` does not have one
    /// entry per point.
    pub fn with_radii(mut self, radii: &[f64]) -> AnalysisResult<Self> {
        check_length("distance", self.records.len(), radii.len())?;
        self.radii = Some(radii.iter().copied().map(Meters::new).collect());
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }

    /// Per-point catchment radii, if the input carried them.
    pub fn radii(&self) -> Option<&[Meters]> {
        self.radii.as_deref()
    }

    /// Attribute values in input order.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    pub fn locations(&self) -> Vec<GeoPoint> {
        self.records.iter().map(|r| r.location).collect()
    }
}

fn check_length(column: &str, expected: usize, found: usize) -> AnalysisResult<()> {
    if expected != found {
        return Err(AnalysisError::LengthMismatch {
            column: column.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

/// Significance class of a point at the fixed 99% confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotLabel {
    Hotspot,
    Coldspot,
    NotSignificant,
}

impl fmt::Display for HotspotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HotspotLabel::Hotspot => "hotspot",
            HotspotLabel::Coldspot => "coldspot",
            HotspotLabel::NotSignificant => "not_significant",
        };
        f.write_str(label)
    }
}

/// Per-point output of the Gi* analysis.
///
/// `gi_star` and `z_score` always hold the same number: the statistic is
/// already on a standard-normal scale. Both keys are kept for consumers that
/// read either one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotResult {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
    pub gi_star: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub label: HotspotLabel,
    pub neighbor_count: usize,
}
