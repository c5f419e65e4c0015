//! Great-circle distances between geographic points.
//!
//! Distances use the haversine formula on a sphere of Earth's mean radius.
//! No ellipsoidal correction is applied.

use qtty::{Meters, Radian};
use rayon::prelude::*;

use crate::core::domain::GeoPoint;
use crate::error::{AnalysisError, AnalysisResult, Stage};

/// Earth's mean radius.
pub const EARTH_RADIUS: Meters = Meters::new(6_371_000.0);

/// Haversine great-circle distance between two points.
///
/// # Examples
///
/// ```
/// use geo_hotspot::algorithms::distance::haversine;
/// use geo_hotspot::core::domain::GeoPoint;
///
/// let beijing = GeoPoint::new(39.90923, 116.397428);
/// let shanghai = GeoPoint::new(31.23039, 121.473702);
/// let km = haversine(&beijing, &shanghai).value() / 1000.0;
/// assert!((km - 1067.0).abs() < 10.0);
/// ```
pub fn haversine(a: &GeoPoint, b: &GeoPoint) -> Meters {
    let lat1 = a.latitude.to::<Radian>().value();
    let lat2 = b.latitude.to::<Radian>().value();
    let dlat = lat2 - lat1;
    let dlon = b.longitude.to::<Radian>().value() - a.longitude.to::<Radian>().value();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push h marginally past 1 for antipodal points
    let central_angle = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS * central_angle
}

/// Dense `n × n` matrix of pairwise great-circle distances, row-major, in meters.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes every pairwise distance.
    ///
    /// Each unordered pair is evaluated with the lower index first, so the
    /// matrix is exactly symmetric. Rows are filled in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Allocation`] when the `n × n` buffer cannot be
    /// reserved.
    pub fn build(points: &[GeoPoint]) -> AnalysisResult<Self> {
        let n = points.len();
        let mut data = allocate_square(n, Stage::DistanceMatrix)?;

        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = match i.cmp(&j) {
                        std::cmp::Ordering::Equal => 0.0,
                        std::cmp::Ordering::Less => haversine(&points[i], &points[j]).value(),
                        std::cmp::Ordering::Greater => haversine(&points[j], &points[i]).value(),
                    };
                }
            });
        }

        Ok(Self { n, data })
    }

    /// Number of points (the matrix is `len() × len()`).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> Meters {
        Meters::new(self.data[i * self.n + j])
    }

    /// Distances from point `i` to every point, in meters.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Reserves a zeroed `n × n` buffer, reporting failure against `stage`.
pub(crate) fn allocate_square<T: Clone + Default>(n: usize, stage: Stage) -> AnalysisResult<Vec<T>> {
    let len = n
        .checked_mul(n)
        .ok_or(AnalysisError::Allocation { stage, n })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| AnalysisError::Allocation { stage, n })?;
    data.resize(len, T::default());
    Ok(data)
}
