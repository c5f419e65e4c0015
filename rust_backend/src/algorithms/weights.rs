//! Binary spatial weight matrices.
//!
//! A point `j` is a neighbor of point `i` when their great-circle distance is
//! within the radius that governs row `i`. Under [`ThresholdPolicy::Fixed`]
//! every row shares one radius and the matrix is symmetric; under
//! [`ThresholdPolicy::PerPoint`] each row uses its own point's radius, so `j`
//! may neighbor `i` without `i` neighboring `j`. The diagonal is always zero.

use qtty::Meters;
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::algorithms::distance::{allocate_square, DistanceMatrix};
use crate::error::{AnalysisError, AnalysisResult, Stage};

/// Fixed radius used when the caller supplies neither a threshold nor per-point radii.
pub const DEFAULT_DISTANCE_THRESHOLD: Meters = Meters::new(1000.0);

/// Marker echoed in place of a scalar threshold under the per-point policy.
pub const VARIABLE_THRESHOLD_MARKER: &str = "variable (from data)";

/// Neighborhood radius policy, resolved once before the weight matrix is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdPolicy {
    /// One radius for every point.
    Fixed(Meters),
    /// Each point's own catchment radius decides its neighbors.
    PerPoint(Vec<Meters>),
}

impl ThresholdPolicy {
    /// Chooses the policy for a request.
    ///
    /// An explicit threshold always wins. Without one, per-point radii select
    /// the variable policy; with neither, `default` is used as a fixed radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_hotspot::algorithms::weights::{ThresholdPolicy, DEFAULT_DISTANCE_THRESHOLD};
    /// use qtty::Meters;
    ///
    /// let radii = [Meters::new(50.0), Meters::new(80.0)];
    /// let policy = ThresholdPolicy::resolve(None, Some(&radii), DEFAULT_DISTANCE_THRESHOLD);
    /// assert!(matches!(policy, ThresholdPolicy::PerPoint(_)));
    ///
    /// let policy = ThresholdPolicy::resolve(None, None, DEFAULT_DISTANCE_THRESHOLD);
    /// assert_eq!(policy, ThresholdPolicy::Fixed(Meters::new(1000.0)));
    /// ```
    pub fn resolve(requested: Option<Meters>, radii: Option<&[Meters]>, default: Meters) -> Self {
        match (requested, radii) {
            (Some(threshold), _) => ThresholdPolicy::Fixed(threshold),
            (None, Some(radii)) => ThresholdPolicy::PerPoint(radii.to_vec()),
            (None, None) => ThresholdPolicy::Fixed(default),
        }
    }

    /// What gets reported back to the caller.
    pub fn applied(&self) -> AppliedThreshold {
        match self {
            ThresholdPolicy::Fixed(threshold) => AppliedThreshold::Fixed(*threshold),
            ThresholdPolicy::PerPoint(_) => AppliedThreshold::Variable,
        }
    }

    fn radius_for(&self, row: usize) -> f64 {
        match self {
            ThresholdPolicy::Fixed(threshold) => threshold.value(),
            ThresholdPolicy::PerPoint(radii) => radii[row].value(),
        }
    }
}

/// The threshold actually applied by an analysis run.
///
/// Serializes as the radius in meters, or as the string
/// `"variable (from data)"` for the per-point policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppliedThreshold {
    Fixed(Meters),
    Variable,
}

impl fmt::Display for AppliedThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedThreshold::Fixed(threshold) => write!(f, "{} m", threshold.value()),
            AppliedThreshold::Variable => f.write_str(VARIABLE_THRESHOLD_MARKER),
        }
    }
}

impl Serialize for AppliedThreshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AppliedThreshold::Fixed(threshold) => serializer.serialize_f64(threshold.value()),
            AppliedThreshold::Variable => serializer.serialize_str(VARIABLE_THRESHOLD_MARKER),
        }
    }
}

/// Dense `n × n` 0/1 adjacency matrix, row-major.
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    n: usize,
    data: Vec<u8>,
}

impl WeightMatrix {
    /// Thresholds `distances` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`] when a per-point policy does
    /// not carry one radius per point, and [`AnalysisError::Allocation`] when
    /// the matrix cannot be reserved.
    pub fn build(distances: &DistanceMatrix, policy: &ThresholdPolicy) -> AnalysisResult<Self> {
        let n = distances.len();
        if let ThresholdPolicy::PerPoint(radii) = policy {
            if radii.len() != n {
                return Err(AnalysisError::LengthMismatch {
                    column: "distance".to_string(),
                    expected: n,
                    found: radii.len(),
                });
            }
        }

        let mut data: Vec<u8> = allocate_square(n, Stage::WeightMatrix)?;
        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                let radius = policy.radius_for(i);
                for (j, (cell, &d)) in row.iter_mut().zip(distances.row(i)).enumerate() {
                    *cell = u8::from(i != j && d <= radius);
                }
            });
        }

        Ok(Self { n, data })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// `true` when point `j` is a neighbor of point `i`.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.data[i * self.n + j] == 1
    }

    pub fn row(&self, i: usize) -> &[u8] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Number of neighbors of point `i` (its row sum).
    pub fn neighbor_count(&self, i: usize) -> usize {
        self.row(i).iter().map(|&w| usize::from(w)).sum()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
