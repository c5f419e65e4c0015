//! Spatial statistics algorithms.
//!
//! The hotspot pipeline flows leaf-first through these modules; no module
//! depends on a later one.
//!
//! # Components
//!
//! - [`distance`]: Haversine distances and the dense pairwise distance matrix
//! - [`geodesic`]: WGS-84 geodesic distance for single point pairs
//! - [`weights`]: Threshold policies and the binary spatial weight matrix
//! - [`statistics`]: Global moments, normal CDF, descriptive summaries
//! - [`getis_ord`]: Local Gi* statistic per point
//! - [`classification`]: Hotspot / coldspot labelling
//!
//! # Example
//!
//! ```
//! use geo_hotspot::algorithms::{
//!     classify, compute_all, DistanceMatrix, GlobalStats, ThresholdPolicy, WeightMatrix,
//! };
//! use geo_hotspot::core::domain::GeoPoint;
//! use qtty::Meters;
//!
//! let points = [GeoPoint::new(30.0, 120.0), GeoPoint::new(30.001, 120.0)];
//! let values = [1.0, 2.0];
//!
//! let distances = DistanceMatrix::build(&points).unwrap();
//! let weights = WeightMatrix::build(&distances, &ThresholdPolicy::Fixed(Meters::new(500.0))).unwrap();
//! let stats = GlobalStats::compute(&values);
//! let local = compute_all(&weights, &values, &stats);
//!
//! assert_eq!(local[0].neighbor_count, 1);
//! println!("{}", classify(local[0].z_score));
//! ```

pub mod classification;
pub mod distance;
pub mod geodesic;
pub mod getis_ord;
pub mod statistics;
pub mod weights;

pub use classification::{classify, CRITICAL_Z_99};
pub use distance::{haversine, DistanceMatrix, EARTH_RADIUS};
pub use geodesic::{geodesic_distance, Ellipsoid};
pub use getis_ord::{compute_all, local_statistic, LocalStatistic};
pub use statistics::{two_tailed_p_value, DistanceSummary, GlobalStats};
pub use weights::{AppliedThreshold, ThresholdPolicy, WeightMatrix, DEFAULT_DISTANCE_THRESHOLD};
