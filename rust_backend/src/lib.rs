//! Geo Hotspot - Getis-Ord Gi* spatial hotspot analysis
//!
//! Given geographic points carrying a numeric attribute, the crate finds the
//! statistically significant spatial clusters of high values (hotspots) and
//! low values (coldspots) at the 99% confidence level.
//!
//! The pipeline runs in fixed stages: pairwise haversine distances, a binary
//! weight matrix under a fixed or per-point distance threshold, global
//! statistics of the attribute, the local Gi* statistic per point and its
//! classification.
//!
//! # Example
//!
//! ```
//! use geo_hotspot::config::AnalysisConfig;
//! use geo_hotspot::core::PointSet;
//! use geo_hotspot::services::analyze_points;
//! use qtty::Meters;
//!
//! let points = PointSet::from_columns(
//!     &[39.900, 39.901, 39.950],
//!     &[116.390, 116.391, 116.500],
//!     &[10.0, 12.0, 1.0],
//! ).unwrap();
//!
//! let report = analyze_points(&points, Some(Meters::new(500.0)), &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.count, 3);
//! assert_eq!(report.results[0].neighbor_count, 1);
//! assert_eq!(report.results[2].neighbor_count, 0);
//! ```

pub mod algorithms;
pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod services;

#[cfg(feature = "python")]
pub mod python;

pub use crate::api::{render_json, ResponseEnvelope};
pub use crate::config::AnalysisConfig;
pub use crate::core::{GeoPoint, HotspotLabel, HotspotResult, PointSet};
pub use crate::error::{AnalysisError, AnalysisResult};
pub use crate::services::{HotspotReport, HotspotRequest};
