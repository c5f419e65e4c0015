//! Service layer for request orchestration.
//!
//! Services sit between the input boundary (column tables, request strings)
//! and the algorithms. They resolve defaults from configuration, run the
//! computation stages in order and assemble serializable reports.

pub mod distance_distribution;
pub mod hotspot;
pub mod point_distance;

#[cfg(test)]
mod hotspot_tests;

pub use distance_distribution::{analyze_distance_distribution, DistanceDistribution};
pub use hotspot::{analyze_points, analyze_table, run_hotspot_analysis, HotspotReport, HotspotRequest};
pub use point_distance::{point_distance, PointDistance};
