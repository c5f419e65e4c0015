//! Core domain models for spatial hotspot analysis.
//!
//! This module defines the fundamental data structures used throughout the crate,
//! representing geographic points, the validated point set an analysis runs on,
//! and the per-point results it produces.

pub mod domain;

pub use domain::{GeoPoint, HotspotLabel, HotspotResult, PointRecord, PointSet};
