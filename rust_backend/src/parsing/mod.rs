//! Parsers for request strings.
//!
//! - [`coordinates`]: Parse a pair of points from JSON or `lat_lon,lat_lon` form

pub mod coordinates;

pub use coordinates::{parse_point_pair, InputFormat, PointPair};
