//! Tabular input handed over by the ingestion layer.
//!
//! File parsing and format detection happen upstream; this module only
//! receives named columns, coerces them to `f64` and validates them into the
//! [`PointSet`](crate::core::domain::PointSet) the analysis core consumes.
//!
//! # Example
//!
//! ```
//! use geo_hotspot::io::ColumnTable;
//!
//! let table = ColumnTable::new()
//!     .with_numeric("lat", vec![39.9, 39.91]).unwrap()
//!     .with_numeric("lon", vec![116.39, 116.40]).unwrap()
//!     .with_text("sales", ["12", "15.5"]).unwrap();
//!
//! let points = table.point_set("lat", "lon", "sales", Some("distance")).unwrap();
//! assert_eq!(points.values(), vec![12.0, 15.5]);
//! ```

pub mod table;

#[cfg(test)]
mod table_tests;

pub use table::{Column, ColumnTable};
