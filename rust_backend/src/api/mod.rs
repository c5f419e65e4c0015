//! # API Module
//!
//! Serialization boundary for operation results. Bindings and other callers
//! render service results through [`render_json`] so every surface emits the
//! same `status`/`info` document shape.

pub mod types;

pub use types::{render_json, ResponseEnvelope};
