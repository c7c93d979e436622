//! In-memory geometry vectors decoded from MapLibre tiles.
//!
//! A geometry vector is the columnar form of one layer's geometries: a flat
//! vertex buffer plus up to three levels of topology offsets partitioning it
//! into features, parts and rings. This crate models those vectors and
//! reconstructs per-feature coordinate arrays from them, either for the
//! whole vector in one pass or for a single feature in isolation.

mod error;
pub use error::GeometryError;

mod geometry;
pub use geometry::*;

pub mod zorder;
pub use zorder::MortonSettings;

mod vector;
pub use vector::*;

mod convert;
mod single;

pub type Result<T> = core::result::Result<T, GeometryError>;
