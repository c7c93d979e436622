//! Decoder for the MapLibre Tile (MLT) columnar vector-tile container.
//!
//! An MLT tile stores each layer as a feature table of columns — geometry,
//! optional ids, properties — and each column as a run of typed, compressed
//! integer streams. This crate decodes those streams into in-memory vectors
//! and exposes the result through a lazy, access-pattern-adaptive feature
//! facade:
//!
//! - [`decode`] interprets stream metadata and applies the physical and
//!   logical decoding cascades;
//! - [`FeatureTable`] holds one decoded (or deferred) layer;
//! - [`FeatureTable::layer`] yields a [`VectorTileLayer`] whose features
//!   resolve their coordinates only when read, switching from per-feature to
//!   bulk decoding once the caller's access pattern looks like a scan.
//!
//! # Example
//!
//! ```ignore
//! use maplibre_tile::{FeatureTable, TableDescriptor};
//!
//! let (table, _) = FeatureTable::decode(tile, 0, &descriptor, true)?;
//! let layer = table.layer();
//! for feature in layer.iter() {
//!     let kind = feature.geometry_type()?; // never touches vertex data
//! }
//! ```

pub mod decode;

mod deferred;
pub use deferred::DeferredGeometryColumn;

mod error;
pub use error::DecodeError;

mod id;
pub use id::IdColumn;

mod layer;
pub use layer::{Feature, LayerIter, VectorTileLayer};

mod metadata;
pub use metadata::*;

mod property;
pub use property::{PropertyColumn, PropertyValue, ScalarColumn, StringColumn};

mod resolver;
pub use resolver::{CoordinatesResolver, ResolverStats};

mod table;
pub use table::{
    ColumnDescriptor, ColumnType, FeatureTable, GeometrySource, TableDescriptor, DEFAULT_EXTENT,
};

pub use mlt_vector::{
    Coordinates, FlatGeometryVector, GeometryType, GeometryVector, GpuGeometryVector,
    MortonSettings, Ring,
};

pub type Result<T> = core::result::Result<T, DecodeError>;
