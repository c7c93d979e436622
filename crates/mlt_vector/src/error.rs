/// Errors raised while interpreting a geometry vector.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// A feature index outside the vector was requested
    #[error("Geometry index {index} out of range for a vector of {len} geometries")]
    OutOfRange { index: usize, len: usize },

    /// A geometry type discriminant outside the enumerated set
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(u32),

    /// A Morton vertex buffer without its `{numBits, coordinateShift}` settings
    #[error("Morton-encoded vertex buffer is missing its Morton settings")]
    MissingMortonSettings,

    /// Topology offsets that do not cover the structures they should
    #[error("Inconsistent topology: {0}")]
    MalformedTopology(&'static str),
}
