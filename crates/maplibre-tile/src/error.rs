/// Errors raised while decoding a tile or serving feature accessors.
///
/// Decoding never yields partial results: any error aborts the current
/// decode or accessor call.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Codec(#[from] mlt_codec::CodecError),

    #[error(transparent)]
    Geometry(#[from] mlt_vector::GeometryError),

    /// The feature table has neither a geometry vector nor a deferred column
    #[error("Feature table has no geometry column")]
    MissingGeometry,

    /// A stream metadata field carried a value outside its enumeration
    #[error("Invalid '{0}' - got '{1}'")]
    InvalidField(&'static str, String),

    /// A stream decoder left the cursor somewhere other than
    /// `stream start + byteLength`
    #[error("Stream consumed {consumed} bytes, metadata declared {declared}")]
    StreamLengthMismatch { consumed: usize, declared: usize },

    /// Stream contents that cannot be interpreted as declared
    #[error("Malformed stream: {0}")]
    MalformedStream(&'static str),

    /// A feature index outside `[0, numFeatures)`
    #[error("Feature index {index} out of range for a layer of {len} features")]
    OutOfRange { index: usize, len: usize },

    #[error("UTF-8 error - {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
