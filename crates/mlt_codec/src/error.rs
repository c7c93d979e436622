/// Errors raised by the byte-level codecs.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A varint ran past the end of the buffer or used more bytes than the
    /// target type can hold
    #[error("Truncated or overlong varint at offset {0}")]
    TruncatedVarint(usize),

    /// A fixed-width read ran past the end of the buffer
    #[error("Unexpected end of buffer: needed {needed} bytes at offset {offset}")]
    UnexpectedEndOfBuffer { offset: usize, needed: usize },

    /// A cursor was moved beyond the end of the buffer
    #[error("Offset {offset} is out of bounds for a buffer of {len} bytes")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// A bit width outside 0..=32 was requested
    #[error("Invalid bit width: {0}")]
    InvalidBitWidth(u32),

    /// A block header referenced an exception stream outside 1..=32
    #[error("Invalid exception bit width: {0}")]
    InvalidExceptionBitWidth(i64),

    /// A block header declared more exceptions than its exception stream holds
    #[error("Exception count does not match exception stream length for width {0}")]
    ExceptionCountMismatch(u32),

    /// The stream header declares an aligned count that is not a whole
    /// number of blocks
    #[error("Aligned value count {0} is not a multiple of the block size")]
    MisalignedHeader(usize),

    /// The packed block bodies of a page do not end where the page header
    /// says the metadata section starts
    #[error("Page body length disagrees with the page header")]
    PageBodyMismatch,
}
