//! Integer codecs used by the MapLibre tile container format.
//!
//! The tile format stores every column as a sequence of typed integer
//! streams. This crate provides the byte-level primitives those streams are
//! built from:
//!
//! - [`Cursor`]: a movable offset over an immutable byte buffer with varint,
//!   zig-zag and fixed-width reads;
//! - [`unpack`]: fixed-width bit unpacking with specialized routines for the
//!   common widths;
//! - [`fastpfor`]: the patched frame-of-reference block codec used for
//!   heavily compressed streams, plus the reference encoder.

mod cursor;
pub use cursor::*;

mod error;
pub use error::CodecError;

pub mod fastpfor;
pub mod unpack;

mod zigzag;
pub use zigzag::*;

pub type Result<T> = core::result::Result<T, CodecError>;
