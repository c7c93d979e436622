//! The deferred geometry column: geometry-type queries without vertex decode.

use std::cell::OnceCell;
use std::sync::Arc;

use mlt_codec::Cursor;
use mlt_vector::{FlatGeometryVector, GeometryType, GeometryTypes};

use crate::decode::{decode_const_u32_stream, decode_geometry_column, decode_u32_stream};
use crate::{DecodeError, Result, StreamMetadata, VectorType};

/// A geometry column whose streams have been located but not decoded.
///
/// Holds the shared tile bytes and the byte offset of the column's first
/// stream. Geometry-type queries decode only the type stream, once; the full
/// column is decoded on [`decode`](Self::decode), after which the owner
/// should drop this value so the tile bytes can be freed.
#[derive(Debug, Clone)]
pub struct DeferredGeometryColumn {
    tile: Arc<[u8]>,
    offset: usize,
    num_streams: usize,
    num_features: usize,
    geometry_types: OnceCell<GeometryTypes>,
}

impl DeferredGeometryColumn {
    pub fn new(tile: Arc<[u8]>, offset: usize, num_streams: usize, num_features: usize) -> Self {
        Self {
            tile,
            offset,
            num_streams,
            num_features,
            geometry_types: OnceCell::new(),
        }
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// The geometry kind of feature `index`. Decodes the type stream on the
    /// first call and answers from the cache afterwards; vertex streams are
    /// never touched.
    pub fn geometry_type(&self, index: usize) -> Result<GeometryType> {
        if index >= self.num_features {
            return Err(DecodeError::OutOfRange {
                index,
                len: self.num_features,
            });
        }
        if self.geometry_types.get().is_none() {
            let types = self.decode_types()?;
            let _ = self.geometry_types.set(types);
        }
        self.geometry_types
            .get()
            .ok_or(DecodeError::MissingGeometry)?
            .get(index)
            .map_err(Into::into)
    }

    fn decode_types(&self) -> Result<GeometryTypes> {
        let mut cursor = Cursor::new(&self.tile);
        cursor.set_offset(self.offset)?;
        let metadata = StreamMetadata::decode(&mut cursor)?;
        if metadata.vector_type() == VectorType::Const {
            let raw = decode_const_u32_stream(&mut cursor, &metadata)?;
            Ok(GeometryTypes::single(
                mlt_vector::GeometryType::from_raw(raw)?,
                self.num_features,
            ))
        } else {
            GeometryTypes::from_raw(&decode_u32_stream(&mut cursor, &metadata)?).map_err(Into::into)
        }
    }

    /// Decodes the whole column.
    pub fn decode(&self) -> Result<FlatGeometryVector> {
        let mut cursor = Cursor::new(&self.tile);
        cursor.set_offset(self.offset)?;
        decode_geometry_column(&mut cursor, self.num_streams, self.num_features)
    }
}
