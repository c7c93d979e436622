//! Decoding of a geometry column's stream run into a [`FlatGeometryVector`].
//!
//! The first stream is always the geometry-type stream; the remaining
//! streams are dispatched on their physical and logical stream types:
//! LENGTH streams build the topology offset buffers, OFFSET streams the
//! vertex dictionary, DATA streams the vertex buffer itself.

use mlt_codec::Cursor;
use mlt_vector::{
    FlatGeometryVector, GeometryError, GeometryType, GeometryTypes, Topology, VertexBuffer,
    VertexBufferType,
};

use super::{
    decode_const_u32_stream, decode_i32_stream, decode_length_stream_to_offsets,
    decode_u32_stream,
};
use crate::{
    DecodeError, DictionaryType, LengthType, PhysicalStreamType, Result, StreamMetadata,
    VectorType,
};

pub fn decode_geometry_column(
    cursor: &mut Cursor,
    num_streams: usize,
    num_features: usize,
) -> Result<FlatGeometryVector> {
    if num_streams == 0 {
        return Err(DecodeError::MalformedStream("geometry column without streams"));
    }

    let metadata = StreamMetadata::decode(cursor)?;
    let geometry_types = if metadata.vector_type() == VectorType::Const {
        let raw = decode_const_u32_stream(cursor, &metadata)?;
        GeometryTypes::single(GeometryType::from_raw(raw)?, num_features)
    } else {
        GeometryTypes::from_raw(&decode_u32_stream(cursor, &metadata)?)?
    };

    let mut topology = Topology::default();
    let mut vertices = VertexBuffer::default();
    for _ in 1..num_streams {
        let metadata = StreamMetadata::decode(cursor)?;
        match metadata.physical_stream_type {
            PhysicalStreamType::Length => match metadata.length_type() {
                Some(LengthType::Geometries) => {
                    topology.geometry_offsets =
                        Some(decode_length_stream_to_offsets(cursor, &metadata)?);
                }
                Some(LengthType::Parts) => {
                    topology.part_offsets =
                        Some(decode_length_stream_to_offsets(cursor, &metadata)?);
                }
                Some(LengthType::Rings) => {
                    topology.ring_offsets =
                        Some(decode_length_stream_to_offsets(cursor, &metadata)?);
                }
                Some(LengthType::Triangles) => {
                    // tessellation data, not needed for coordinate decode
                    log::debug!("skipping triangle length stream");
                    let _ = decode_u32_stream(cursor, &metadata)?;
                }
                other => {
                    return Err(DecodeError::InvalidField(
                        "geometry length stream",
                        format!("{other:?}"),
                    ));
                }
            },
            PhysicalStreamType::Offset => {
                vertices.offsets = decode_u32_stream(cursor, &metadata)?;
            }
            PhysicalStreamType::Data => match metadata.dictionary_type() {
                None | Some(DictionaryType::None) | Some(DictionaryType::Vertex) => {
                    vertices.data = decode_i32_stream(cursor, &metadata)?;
                    vertices.kind = VertexBufferType::Vec2;
                }
                Some(DictionaryType::Morton) => {
                    vertices.data = decode_u32_stream(cursor, &metadata)?
                        .into_iter()
                        .map(|code| code as i32)
                        .collect();
                    vertices.kind = VertexBufferType::Morton;
                    vertices.morton =
                        Some(metadata.morton.ok_or(GeometryError::MissingMortonSettings)?);
                }
                other => {
                    return Err(DecodeError::InvalidField(
                        "geometry data stream",
                        format!("{other:?}"),
                    ));
                }
            },
            PhysicalStreamType::Present => {
                return Err(DecodeError::InvalidField(
                    "geometry stream",
                    "PRESENT".to_string(),
                ));
            }
        }
    }
    log::debug!(
        "decoded geometry column: {num_features} features, {} vertices",
        match vertices.kind {
            VertexBufferType::Vec2 => vertices.data.len() / 2,
            VertexBufferType::Morton => vertices.data.len(),
        }
    );
    Ok(FlatGeometryVector::new(geometry_types, topology, vertices))
}
