//! Decoding of id and scalar/string property columns.
//!
//! Nullable columns lead with a PRESENT stream and store one value per
//! present feature; values are expanded to dense `Option`s here so feature
//! access stays O(1).

use mlt_codec::Cursor;

use super::{
    decode_boolean_stream, decode_const_u32_stream, decode_const_u64_stream, decode_i32_stream,
    decode_i64_stream, decode_length_stream_to_offsets, decode_sequence_stream,
    decode_u32_stream, decode_u64_stream,
};
use crate::{
    ColumnDescriptor, ColumnType, DecodeError, IdColumn, PhysicalLevelTechnique,
    PhysicalStreamType, PropertyColumn, Result, ScalarColumn, StreamMetadata, StringColumn,
    VectorType,
};

pub fn decode_id_column(
    cursor: &mut Cursor,
    descriptor: &ColumnDescriptor,
    num_streams: usize,
    num_features: usize,
) -> Result<IdColumn> {
    let wide = descriptor.column_type == ColumnType::Id64;
    let (present, metadata) = leading_present_stream(cursor, num_streams, num_features)?;

    if present.is_some() {
        let values = if wide {
            decode_u64_stream(cursor, &metadata)?
        } else {
            decode_u32_stream(cursor, &metadata)?
                .into_iter()
                .map(u64::from)
                .collect()
        };
        return Ok(IdColumn::dense(dense(values, present, num_features)?));
    }

    let column = match metadata.vector_type() {
        VectorType::Const => {
            let value = if wide {
                decode_const_u64_stream(cursor, &metadata)?
            } else {
                u64::from(decode_const_u32_stream(cursor, &metadata)?)
            };
            IdColumn::constant(value, num_features)
        }
        VectorType::Sequence if metadata.physical_technique == PhysicalLevelTechnique::Varint => {
            let (base, delta) = decode_sequence_stream(cursor, &metadata)?;
            IdColumn::sequence(base, delta, num_features)
        }
        _ => {
            if wide {
                let values = decode_u64_stream(cursor, &metadata)?;
                expect_len(values.len(), num_features)?;
                IdColumn::from_u64s(values)
            } else {
                let values = decode_u32_stream(cursor, &metadata)?;
                expect_len(values.len(), num_features)?;
                IdColumn::from_u32s(values)
            }
        }
    };
    Ok(column)
}

pub fn decode_property_column(
    cursor: &mut Cursor,
    descriptor: &ColumnDescriptor,
    num_streams: usize,
    num_features: usize,
) -> Result<PropertyColumn> {
    let (present, metadata) = leading_present_stream(cursor, num_streams, num_features)?;
    let name = descriptor.name.clone();

    let column = match descriptor.column_type {
        ColumnType::Bool => PropertyColumn::Bool(ScalarColumn {
            name,
            values: dense(
                decode_boolean_stream(cursor, &metadata)?,
                present,
                num_features,
            )?,
        }),
        ColumnType::Int32 => PropertyColumn::Int32(ScalarColumn {
            name,
            values: dense(decode_i32_stream(cursor, &metadata)?, present, num_features)?,
        }),
        ColumnType::UInt32 => PropertyColumn::UInt32(ScalarColumn {
            name,
            values: dense(decode_u32_stream(cursor, &metadata)?, present, num_features)?,
        }),
        ColumnType::Int64 => PropertyColumn::Int64(ScalarColumn {
            name,
            values: dense(decode_i64_stream(cursor, &metadata)?, present, num_features)?,
        }),
        ColumnType::UInt64 => PropertyColumn::UInt64(ScalarColumn {
            name,
            values: dense(decode_u64_stream(cursor, &metadata)?, present, num_features)?,
        }),
        ColumnType::Float => PropertyColumn::Float(ScalarColumn {
            name,
            values: dense(decode_float_stream(cursor, &metadata)?, present, num_features)?,
        }),
        ColumnType::Double => PropertyColumn::Double(ScalarColumn {
            name,
            values: dense(decode_double_stream(cursor, &metadata)?, present, num_features)?,
        }),
        ColumnType::String => {
            let streams_left = num_streams - usize::from(present.is_some());
            return decode_string_column(
                cursor,
                name,
                metadata,
                streams_left,
                present,
                num_features,
            );
        }
        ColumnType::Geometry | ColumnType::Id32 | ColumnType::Id64 => {
            return Err(DecodeError::InvalidField(
                "property column type",
                format!("{:?}", descriptor.column_type),
            ));
        }
    };
    Ok(column)
}

/// Decodes the OFFSET / LENGTH / DATA stream triple of a dictionary string
/// column, in whatever order the streams appear.
fn decode_string_column(
    cursor: &mut Cursor,
    name: String,
    first: StreamMetadata,
    num_streams: usize,
    present: Option<Vec<bool>>,
    num_features: usize,
) -> Result<PropertyColumn> {
    let mut indices: Option<Vec<u32>> = None;
    let mut offsets: Option<Vec<u32>> = None;
    let mut data: Option<Vec<u8>> = None;

    let mut pending = Some(first);
    for _ in 0..num_streams {
        let metadata = match pending.take() {
            Some(metadata) => metadata,
            None => StreamMetadata::decode(cursor)?,
        };
        match metadata.physical_stream_type {
            PhysicalStreamType::Offset => {
                indices = Some(decode_u32_stream(cursor, &metadata)?);
            }
            PhysicalStreamType::Length => {
                offsets = Some(decode_length_stream_to_offsets(cursor, &metadata)?);
            }
            PhysicalStreamType::Data => {
                let bytes = cursor.peek_slice(metadata.byte_length as usize)?.to_vec();
                cursor.advance(metadata.byte_length as usize)?;
                data = Some(bytes);
            }
            PhysicalStreamType::Present => {
                return Err(DecodeError::MalformedStream(
                    "string column with a misplaced present stream",
                ));
            }
        }
    }

    let (indices, offsets, data) = match (indices, offsets, data) {
        (Some(i), Some(o), Some(d)) => (i, o, d),
        _ => {
            return Err(DecodeError::MalformedStream(
                "string column is missing one of its offset, length or data streams",
            ));
        }
    };

    let mut dictionary = Vec::with_capacity(offsets.len().saturating_sub(1));
    for window in offsets.windows(2) {
        let entry = data
            .get(window[0] as usize..window[1] as usize)
            .ok_or(DecodeError::MalformedStream(
                "string dictionary lengths exceed the data stream",
            ))?;
        dictionary.push(std::str::from_utf8(entry)?.to_string());
    }
    for &index in &indices {
        if index as usize >= dictionary.len() {
            return Err(DecodeError::MalformedStream(
                "string index outside the dictionary",
            ));
        }
    }

    Ok(PropertyColumn::String(StringColumn {
        name,
        dictionary,
        indices: dense(indices, present, num_features)?,
    }))
}

/// Consumes a leading PRESENT stream when one exists and returns the
/// metadata of the first value stream.
fn leading_present_stream(
    cursor: &mut Cursor,
    num_streams: usize,
    num_features: usize,
) -> Result<(Option<Vec<bool>>, StreamMetadata)> {
    if num_streams == 0 {
        return Err(DecodeError::MalformedStream("column without streams"));
    }
    let metadata = StreamMetadata::decode(cursor)?;
    if metadata.physical_stream_type != PhysicalStreamType::Present {
        return Ok((None, metadata));
    }
    let present = decode_boolean_stream(cursor, &metadata)?;
    expect_len(present.len(), num_features)?;
    if num_streams < 2 {
        return Err(DecodeError::MalformedStream(
            "column with a present stream but no value stream",
        ));
    }
    Ok((Some(present), StreamMetadata::decode(cursor)?))
}

/// Expands present-sparse values to one `Option` per feature.
fn dense<T>(
    values: Vec<T>,
    present: Option<Vec<bool>>,
    num_features: usize,
) -> Result<Vec<Option<T>>> {
    let Some(present) = present else {
        expect_len(values.len(), num_features)?;
        return Ok(values.into_iter().map(Some).collect());
    };
    let mut values = values.into_iter();
    let mut out = Vec::with_capacity(present.len());
    for &flag in &present {
        if flag {
            out.push(Some(values.next().ok_or(DecodeError::MalformedStream(
                "present stream declares more values than stored",
            ))?));
        } else {
            out.push(None);
        }
    }
    if values.next().is_some() {
        return Err(DecodeError::MalformedStream(
            "present stream declares fewer values than stored",
        ));
    }
    Ok(out)
}

fn expect_len(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(DecodeError::MalformedStream(
            "column length does not match the feature count",
        ));
    }
    Ok(())
}

/// Floats are stored raw, little-endian, one per value.
fn decode_float_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<f32>> {
    let start = cursor.offset();
    let mut out = Vec::with_capacity(metadata.num_values as usize);
    for _ in 0..metadata.num_values {
        out.push(cursor.read_f32_le()?);
    }
    check_raw_consumed(cursor.offset() - start, metadata)?;
    Ok(out)
}

fn decode_double_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<f64>> {
    let start = cursor.offset();
    let mut out = Vec::with_capacity(metadata.num_values as usize);
    for _ in 0..metadata.num_values {
        out.push(cursor.read_f64_le()?);
    }
    check_raw_consumed(cursor.offset() - start, metadata)?;
    Ok(out)
}

fn check_raw_consumed(consumed: usize, metadata: &StreamMetadata) -> Result<()> {
    let declared = metadata.byte_length as usize;
    if consumed != declared {
        return Err(DecodeError::StreamLengthMismatch { consumed, declared });
    }
    Ok(())
}
