//! The integer stream decoder: physical layer plus logical cascades.
//!
//! Every decoder here honors the stream contract: after it returns, the
//! cursor sits exactly `byteLength` bytes past the start of the payload.

use itertools::Itertools;
use mlt_codec::{decode_zigzag32, decode_zigzag64, fastpfor, Cursor};

use crate::{
    DecodeError, LogicalLevelTechnique, PhysicalLevelTechnique, Result, RleMetadata,
    StreamMetadata,
};

/// Decodes an unsigned integer stream (offsets, lengths, indices, codes).
pub fn decode_u32_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<u32>> {
    let values = decode_physical(cursor, metadata)?;
    Ok(apply_cascade(metadata, values, false)?
        .into_iter()
        .map(|v| v as u32)
        .collect())
}

/// Decodes a signed integer stream (vertex deltas and other zig-zag data).
pub fn decode_i32_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<i32>> {
    let values = decode_physical(cursor, metadata)?;
    apply_cascade(metadata, values, true)
}

/// Decodes a stream of present/boolean flags.
pub fn decode_boolean_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<bool>> {
    Ok(decode_u32_stream(cursor, metadata)?
        .into_iter()
        .map(|v| v != 0)
        .collect())
}

/// Decodes a stream whose every element is one shared scalar.
pub fn decode_const_u32_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<u32> {
    decode_const(cursor, metadata, false).map(|v| v as u32)
}

pub fn decode_const_i32_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<i32> {
    decode_const(cursor, metadata, true)
}

fn decode_const(cursor: &mut Cursor, metadata: &StreamMetadata, signed: bool) -> Result<i32> {
    let values = decode_physical(cursor, metadata)?;
    let raw = match metadata.rle {
        Some(rle) => values
            .get(rle.runs as usize)
            .copied()
            .ok_or(DecodeError::MalformedStream("constant stream without value")),
        None => values
            .first()
            .copied()
            .ok_or(DecodeError::MalformedStream("constant stream without value")),
    }?;
    Ok(if signed {
        decode_zigzag32(raw)
    } else {
        raw as i32
    })
}

/// Decodes a LENGTH stream and turns it into an offset buffer: `numValues + 1`
/// entries, starting at zero, each the running sum of the lengths before it.
pub fn decode_length_stream_to_offsets(
    cursor: &mut Cursor,
    metadata: &StreamMetadata,
) -> Result<Vec<u32>> {
    let lengths = decode_u32_stream(cursor, metadata)?;
    let mut offsets = Vec::with_capacity(lengths.len() + 1);
    let mut total = 0u32;
    offsets.push(total);
    for length in lengths {
        total = total
            .checked_add(length)
            .ok_or(DecodeError::MalformedStream("length stream overflows"))?;
        offsets.push(total);
    }
    Ok(offsets)
}

/// Decodes a 64-bit integer stream (id columns). Only the varint physical
/// layer exists for longs.
pub fn decode_u64_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<u64>> {
    decode_long(cursor, metadata, false)
}

pub fn decode_i64_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<i64>> {
    Ok(decode_long(cursor, metadata, true)?
        .into_iter()
        .map(|v| v as i64)
        .collect())
}

/// Decodes a constant-classified 64-bit stream to its single value.
pub fn decode_const_u64_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<u64> {
    let values = decode_long_physical(cursor, metadata)?;
    let position = metadata.rle.map_or(0, |rle| rle.runs as usize);
    values
        .get(position)
        .copied()
        .ok_or(DecodeError::MalformedStream("constant stream without value"))
}

/// Reads the `[start, delta]` pair of a sequence-classified stream without
/// expanding it.
pub fn decode_sequence_stream(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<(i64, i64)> {
    let values = decode_long_physical(cursor, metadata)?;
    if values.len() != 4 {
        return Err(DecodeError::MalformedStream(
            "sequence stream must hold two runs and two deltas",
        ));
    }
    Ok((decode_zigzag64(values[2]), decode_zigzag64(values[3])))
}

fn decode_long_physical(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<u64>> {
    if metadata.physical_technique != PhysicalLevelTechnique::Varint {
        return Err(DecodeError::InvalidField(
            "physical technique for long stream",
            format!("{:?}", metadata.physical_technique),
        ));
    }
    let start = cursor.offset();
    let mut values = Vec::with_capacity(metadata.num_values as usize);
    for _ in 0..metadata.num_values {
        values.push(cursor.read_varint_u64()?);
    }
    check_consumed(cursor.offset() - start, metadata)?;
    Ok(values)
}

fn decode_long(cursor: &mut Cursor, metadata: &StreamMetadata, signed: bool) -> Result<Vec<u64>> {
    let mut values = decode_long_physical(cursor, metadata)?;

    match metadata.logical_technique1 {
        LogicalLevelTechnique::Delta | LogicalLevelTechnique::PforDelta => {
            if metadata.logical_technique2 == LogicalLevelTechnique::Rle {
                values = expand_rle(values, rle_of(metadata)?)?;
            }
            let mut acc = 0i64;
            Ok(values
                .into_iter()
                .map(|v| {
                    acc = acc.wrapping_add(decode_zigzag64(v));
                    acc as u64
                })
                .collect())
        }
        LogicalLevelTechnique::Rle => {
            let expanded = expand_rle(values, rle_of(metadata)?)?;
            Ok(if signed {
                expanded
                    .into_iter()
                    .map(|v| decode_zigzag64(v) as u64)
                    .collect()
            } else {
                expanded
            })
        }
        _ => Ok(if signed {
            values
                .into_iter()
                .map(|v| decode_zigzag64(v) as u64)
                .collect()
        } else {
            values
        }),
    }
}

/// Decodes the physical layer and verifies the consumed byte count against
/// the metadata.
fn decode_physical(cursor: &mut Cursor, metadata: &StreamMetadata) -> Result<Vec<u32>> {
    let start = cursor.offset();
    let values = match metadata.physical_technique {
        PhysicalLevelTechnique::None => {
            let mut out = Vec::with_capacity(metadata.num_values as usize);
            for _ in 0..metadata.num_values {
                out.push(cursor.read_i32_be()? as u32);
            }
            out
        }
        PhysicalLevelTechnique::Varint => {
            let mut out = Vec::with_capacity(metadata.num_values as usize);
            for _ in 0..metadata.num_values {
                out.push(cursor.read_varint_u32()?);
            }
            out
        }
        PhysicalLevelTechnique::FastPfor => {
            let payload = cursor.peek_slice(metadata.byte_length as usize)?;
            let values = fastpfor::decode(payload, metadata.num_values as usize)?;
            cursor.advance(metadata.byte_length as usize)?;
            values
        }
    };
    check_consumed(cursor.offset() - start, metadata)?;
    Ok(values)
}

fn check_consumed(consumed: usize, metadata: &StreamMetadata) -> Result<()> {
    let declared = metadata.byte_length as usize;
    if consumed != declared {
        return Err(DecodeError::StreamLengthMismatch { consumed, declared });
    }
    Ok(())
}

/// Applies the logical cascade to the physically decoded values.
fn apply_cascade(
    metadata: &StreamMetadata,
    values: Vec<u32>,
    signed: bool,
) -> Result<Vec<i32>> {
    match metadata.logical_technique1 {
        LogicalLevelTechnique::Delta | LogicalLevelTechnique::PforDelta => {
            let deltas = if metadata.logical_technique2 == LogicalLevelTechnique::Rle {
                expand_rle(values, rle_of(metadata)?)?
            } else {
                values
            };
            let mut acc = 0i32;
            Ok(deltas
                .into_iter()
                .map(|v| {
                    acc = acc.wrapping_add(decode_zigzag32(v));
                    acc
                })
                .collect())
        }
        LogicalLevelTechnique::Rle => {
            let expanded = expand_rle(values, rle_of(metadata)?)?;
            Ok(expanded
                .into_iter()
                .map(|v| if signed { decode_zigzag32(v) } else { v as i32 })
                .collect())
        }
        LogicalLevelTechnique::ComponentwiseDelta => {
            if values.len() % 2 != 0 {
                return Err(DecodeError::MalformedStream(
                    "componentwise delta stream with an odd element count",
                ));
            }
            let mut x = 0i32;
            let mut y = 0i32;
            let mut out = Vec::with_capacity(values.len());
            for (dx, dy) in values.into_iter().tuples() {
                x = x.wrapping_add(decode_zigzag32(dx));
                y = y.wrapping_add(decode_zigzag32(dy));
                out.push(x);
                out.push(y);
            }
            Ok(out)
        }
        // Morton codes stay packed; the vertex decoder unpacks them
        LogicalLevelTechnique::Morton => Ok(values.into_iter().map(|v| v as i32).collect()),
        LogicalLevelTechnique::None | LogicalLevelTechnique::Pfor => Ok(values
            .into_iter()
            .map(|v| if signed { decode_zigzag32(v) } else { v as i32 })
            .collect()),
    }
}

fn rle_of(metadata: &StreamMetadata) -> Result<RleMetadata> {
    metadata
        .rle
        .ok_or(DecodeError::MalformedStream("RLE stream without RLE metadata"))
}

/// Expands `[run_1..run_n, value_1..value_n]` into `numRleValues` elements.
///
/// Runs are unsigned; the value half starts at index `runs`. The run lengths
/// must sum to exactly the declared decompressed count.
fn expand_rle<T>(values: Vec<T>, rle: RleMetadata) -> Result<Vec<T>>
where
    T: Copy + Into<u64>,
{
    let runs = rle.runs as usize;
    if values.len() != runs * 2 {
        return Err(DecodeError::MalformedStream(
            "RLE stream length does not match its run count",
        ));
    }
    let expected = rle.num_rle_values as usize;
    let mut out = Vec::with_capacity(expected);
    for (&run, &value) in values[..runs].iter().zip(&values[runs..]) {
        let run = run.into() as usize;
        if out.len() + run > expected {
            return Err(DecodeError::MalformedStream(
                "RLE runs exceed the declared value count",
            ));
        }
        out.extend(std::iter::repeat_n(value, run));
    }
    if out.len() != expected {
        return Err(DecodeError::MalformedStream(
            "RLE runs fall short of the declared value count",
        ));
    }
    Ok(out)
}
