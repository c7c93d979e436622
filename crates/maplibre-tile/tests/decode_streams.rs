mod common;

use common::{varints, zigzag32, Stream, LOGICAL_LENGTH};
use maplibre_tile::decode::{
    decode_boolean_stream, decode_const_u32_stream, decode_length_stream_to_offsets,
    decode_u32_stream, decode_u64_stream,
};
use maplibre_tile::{
    DecodeError, LengthType, LogicalLevelTechnique, PhysicalLevelTechnique, PhysicalStreamType,
    StreamMetadata,
};
use mlt_codec::Cursor;
use pretty_assertions::assert_eq;

fn decode_one<T>(
    bytes: &[u8],
    decode: impl FnOnce(&mut Cursor, &StreamMetadata) -> maplibre_tile::Result<T>,
) -> (T, usize) {
    let mut cursor = Cursor::new(bytes);
    let metadata = StreamMetadata::decode(&mut cursor).unwrap();
    let payload_start = cursor.offset();
    let value = decode(&mut cursor, &metadata).unwrap();
    assert_eq!(
        cursor.offset(),
        payload_start + metadata.byte_length as usize,
        "cursor must advance by exactly byteLength"
    );
    (value, cursor.offset())
}

#[test]
fn length_stream_becomes_offsets() {
    let bytes = Stream::varint(PhysicalStreamType::Length, &[5, 0, 0, 3])
        .logical(LOGICAL_LENGTH, LengthType::Parts as u8)
        .to_bytes();
    let (offsets, end) = decode_one(&bytes, |c, m| decode_length_stream_to_offsets(c, m));
    assert_eq!(offsets, vec![0, 5, 5, 5, 8]);
    assert_eq!(end, bytes.len());
}

#[test]
fn delta_cascade_prefix_sums() {
    let deltas: Vec<u64> = [0, 10, 10, 20].iter().map(|&d| zigzag32(d)).collect();
    let bytes = Stream::varint(PhysicalStreamType::Data, &deltas)
        .techniques(LogicalLevelTechnique::Delta, LogicalLevelTechnique::None)
        .to_bytes();
    let (values, _) = decode_one(&bytes, |c, m| decode_u32_stream(c, m));
    assert_eq!(values, vec![0, 10, 20, 40]);
}

#[test]
fn rle_present_stream_and_following_stream() {
    let flags = [
        true, false, true, true, false, false, true, false, true, false, true,
    ];
    // runs: T1 F1 T2 F2 T1 F1 T1 F1 T1
    let physical: Vec<u64> = vec![1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1];
    let mut bytes = Stream::varint(PhysicalStreamType::Present, &physical)
        .rle(9, flags.len() as u32)
        .to_bytes();
    let follow_at = bytes.len();
    Stream::varint(PhysicalStreamType::Data, &[42, 43]).write(&mut bytes);

    let mut cursor = Cursor::new(&bytes);
    let metadata = StreamMetadata::decode(&mut cursor).unwrap();
    let decoded = decode_boolean_stream(&mut cursor, &metadata).unwrap();
    assert_eq!(decoded, flags);
    assert_eq!(cursor.offset(), follow_at);

    let metadata = StreamMetadata::decode(&mut cursor).unwrap();
    let decoded = decode_u32_stream(&mut cursor, &metadata).unwrap();
    assert_eq!(decoded, vec![42, 43]);
    assert_eq!(cursor.offset(), bytes.len());
}

#[test]
fn fastpfor_physical_layer() {
    let values: Vec<u32> = (0..300u32).map(|i| i.wrapping_mul(2654435761) >> 12).collect();
    let payload = mlt_codec::fastpfor::encode(&values, &mut mlt_codec::fastpfor::Workspace::default());
    let stream = Stream {
        physical: PhysicalStreamType::Data,
        logical: None,
        technique1: LogicalLevelTechnique::None,
        technique2: LogicalLevelTechnique::None,
        physical_technique: PhysicalLevelTechnique::FastPfor,
        num_values: values.len() as u32,
        rle: None,
        morton: None,
        payload,
    };
    let bytes = stream.to_bytes();
    let (decoded, end) = decode_one(&bytes, |c, m| decode_u32_stream(c, m));
    assert_eq!(decoded, values);
    assert_eq!(end, bytes.len());
}

#[test]
fn big_endian_physical_layer() {
    let mut payload = Vec::new();
    for value in [1i32, -1, 1 << 20] {
        payload.extend_from_slice(&value.to_be_bytes());
    }
    let stream = Stream {
        physical: PhysicalStreamType::Data,
        logical: None,
        technique1: LogicalLevelTechnique::None,
        technique2: LogicalLevelTechnique::None,
        physical_technique: PhysicalLevelTechnique::None,
        num_values: 3,
        rle: None,
        morton: None,
        payload,
    };
    let bytes = stream.to_bytes();
    let (decoded, _) = decode_one(&bytes, |c, m| decode_u32_stream(c, m));
    assert_eq!(decoded, vec![1, u32::MAX, 1 << 20]);
}

#[test]
fn const_stream_yields_its_scalar() {
    let bytes = common::const_stream(PhysicalStreamType::Data, 4, 100).to_bytes();
    let (value, _) = decode_one(&bytes, |c, m| decode_const_u32_stream(c, m));
    assert_eq!(value, 4);
}

#[test]
fn delta_rle_sequence_expansion() {
    // ids 10, 11, 12, 13: deltas [10, 1, 1, 1] as runs [1, 3] x values [10, 1]
    let physical: Vec<u64> = vec![1, 3, zigzag32(10), zigzag32(1)];
    let bytes = Stream::varint(PhysicalStreamType::Data, &physical)
        .rle_under(LogicalLevelTechnique::Delta, 2, 4)
        .to_bytes();
    let (values, _) = decode_one(&bytes, |c, m| decode_u32_stream(c, m));
    assert_eq!(values, vec![10, 11, 12, 13]);
}

#[test]
fn long_stream_varints() {
    let ids = [1u64, u64::from(u32::MAX) + 10, 1 << 50];
    let bytes = Stream::varint(PhysicalStreamType::Data, &ids).to_bytes();
    let (values, _) = decode_one(&bytes, |c, m| decode_u64_stream(c, m));
    assert_eq!(values, ids);
}

#[test]
fn byte_length_mismatch_is_rejected() {
    // declare one byte more than the varints occupy
    let mut bytes = vec![
        PhysicalStreamType::Data as u8,
        PhysicalLevelTechnique::Varint as u8,
    ];
    common::put_varint(&mut bytes, 3); // numValues
    common::put_varint(&mut bytes, 4); // byteLength, actual payload is 3
    bytes.extend(varints(&[1, 2, 3]));
    bytes.push(0); // the byte the length claims
    let mut cursor = Cursor::new(&bytes);
    let metadata = StreamMetadata::decode(&mut cursor).unwrap();
    assert!(matches!(
        decode_u32_stream(&mut cursor, &metadata),
        Err(DecodeError::StreamLengthMismatch {
            consumed: 3,
            declared: 4
        })
    ));
}

#[test]
fn truncated_varint_stream_fails() {
    let mut bytes = vec![
        PhysicalStreamType::Data as u8,
        PhysicalLevelTechnique::Varint as u8,
    ];
    common::put_varint(&mut bytes, 2); // numValues
    common::put_varint(&mut bytes, 2); // byteLength
    bytes.push(0x80); // unterminated varint
    bytes.push(0x80);
    let mut cursor = Cursor::new(&bytes);
    let metadata = StreamMetadata::decode(&mut cursor).unwrap();
    assert!(decode_u32_stream(&mut cursor, &metadata).is_err());
}
