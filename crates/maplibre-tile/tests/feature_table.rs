mod common;

use std::sync::Arc;

use common::{
    const_stream, length_stream, put_varint, vertex_stream, zigzag32, Stream, LOGICAL_DICTIONARY,
    LOGICAL_OFFSET,
};
use glam::IVec2;
use maplibre_tile::{
    ColumnDescriptor, ColumnType, DecodeError, FeatureTable, GeometryType, LengthType,
    LogicalLevelTechnique, OffsetType, PhysicalStreamType, PropertyValue, TableDescriptor,
};
use pretty_assertions::assert_eq;

fn roads_descriptor() -> TableDescriptor {
    TableDescriptor::new("roads")
        .with_column(ColumnDescriptor::new("id", ColumnType::Id32))
        .with_column(ColumnDescriptor::new("geometry", ColumnType::Geometry))
        .with_column(ColumnDescriptor::new("name", ColumnType::String).nullable())
        .with_column(ColumnDescriptor::new("rank", ColumnType::Int32))
}

/// Serializes a four-point table: ids, point geometries, a nullable string
/// dictionary column and a signed int column.
fn roads_tile(vertex_override: Option<Vec<u8>>) -> Arc<[u8]> {
    let mut bytes = Vec::new();
    put_varint(&mut bytes, 4); // numFeatures

    // id column
    put_varint(&mut bytes, 1);
    Stream::varint(PhysicalStreamType::Data, &[10, 20, 30, 40]).write(&mut bytes);

    // geometry column: type stream + vertex stream
    put_varint(&mut bytes, 2);
    const_stream(PhysicalStreamType::Data, GeometryType::Point as u64, 4).write(&mut bytes);
    match vertex_override {
        None => vertex_stream(&[(1, 1), (2, 2), (5, 3), (10, 10)]).write(&mut bytes),
        Some(payload) => {
            let mut stream = vertex_stream(&[]);
            stream.num_values = 8;
            stream.payload = payload;
            stream.write(&mut bytes);
        }
    }

    // "name": present + offset + length + data
    put_varint(&mut bytes, 4);
    Stream::varint(PhysicalStreamType::Present, &[1, 1, 0, 1]).write(&mut bytes);
    Stream::varint(PhysicalStreamType::Offset, &[0, 1, 0])
        .logical(LOGICAL_OFFSET, OffsetType::String as u8)
        .write(&mut bytes);
    length_stream(LengthType::Dictionary as u8, &[3, 2]).write(&mut bytes);
    Stream {
        physical: PhysicalStreamType::Data,
        logical: Some((LOGICAL_DICTIONARY, 3)), // DictionaryType::String
        technique1: LogicalLevelTechnique::None,
        technique2: LogicalLevelTechnique::None,
        physical_technique: maplibre_tile::PhysicalLevelTechnique::None,
        num_values: 2,
        rle: None,
        morton: None,
        payload: b"fooab".to_vec(),
    }
    .write(&mut bytes);

    // "rank": zig-zag signed ints
    put_varint(&mut bytes, 1);
    let ranks: Vec<u64> = [-1, 5, 0, 7].iter().map(|&r| zigzag32(r)).collect();
    Stream::varint(PhysicalStreamType::Data, &ranks).write(&mut bytes);

    bytes.into()
}

#[test_log::test]
fn decodes_a_full_table() {
    let tile = roads_tile(None);
    let (table, end) = FeatureTable::decode(&tile, 0, &roads_descriptor(), false).unwrap();
    assert_eq!(end, tile.len());
    assert_eq!(table.name(), "roads");
    assert_eq!(table.extent(), 4096);
    assert_eq!(table.num_features().unwrap(), 4);

    let layer = table.layer().unwrap();
    assert_eq!(layer.len(), 4);

    let feature = layer.feature(1).unwrap();
    assert_eq!(feature.id(), Some(20));
    assert_eq!(feature.geometry_type().unwrap(), GeometryType::Point);
    assert_eq!(*feature.coordinates().unwrap(), vec![vec![IVec2::new(2, 2)]]);
    let properties = feature.properties();
    assert_eq!(
        properties.get("name"),
        Some(&PropertyValue::String("ab".to_string()))
    );
    assert_eq!(properties.get("rank"), Some(&PropertyValue::Int32(5)));

    // null property is omitted
    let feature = layer.feature(2).unwrap();
    let properties = feature.properties();
    assert_eq!(properties.get("name"), None);
    assert_eq!(properties.get("rank"), Some(&PropertyValue::Int32(0)));
}

#[test]
fn iterates_in_feature_order() {
    let tile = roads_tile(None);
    let (table, _) = FeatureTable::decode(&tile, 0, &roads_descriptor(), false).unwrap();
    let layer = table.layer().unwrap();
    let ids: Vec<_> = layer.iter().map(|f| f.id()).collect();
    assert_eq!(
        ids,
        vec![Some(10), Some(20), Some(30), Some(40)]
    );
}

#[test]
fn out_of_range_feature_index() {
    let tile = roads_tile(None);
    let (table, _) = FeatureTable::decode(&tile, 0, &roads_descriptor(), false).unwrap();
    let layer = table.layer().unwrap();
    assert!(matches!(
        layer.feature(4),
        Err(DecodeError::OutOfRange { index: 4, len: 4 })
    ));
    assert!(table.geometry_type(4).is_err());
}

#[test]
fn feature_coordinates_are_cached_per_instance() {
    let tile = roads_tile(None);
    let (table, _) = FeatureTable::decode(&tile, 0, &roads_descriptor(), false).unwrap();
    let layer = table.layer().unwrap();
    let feature = layer.feature(0).unwrap();
    let first = feature.coordinates().unwrap();
    let second = feature.coordinates().unwrap();
    assert!(std::rc::Rc::ptr_eq(&first, &second));
}

#[test]
fn deferred_geometry_defers_vertex_decode() {
    let tile = roads_tile(None);
    let (table, end) = FeatureTable::decode(&tile, 0, &roads_descriptor(), true).unwrap();
    assert_eq!(end, tile.len());
    assert!(table.is_geometry_deferred());

    // type queries answer from the type stream alone
    for index in 0..4 {
        assert_eq!(table.geometry_type(index).unwrap(), GeometryType::Point);
    }
    assert!(table.is_geometry_deferred());

    // the first coordinate read decodes the column and drops the deferral
    let layer = table.layer().unwrap();
    let coordinates = layer.feature(3).unwrap().coordinates().unwrap();
    assert_eq!(*coordinates, vec![vec![IVec2::new(10, 10)]]);
    assert!(!table.is_geometry_deferred());
}

#[test]
fn deferred_type_query_survives_corrupt_vertex_stream() {
    // vertex payload is unterminated varints; a type query must still work
    // because it never touches the vertex stream
    let tile = roads_tile(Some(vec![0x80; 6]));
    let (table, _) = FeatureTable::decode(&tile, 0, &roads_descriptor(), true).unwrap();
    assert_eq!(table.geometry_type(0).unwrap(), GeometryType::Point);
    assert!(table.is_geometry_deferred());

    let layer = table.layer().unwrap();
    assert!(layer.feature(0).unwrap().coordinates().is_err());
}

#[test]
fn sequential_ids_decode_to_a_sequence_column() {
    let mut bytes = Vec::new();
    put_varint(&mut bytes, 4);
    put_varint(&mut bytes, 1);
    // ids 1..=4: deltas as runs [1, 3] x values [1, 1]
    Stream::varint(PhysicalStreamType::Data, &[1, 3, zigzag32(1), zigzag32(1)])
        .rle_under(LogicalLevelTechnique::Delta, 2, 4)
        .write(&mut bytes);
    put_varint(&mut bytes, 2);
    const_stream(PhysicalStreamType::Data, GeometryType::Point as u64, 4).write(&mut bytes);
    vertex_stream(&[(0, 0), (1, 0), (2, 0), (3, 0)]).write(&mut bytes);

    let tile: Arc<[u8]> = bytes.into();
    let descriptor = TableDescriptor::new("seq")
        .with_column(ColumnDescriptor::new("id", ColumnType::Id32))
        .with_column(ColumnDescriptor::new("geometry", ColumnType::Geometry));
    let (table, _) = FeatureTable::decode(&tile, 0, &descriptor, false).unwrap();
    for index in 0..4 {
        assert_eq!(table.id(index), Some(index as u64 + 1));
    }
    assert_eq!(table.id(4), None);
}

#[test]
fn morton_geometry_column_with_vertex_dictionary() {
    let settings = mlt_vector::MortonSettings {
        num_bits: 20,
        coordinate_shift: 8,
    };
    let points = [IVec2::new(3, 5), IVec2::new(-2, 7)];
    let codes: Vec<u64> = points
        .iter()
        .map(|&p| u64::from(mlt_vector::zorder::encode(p, settings)))
        .collect();

    let mut bytes = Vec::new();
    put_varint(&mut bytes, 3); // numFeatures
    put_varint(&mut bytes, 3); // geometry streams
    const_stream(PhysicalStreamType::Data, GeometryType::Point as u64, 3).write(&mut bytes);
    // dictionary: three logical vertices over two stored codes
    Stream::varint(PhysicalStreamType::Offset, &[1, 0, 1])
        .logical(LOGICAL_OFFSET, OffsetType::Vertex as u8)
        .write(&mut bytes);
    let mut morton = Stream::varint(PhysicalStreamType::Data, &codes)
        .logical(LOGICAL_DICTIONARY, 2) // DictionaryType::Morton
        .techniques(LogicalLevelTechnique::Morton, LogicalLevelTechnique::None);
    morton.morton = Some((settings.num_bits, settings.coordinate_shift));
    morton.write(&mut bytes);

    let tile: Arc<[u8]> = bytes.into();
    let descriptor = TableDescriptor::new("pois")
        .with_column(ColumnDescriptor::new("geometry", ColumnType::Geometry));
    let (table, end) = FeatureTable::decode(&tile, 0, &descriptor, false).unwrap();
    assert_eq!(end, tile.len());

    let layer = table.layer().unwrap();
    assert_eq!(
        *layer.feature(0).unwrap().coordinates().unwrap(),
        vec![vec![IVec2::new(-2, 7)]]
    );
    assert_eq!(
        *layer.feature(1).unwrap().coordinates().unwrap(),
        vec![vec![IVec2::new(3, 5)]]
    );
    assert_eq!(
        *layer.feature(2).unwrap().coordinates().unwrap(),
        vec![vec![IVec2::new(-2, 7)]]
    );
}

#[test]
fn two_tables_back_to_back() {
    let first = roads_tile(None);
    let mut bytes = first.to_vec();
    let second_start = bytes.len();
    bytes.extend_from_slice(&roads_tile(None));

    let tile: Arc<[u8]> = bytes.into();
    let descriptor = roads_descriptor();
    let (_, next) = FeatureTable::decode(&tile, 0, &descriptor, false).unwrap();
    assert_eq!(next, second_start);
    let (table, end) = FeatureTable::decode(&tile, next, &descriptor, true).unwrap();
    assert_eq!(end, tile.len());
    assert_eq!(table.num_features().unwrap(), 4);
}

#[test]
fn missing_geometry_is_fatal() {
    let table = FeatureTable::new("empty", 4096, None, None, Vec::new());
    assert!(matches!(
        table.num_features(),
        Err(DecodeError::MissingGeometry)
    ));
    assert!(table.layer().is_err());
}
