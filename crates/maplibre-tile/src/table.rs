//! Feature tables: one decoded (or partially deferred) layer of a tile.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use mlt_codec::Cursor;
use mlt_vector::{Coordinates, GeometryType, GeometryVector};

use crate::decode::{decode_geometry_column, decode_id_column, decode_property_column};
use crate::resolver::ResolverStats;
use crate::{
    CoordinatesResolver, DecodeError, DeferredGeometryColumn, IdColumn, PropertyColumn, Result,
    StreamMetadata,
};

pub const DEFAULT_EXTENT: u32 = 4096;

/// Column kinds a table descriptor can declare.
///
/// The tile-level metadata format that carries this information is produced
/// by an external collaborator; the descriptor is the interface through
/// which it reaches the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Bool,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
    Id32,
    Id64,
    Geometry,
}

#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct TableDescriptor {
    pub name: String,
    pub extent: u32,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extent: DEFAULT_EXTENT,
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }
}

/// Where a table's geometries come from: an already-decoded vector or a
/// deferred column still sitting on the raw tile bytes.
#[derive(Debug, Clone)]
pub enum GeometrySource {
    Vector(Rc<GeometryVector>),
    Deferred(DeferredGeometryColumn),
}

/// One layer of a tile: a geometry source, an optional id column and any
/// number of property columns.
#[derive(Debug)]
pub struct FeatureTable {
    name: String,
    extent: u32,
    geometry: RefCell<Option<GeometrySource>>,
    id_column: Option<IdColumn>,
    property_columns: Vec<PropertyColumn>,
    resolver: CoordinatesResolver,
}

impl FeatureTable {
    pub fn new(
        name: impl Into<String>,
        extent: u32,
        geometry: Option<GeometrySource>,
        id_column: Option<IdColumn>,
        property_columns: Vec<PropertyColumn>,
    ) -> Self {
        Self {
            name: name.into(),
            extent,
            geometry: RefCell::new(geometry),
            id_column,
            property_columns,
            resolver: CoordinatesResolver::default(),
        }
    }

    /// Decodes one feature table from `tile` at `offset`, driven by its
    /// descriptor. Returns the table and the offset of the byte after it.
    ///
    /// With `defer_geometry`, the geometry column's streams are located but
    /// not decoded; type queries and coordinate access decode on demand.
    pub fn decode(
        tile: &Arc<[u8]>,
        offset: usize,
        descriptor: &TableDescriptor,
        defer_geometry: bool,
    ) -> Result<(Self, usize)> {
        let mut cursor = Cursor::new(tile);
        cursor.set_offset(offset)?;
        let num_features = cursor.read_varint_u32()? as usize;

        let mut geometry = None;
        let mut id_column = None;
        let mut property_columns = Vec::new();
        for column in &descriptor.columns {
            let num_streams = cursor.read_varint_u32()? as usize;
            match column.column_type {
                ColumnType::Geometry => {
                    geometry = Some(if defer_geometry {
                        let start = cursor.offset();
                        skip_streams(&mut cursor, num_streams)?;
                        GeometrySource::Deferred(DeferredGeometryColumn::new(
                            tile.clone(),
                            start,
                            num_streams,
                            num_features,
                        ))
                    } else {
                        let vector =
                            decode_geometry_column(&mut cursor, num_streams, num_features)?;
                        GeometrySource::Vector(Rc::new(GeometryVector::Flat(vector)))
                    });
                }
                ColumnType::Id32 | ColumnType::Id64 => {
                    id_column = Some(decode_id_column(
                        &mut cursor,
                        column,
                        num_streams,
                        num_features,
                    )?);
                }
                _ => {
                    property_columns.push(decode_property_column(
                        &mut cursor,
                        column,
                        num_streams,
                        num_features,
                    )?);
                }
            }
        }
        log::debug!(
            "decoded feature table '{}': {num_features} features, {} property columns",
            descriptor.name,
            property_columns.len()
        );
        let table = Self::new(
            descriptor.name.clone(),
            descriptor.extent,
            geometry,
            id_column,
            property_columns,
        );
        Ok((table, cursor.offset()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extent(&self) -> u32 {
        self.extent
    }

    pub fn num_features(&self) -> Result<usize> {
        match self.geometry.borrow().as_ref() {
            Some(GeometrySource::Vector(vector)) => Ok(vector.num_geometries()),
            Some(GeometrySource::Deferred(deferred)) => Ok(deferred.num_features()),
            None => Err(DecodeError::MissingGeometry),
        }
    }

    /// The geometry kind of feature `index`. Never triggers vertex decode.
    pub fn geometry_type(&self, index: usize) -> Result<GeometryType> {
        let len = self.num_features()?;
        if index >= len {
            return Err(DecodeError::OutOfRange { index, len });
        }
        match self.geometry.borrow().as_ref() {
            Some(GeometrySource::Vector(vector)) => {
                vector.geometry_type(index).map_err(Into::into)
            }
            Some(GeometrySource::Deferred(deferred)) => deferred.geometry_type(index),
            None => Err(DecodeError::MissingGeometry),
        }
    }

    pub fn id(&self, index: usize) -> Option<u64> {
        self.id_column.as_ref()?.value(index)
    }

    pub fn id_column(&self) -> Option<&IdColumn> {
        self.id_column.as_ref()
    }

    pub fn property_columns(&self) -> &[PropertyColumn] {
        &self.property_columns
    }

    /// Whether the geometry column is still deferred (no vertex decode yet).
    pub fn is_geometry_deferred(&self) -> bool {
        matches!(
            self.geometry.borrow().as_ref(),
            Some(GeometrySource::Deferred(_))
        )
    }

    pub fn resolver_stats(&self) -> ResolverStats {
        self.resolver.stats()
    }

    pub(crate) fn coordinates(&self, index: usize) -> Result<Rc<Coordinates>> {
        let len = self.num_features()?;
        if index >= len {
            return Err(DecodeError::OutOfRange { index, len });
        }
        let vector = self.resolved_geometry()?;
        self.resolver.coordinates(&vector, index)
    }

    /// The decoded geometry vector, decoding and replacing a deferred column
    /// on first use so the raw byte range can be freed.
    fn resolved_geometry(&self) -> Result<Rc<GeometryVector>> {
        let decoded = {
            let source = self.geometry.borrow();
            match source.as_ref() {
                Some(GeometrySource::Vector(vector)) => return Ok(vector.clone()),
                Some(GeometrySource::Deferred(deferred)) => {
                    Rc::new(GeometryVector::Flat(deferred.decode()?))
                }
                None => return Err(DecodeError::MissingGeometry),
            }
        };
        *self.geometry.borrow_mut() = Some(GeometrySource::Vector(decoded.clone()));
        Ok(decoded)
    }
}

fn skip_streams(cursor: &mut Cursor, num_streams: usize) -> Result<()> {
    for _ in 0..num_streams {
        let metadata = StreamMetadata::decode(cursor)?;
        cursor.advance(metadata.byte_length as usize)?;
    }
    Ok(())
}
