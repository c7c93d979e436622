//! The virtual layer and its lazily-resolving features.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use mlt_vector::{Coordinates, GeometryType};

use crate::{DecodeError, FeatureTable, PropertyValue, Result};

impl FeatureTable {
    /// A virtual layer over this table, shaped like the common vector-tile
    /// layer interface.
    pub fn layer(&self) -> Result<VectorTileLayer<'_>> {
        Ok(VectorTileLayer {
            table: self,
            len: self.num_features()?,
        })
    }
}

pub struct VectorTileLayer<'a> {
    table: &'a FeatureTable,
    len: usize,
}

impl<'a> VectorTileLayer<'a> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn name(&self) -> &'a str {
        self.table.name()
    }

    pub fn extent(&self) -> u32 {
        self.table.extent()
    }

    /// A fresh feature facade for index `index`.
    pub fn feature(&self, index: usize) -> Result<Feature<'a>> {
        if index >= self.len {
            return Err(DecodeError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(Feature::new(self.table, index))
    }

    pub fn iter(&self) -> LayerIter<'a> {
        LayerIter {
            table: self.table,
            index: 0,
            len: self.len,
        }
    }
}

impl<'a> IntoIterator for &VectorTileLayer<'a> {
    type Item = Feature<'a>;
    type IntoIter = LayerIter<'a>;

    fn into_iter(self) -> LayerIter<'a> {
        self.iter()
    }
}

/// An iterator over a layer's features, with its own position.
pub struct LayerIter<'a> {
    table: &'a FeatureTable,
    index: usize,
    len: usize,
}

impl<'a> Iterator for LayerIter<'a> {
    type Item = Feature<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let feature = Feature::new(self.table, self.index);
        self.index += 1;
        Some(feature)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

/// One feature of a layer: an index plus a shared reference to its table.
///
/// Geometry type and id are cheap; coordinates decode on first read and are
/// cached on the feature instance.
pub struct Feature<'a> {
    table: &'a FeatureTable,
    index: usize,
    coordinates: RefCell<Option<Rc<Coordinates>>>,
}

impl<'a> Feature<'a> {
    fn new(table: &'a FeatureTable, index: usize) -> Self {
        Self {
            table,
            index,
            coordinates: RefCell::new(None),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Option<u64> {
        self.table.id(self.index)
    }

    /// The feature's geometry kind, without any vertex decode.
    pub fn geometry_type(&self) -> Result<GeometryType> {
        self.table.geometry_type(self.index)
    }

    /// The feature's coordinates; decoded through the table's resolver on
    /// the first read, then served from this feature's cache.
    pub fn coordinates(&self) -> Result<Rc<Coordinates>> {
        if let Some(cached) = self.coordinates.borrow().as_ref() {
            return Ok(cached.clone());
        }
        let resolved = self.table.coordinates(self.index)?;
        *self.coordinates.borrow_mut() = Some(resolved.clone());
        Ok(resolved)
    }

    /// The feature's non-null properties.
    pub fn properties(&self) -> BTreeMap<&'a str, PropertyValue> {
        let mut properties = BTreeMap::new();
        for column in self.table.property_columns() {
            if let Some(value) = column.value(self.index) {
                properties.insert(column.name(), value);
            }
        }
        properties
    }
}
