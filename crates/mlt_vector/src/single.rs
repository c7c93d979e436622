//! Single-feature coordinate extraction.
//!
//! Decodes one feature without touching the rest of the vector by composing
//! its index down through the present offset levels. Produces exactly what
//! the bulk pass produces for the same index; mixed-type vectors without a
//! geometry level fall back to the bulk pass, since feature positions in the
//! lower levels are then unknowable without a full walk.

use crate::{Coordinates, FlatGeometryVector, GeometryError, GeometryType, Result, Ring};

impl FlatGeometryVector {
    /// Decodes the coordinates of feature `index` in isolation.
    pub fn geometry(&self, index: usize) -> Result<Coordinates> {
        let len = self.num_geometries();
        if index >= len {
            return Err(GeometryError::OutOfRange { index, len });
        }
        if !self.is_single_type() && self.geometry_offsets().is_none() {
            log::debug!("mixed vector without geometry offsets, falling back to bulk decode");
            return Ok(self.geometries()?.swap_remove(index));
        }

        let top = match self.geometry_offsets() {
            Some(offsets) => Self::offset_range(offsets, index, 1)?,
            None => (index, index + 1),
        };
        match self.geometry_type(index)? {
            GeometryType::Point => {
                let (start, _) = self.ring_to_vertices(self.part_to_rings(top)?)?;
                Ok(vec![vec![self.resolve_vertex(start)?]])
            }
            GeometryType::MultiPoint => {
                if self.geometry_offsets().is_none() {
                    return Ok(self.geometries()?.swap_remove(index));
                }
                let (start, end) = self.ring_to_vertices(self.part_to_rings(top)?)?;
                (start..end)
                    .map(|slot| Ok(vec![self.resolve_vertex(slot)?]))
                    .collect()
            }
            GeometryType::LineString => {
                if self.geometry_offsets().is_none() && self.part_offsets().is_none() {
                    return Err(GeometryError::MalformedTopology(
                        "line string without length information",
                    ));
                }
                let (start, end) = self.ring_to_vertices(self.part_to_rings(top)?)?;
                Ok(vec![self.read_slots(start, end, false)?])
            }
            GeometryType::MultiLineString => {
                if self.geometry_offsets().is_none() {
                    return Ok(self.geometries()?.swap_remove(index));
                }
                if self.part_offsets().is_none() {
                    return Err(GeometryError::MalformedTopology(
                        "multi line string without part offsets",
                    ));
                }
                let (parts_start, parts_end) = top;
                let mut rings = Vec::with_capacity(parts_end - parts_start);
                for part in parts_start..parts_end {
                    let (start, end) =
                        self.ring_to_vertices(self.part_to_rings((part, part + 1))?)?;
                    rings.push(self.read_slots(start, end, false)?);
                }
                Ok(rings)
            }
            GeometryType::Polygon => {
                let (rings_start, rings_end) = self.part_to_rings(top)?;
                self.read_closed_rings(rings_start, rings_end)
            }
            GeometryType::MultiPolygon => {
                if self.geometry_offsets().is_none() {
                    return Ok(self.geometries()?.swap_remove(index));
                }
                let (polygons_start, polygons_end) = top;
                let mut out = Vec::new();
                for polygon in polygons_start..polygons_end {
                    let (rings_start, rings_end) = self.part_to_rings((polygon, polygon + 1))?;
                    out.extend(self.read_closed_rings(rings_start, rings_end)?);
                }
                Ok(out)
            }
        }
    }

    /// Maps a part-level unit range to the ring level, or passes it through
    /// when the vector has no part level.
    fn part_to_rings(&self, (start, end): (usize, usize)) -> Result<(usize, usize)> {
        match self.part_offsets() {
            Some(offsets) => {
                let lo = Self::offset_range(offsets, start, 0)?.0;
                let hi = Self::offset_range(offsets, end, 0)?.0;
                Ok((lo, hi))
            }
            None => Ok((start, end)),
        }
    }

    fn ring_to_vertices(&self, (start, end): (usize, usize)) -> Result<(usize, usize)> {
        match self.ring_offsets() {
            Some(offsets) => {
                let lo = Self::offset_range(offsets, start, 0)?.0;
                let hi = Self::offset_range(offsets, end, 0)?.0;
                Ok((lo, hi))
            }
            None => Ok((start, end)),
        }
    }

    fn read_slots(&self, start: usize, end: usize, close: bool) -> Result<Ring> {
        let mut ring = Vec::with_capacity(end - start + usize::from(close));
        for slot in start..end {
            ring.push(self.resolve_vertex(slot)?);
        }
        if close {
            if let Some(&first) = ring.first() {
                ring.push(first);
            }
        }
        Ok(ring)
    }

    fn read_closed_rings(&self, rings_start: usize, rings_end: usize) -> Result<Coordinates> {
        let Some(ring_offsets) = self.ring_offsets() else {
            return Err(GeometryError::MalformedTopology(
                "polygon without ring offsets",
            ));
        };
        let mut out = Vec::with_capacity(rings_end - rings_start);
        for ring in rings_start..rings_end {
            let (start, end) = Self::offset_range(ring_offsets, ring, 1)?;
            out.push(self.read_slots(start, end, true)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        FlatGeometryVector, GeometryError, GeometryType, GeometryTypes, Topology, VertexBuffer,
    };
    use pretty_assertions::assert_eq;

    fn line_vector() -> FlatGeometryVector {
        FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::LineString, 3),
            Topology {
                part_offsets: Some(vec![0, 3, 5, 9]),
                ..Default::default()
            },
            VertexBuffer::vec2((0..9).flat_map(|i| [i, -i]).collect()),
        )
    }

    #[test]
    fn single_matches_bulk() {
        let vector = line_vector();
        let bulk = vector.geometries().unwrap();
        for index in 0..vector.num_geometries() {
            assert_eq!(vector.geometry(index).unwrap(), bulk[index]);
        }
    }

    #[test]
    fn out_of_range_index() {
        let vector = line_vector();
        assert!(matches!(
            vector.geometry(3),
            Err(GeometryError::OutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn single_does_not_need_earlier_features() {
        // decoding index 2 alone must agree with the bulk pass
        let vector = line_vector();
        let bulk = vector.geometries().unwrap();
        assert_eq!(vector.geometry(2).unwrap(), bulk[2]);
        assert_eq!(vector.geometry(2).unwrap()[0].len(), 4);
    }
}
