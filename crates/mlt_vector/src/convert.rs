//! Bulk reconstruction of per-feature coordinates.
//!
//! One pass over the vector advances a cursor per topology level plus the
//! vertex cursor; each feature consumes the units its kind covers. The
//! geometry level, when present, points into the next *present* level: for
//! polygon kinds its units are polygons, for line kinds parts, for point
//! kinds vertices when no deeper level exists.

use crate::{Coordinates, FlatGeometryVector, GeometryError, GeometryType, Result, Ring};

#[derive(Debug, Default)]
pub(crate) struct Cursors {
    pub geometry: usize,
    pub part: usize,
    pub ring: usize,
    pub vertex: usize,
}

impl FlatGeometryVector {
    /// Reconstructs every feature's coordinates in feature order.
    pub fn geometries(&self) -> Result<Vec<Coordinates>> {
        let mut cursors = Cursors::default();
        let mut out = Vec::with_capacity(self.num_geometries());
        for index in 0..self.num_geometries() {
            out.push(self.convert_next(index, &mut cursors)?);
        }
        Ok(out)
    }

    fn convert_next(&self, index: usize, c: &mut Cursors) -> Result<Coordinates> {
        match self.geometry_type(index)? {
            GeometryType::Point => {
                if self.geometry_offsets().is_some() {
                    c.geometry += 1;
                }
                if self.part_offsets().is_some() {
                    c.part += 1;
                }
                if self.ring_offsets().is_some() {
                    c.ring += 1;
                }
                let point = self.resolve_vertex(c.vertex)?;
                c.vertex += 1;
                Ok(vec![vec![point]])
            }
            GeometryType::MultiPoint => {
                let units = self.take_geometry_units(c)?.ok_or(
                    GeometryError::MalformedTopology("multi point without geometry offsets"),
                )?;
                let units = self.advance_parts(c, units)?;
                let count = self.advance_rings(c, units)?;
                let mut rings = Vec::with_capacity(count);
                for _ in 0..count {
                    rings.push(vec![self.resolve_vertex(c.vertex)?]);
                    c.vertex += 1;
                }
                Ok(rings)
            }
            GeometryType::LineString => {
                let units = match self.take_geometry_units(c)? {
                    Some(units) => units,
                    None if self.part_offsets().is_some() => 1,
                    None => {
                        return Err(GeometryError::MalformedTopology(
                            "line string without length information",
                        ));
                    }
                };
                let units = self.advance_parts(c, units)?;
                let count = self.advance_rings(c, units)?;
                Ok(vec![self.read_run(c, count, false)?])
            }
            GeometryType::MultiLineString => {
                let parts = self.take_geometry_units(c)?.ok_or(
                    GeometryError::MalformedTopology("multi line string without geometry offsets"),
                )?;
                if self.part_offsets().is_none() {
                    return Err(GeometryError::MalformedTopology(
                        "multi line string without part offsets",
                    ));
                }
                let mut rings = Vec::with_capacity(parts);
                for _ in 0..parts {
                    let units = self.advance_parts(c, 1)?;
                    let count = self.advance_rings(c, units)?;
                    rings.push(self.read_run(c, count, false)?);
                }
                Ok(rings)
            }
            GeometryType::Polygon => {
                let polygons = self.take_geometry_units(c)?.unwrap_or(1);
                let rings = self.advance_parts(c, polygons)?;
                self.read_rings(c, rings)
            }
            GeometryType::MultiPolygon => {
                let polygons = self.take_geometry_units(c)?.ok_or(
                    GeometryError::MalformedTopology("multi polygon without geometry offsets"),
                )?;
                let mut out = Vec::new();
                for _ in 0..polygons {
                    let rings = self.advance_parts(c, 1)?;
                    out.extend(self.read_rings(c, rings)?);
                }
                Ok(out)
            }
        }
    }

    /// Consumes one geometry-level unit range, returning the number of units
    /// it spans at the next present level.
    fn take_geometry_units(&self, c: &mut Cursors) -> Result<Option<usize>> {
        Self::take_units(self.geometry_offsets(), &mut c.geometry, 1)
    }

    fn advance_parts(&self, c: &mut Cursors, units: usize) -> Result<usize> {
        Ok(Self::take_units(self.part_offsets(), &mut c.part, units)?.unwrap_or(units))
    }

    fn advance_rings(&self, c: &mut Cursors, units: usize) -> Result<usize> {
        Ok(Self::take_units(self.ring_offsets(), &mut c.ring, units)?.unwrap_or(units))
    }

    fn take_units(
        offsets: Option<&[u32]>,
        cursor: &mut usize,
        units: usize,
    ) -> Result<Option<usize>> {
        match offsets {
            Some(offsets) => {
                let (start, end) = Self::offset_range(offsets, *cursor, units)?;
                *cursor += units;
                Ok(Some(end - start))
            }
            None => Ok(None),
        }
    }

    /// Reads `count` consecutive vertices, optionally appending the closing
    /// point.
    fn read_run(&self, c: &mut Cursors, count: usize, close: bool) -> Result<Ring> {
        let mut ring = Vec::with_capacity(count + usize::from(close));
        for _ in 0..count {
            ring.push(self.resolve_vertex(c.vertex)?);
            c.vertex += 1;
        }
        if close {
            if let Some(&first) = ring.first() {
                ring.push(first);
            }
        }
        Ok(ring)
    }

    /// Reads `rings` closed rings through the ring level.
    fn read_rings(&self, c: &mut Cursors, rings: usize) -> Result<Coordinates> {
        if self.ring_offsets().is_none() {
            return Err(GeometryError::MalformedTopology(
                "polygon without ring offsets",
            ));
        }
        let mut out = Vec::with_capacity(rings);
        for _ in 0..rings {
            let count = self.advance_rings(c, 1)?;
            out.push(self.read_run(c, count, true)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        FlatGeometryVector, GeometryType, GeometryTypes, Topology, VertexBuffer,
    };
    use glam::IVec2;
    use pretty_assertions::assert_eq;

    fn grid(n: i32) -> Vec<i32> {
        (0..n).flat_map(|i| [i * 10, i * 10 + 1]).collect()
    }

    #[test]
    fn point_vector() {
        let vector = FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::Point, 3),
            Topology::default(),
            VertexBuffer::vec2(grid(3)),
        );
        let geometries = vector.geometries().unwrap();
        assert_eq!(
            geometries,
            vec![
                vec![vec![IVec2::new(0, 1)]],
                vec![vec![IVec2::new(10, 11)]],
                vec![vec![IVec2::new(20, 21)]],
            ]
        );
    }

    #[test]
    fn multipoint_yields_singleton_rings() {
        let vector = FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::MultiPoint, 2),
            Topology {
                geometry_offsets: Some(vec![0, 2, 3]),
                ..Default::default()
            },
            VertexBuffer::vec2(grid(3)),
        );
        let geometries = vector.geometries().unwrap();
        assert_eq!(
            geometries[0],
            vec![vec![IVec2::new(0, 1)], vec![IVec2::new(10, 11)]]
        );
        assert_eq!(geometries[1], vec![vec![IVec2::new(20, 21)]]);
    }

    #[test]
    fn linestring_vector() {
        let vector = FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::LineString, 2),
            Topology {
                part_offsets: Some(vec![0, 3, 5]),
                ..Default::default()
            },
            VertexBuffer::vec2(grid(5)),
        );
        let geometries = vector.geometries().unwrap();
        assert_eq!(geometries[0][0].len(), 3);
        assert_eq!(geometries[1][0].len(), 2);
        assert_eq!(geometries[1][0][0], IVec2::new(30, 31));
    }

    #[test]
    fn polygon_rings_are_closed() {
        let vector = FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::Polygon, 1),
            Topology {
                part_offsets: Some(vec![0, 2]),
                ring_offsets: Some(vec![0, 4, 7]),
                ..Default::default()
            },
            VertexBuffer::vec2(grid(7)),
        );
        let geometries = vector.geometries().unwrap();
        let rings = &geometries[0];
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 5);
        assert_eq!(rings[0].first(), rings[0].last());
        assert_eq!(rings[1].len(), 4);
        assert_eq!(rings[1].first(), rings[1].last());
    }

    #[test]
    fn multipolygon_rings_are_flat() {
        let vector = FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::MultiPolygon, 1),
            Topology {
                geometry_offsets: Some(vec![0, 2]),
                part_offsets: Some(vec![0, 1, 3]),
                ring_offsets: Some(vec![0, 3, 6, 9]),
            },
            VertexBuffer::vec2(grid(9)),
        );
        let geometries = vector.geometries().unwrap();
        // two polygons, three rings total, flattened
        assert_eq!(geometries[0].len(), 3);
        for ring in &geometries[0] {
            assert_eq!(ring.len(), 4);
            assert_eq!(ring.first(), ring.last());
        }
    }

    #[test]
    fn empty_vector() {
        let vector = FlatGeometryVector::new(
            GeometryTypes::single(GeometryType::Point, 0),
            Topology::default(),
            VertexBuffer::vec2(Vec::new()),
        );
        assert!(vector.geometries().unwrap().is_empty());
    }
}
