use glam::IVec2;

use crate::{zorder, Coordinates, GeometryError, GeometryType, MortonSettings, Result};

/// How the vertex buffer stores its vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexBufferType {
    /// Interleaved `x, y` int32 pairs
    #[default]
    Vec2,
    /// One Morton code per vertex
    Morton,
}

/// The geometry kind column of a vector: one shared kind, or one per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryTypes {
    Single {
        geometry_type: GeometryType,
        count: usize,
    },
    PerFeature(Vec<GeometryType>),
}

impl GeometryTypes {
    pub fn single(geometry_type: GeometryType, count: usize) -> Self {
        GeometryTypes::Single {
            geometry_type,
            count,
        }
    }

    /// Parses a raw per-feature type stream.
    pub fn from_raw(values: &[u32]) -> Result<Self> {
        let types = values
            .iter()
            .map(|&v| GeometryType::from_raw(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(GeometryTypes::PerFeature(types))
    }

    pub fn len(&self) -> usize {
        match self {
            GeometryTypes::Single { count, .. } => *count,
            GeometryTypes::PerFeature(types) => types.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<GeometryType> {
        match self {
            GeometryTypes::Single {
                geometry_type,
                count,
            } => {
                if index >= *count {
                    return Err(GeometryError::OutOfRange {
                        index,
                        len: *count,
                    });
                }
                Ok(*geometry_type)
            }
            GeometryTypes::PerFeature(types) => {
                types
                    .get(index)
                    .copied()
                    .ok_or(GeometryError::OutOfRange {
                        index,
                        len: types.len(),
                    })
            }
        }
    }
}

/// The up-to-three levels of topology offsets partitioning a vertex buffer.
///
/// Each present level is a monotonically non-decreasing offset buffer with
/// one more entry than it has units. The geometry level partitions parts per
/// feature, the part level rings per part, the ring level vertices per ring;
/// levels a vector does not need are omitted, in which case one unit of the
/// level above maps straight onto the level below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub geometry_offsets: Option<Vec<u32>>,
    pub part_offsets: Option<Vec<u32>>,
    pub ring_offsets: Option<Vec<u32>>,
}

/// A vertex buffer with its optional dictionary indirection and Morton
/// parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexBuffer {
    pub data: Vec<i32>,
    pub kind: VertexBufferType,
    /// Dictionary indirection: when non-empty, topology offsets index into
    /// this array and its values index the vertex buffer.
    pub offsets: Vec<u32>,
    pub morton: Option<MortonSettings>,
}

impl VertexBuffer {
    pub fn vec2(data: Vec<i32>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

/// A fully decoded geometry column in columnar form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatGeometryVector {
    geometry_types: GeometryTypes,
    topology: Topology,
    vertices: VertexBuffer,
}

impl FlatGeometryVector {
    pub fn new(geometry_types: GeometryTypes, topology: Topology, vertices: VertexBuffer) -> Self {
        Self {
            geometry_types,
            topology,
            vertices,
        }
    }

    pub fn num_geometries(&self) -> usize {
        self.geometry_types.len()
    }

    pub fn geometry_type(&self, index: usize) -> Result<GeometryType> {
        self.geometry_types.get(index)
    }

    pub fn geometry_types(&self) -> &GeometryTypes {
        &self.geometry_types
    }

    pub fn is_single_type(&self) -> bool {
        matches!(self.geometry_types, GeometryTypes::Single { .. })
    }

    pub fn contains_polygons(&self) -> bool {
        match &self.geometry_types {
            GeometryTypes::Single { geometry_type, .. } => geometry_type.is_polygon(),
            GeometryTypes::PerFeature(types) => types.iter().any(|t| t.is_polygon()),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    pub(crate) fn geometry_offsets(&self) -> Option<&[u32]> {
        self.topology.geometry_offsets.as_deref()
    }

    pub(crate) fn part_offsets(&self) -> Option<&[u32]> {
        self.topology.part_offsets.as_deref()
    }

    pub(crate) fn ring_offsets(&self) -> Option<&[u32]> {
        self.topology.ring_offsets.as_deref()
    }

    /// Resolves vertex slot `slot` through the dictionary (when present) and
    /// the buffer encoding.
    pub(crate) fn resolve_vertex(&self, slot: usize) -> Result<IVec2> {
        let index = if self.vertices.offsets.is_empty() {
            slot
        } else {
            *self
                .vertices
                .offsets
                .get(slot)
                .ok_or(GeometryError::MalformedTopology(
                    "vertex slot outside the vertex dictionary",
                ))? as usize
        };
        match self.vertices.kind {
            VertexBufferType::Vec2 => {
                let pair = self.vertices.data.get(index * 2..index * 2 + 2).ok_or(
                    GeometryError::MalformedTopology("vertex index outside the vertex buffer"),
                )?;
                Ok(IVec2::new(pair[0], pair[1]))
            }
            VertexBufferType::Morton => {
                let code = *self.vertices.data.get(index).ok_or(
                    GeometryError::MalformedTopology("vertex index outside the vertex buffer"),
                )? as u32;
                let settings = self
                    .vertices
                    .morton
                    .ok_or(GeometryError::MissingMortonSettings)?;
                Ok(zorder::decode(code, settings))
            }
        }
    }

    /// Reads `offsets[index..=index + count]` as a `(start, end)` unit range.
    pub(crate) fn offset_range(
        offsets: &[u32],
        index: usize,
        count: usize,
    ) -> Result<(usize, usize)> {
        let start = offsets
            .get(index)
            .ok_or(GeometryError::MalformedTopology("offset index out of range"))?;
        let end = offsets
            .get(index + count)
            .ok_or(GeometryError::MalformedTopology("offset index out of range"))?;
        Ok((*start as usize, *end as usize))
    }
}

/// A pre-tessellated, render-ready geometry column.
///
/// Ring structure is dissolved into triangles at encode time, so a single
/// feature cannot be decoded in isolation; materializing coordinates yields
/// one closed ring per triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuGeometryVector {
    geometry_types: GeometryTypes,
    /// Triangles per feature, as an offset buffer of length `features + 1`.
    triangle_offsets: Vec<u32>,
    /// Three vertex indices per triangle.
    index_buffer: Vec<u32>,
    /// Interleaved `x, y` pairs.
    vertex_buffer: Vec<i32>,
}

impl GpuGeometryVector {
    pub fn new(
        geometry_types: GeometryTypes,
        triangle_offsets: Vec<u32>,
        index_buffer: Vec<u32>,
        vertex_buffer: Vec<i32>,
    ) -> Self {
        Self {
            geometry_types,
            triangle_offsets,
            index_buffer,
            vertex_buffer,
        }
    }

    pub fn num_geometries(&self) -> usize {
        self.geometry_types.len()
    }

    pub fn geometry_type(&self, index: usize) -> Result<GeometryType> {
        self.geometry_types.get(index)
    }

    fn vertex(&self, index: u32) -> Result<IVec2> {
        let pair = self
            .vertex_buffer
            .get(index as usize * 2..index as usize * 2 + 2)
            .ok_or(GeometryError::MalformedTopology(
                "triangle index outside the vertex buffer",
            ))?;
        Ok(IVec2::new(pair[0], pair[1]))
    }

    pub fn geometries(&self) -> Result<Vec<Coordinates>> {
        let mut out = Vec::with_capacity(self.num_geometries());
        for feature in 0..self.num_geometries() {
            let (start, end) =
                FlatGeometryVector::offset_range(&self.triangle_offsets, feature, 1)?;
            let mut rings = Vec::with_capacity(end - start);
            for triangle in start..end {
                let corners = self.index_buffer.get(triangle * 3..triangle * 3 + 3).ok_or(
                    GeometryError::MalformedTopology("triangle outside the index buffer"),
                )?;
                let a = self.vertex(corners[0])?;
                let b = self.vertex(corners[1])?;
                let c = self.vertex(corners[2])?;
                rings.push(vec![a, b, c, a]);
            }
            out.push(rings);
        }
        Ok(out)
    }
}

/// A geometry column source: either the usual columnar form or the
/// GPU-packed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryVector {
    Flat(FlatGeometryVector),
    Gpu(GpuGeometryVector),
}

impl GeometryVector {
    pub fn num_geometries(&self) -> usize {
        match self {
            GeometryVector::Flat(v) => v.num_geometries(),
            GeometryVector::Gpu(v) => v.num_geometries(),
        }
    }

    pub fn geometry_type(&self, index: usize) -> Result<GeometryType> {
        match self {
            GeometryVector::Flat(v) => v.geometry_type(index),
            GeometryVector::Gpu(v) => v.geometry_type(index),
        }
    }

    /// Whether one feature can be decoded without materializing the rest.
    pub fn supports_single_decode(&self) -> bool {
        matches!(self, GeometryVector::Flat(_))
    }

    /// Materializes the coordinates of every feature.
    pub fn geometries(&self) -> Result<Vec<Coordinates>> {
        match self {
            GeometryVector::Flat(v) => v.geometries(),
            GeometryVector::Gpu(v) => v.geometries(),
        }
    }

    /// Decodes one feature's coordinates. For GPU-packed vectors this
    /// materializes everything and indexes the result.
    pub fn geometry(&self, index: usize) -> Result<Coordinates> {
        match self {
            GeometryVector::Flat(v) => v.geometry(index),
            GeometryVector::Gpu(v) => {
                let len = v.num_geometries();
                if index >= len {
                    return Err(GeometryError::OutOfRange { index, len });
                }
                Ok(v.geometries()?.swap_remove(index))
            }
        }
    }
}
