use glam::IVec2;
use num_enum::TryFromPrimitive;

use crate::GeometryError;

/// The geometry kinds a vector can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum GeometryType {
    Point = 0,
    MultiPoint = 1,
    LineString = 2,
    MultiLineString = 3,
    Polygon = 4,
    MultiPolygon = 5,
}

impl GeometryType {
    pub fn is_polygon(self) -> bool {
        matches!(self, GeometryType::Polygon | GeometryType::MultiPolygon)
    }

    pub fn is_multi(self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint | GeometryType::MultiLineString | GeometryType::MultiPolygon
        )
    }

    pub fn from_raw(value: u32) -> Result<Self, GeometryError> {
        GeometryType::try_from_primitive(value)
            .map_err(|e| GeometryError::UnsupportedGeometry(e.number))
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
        };
        f.write_str(name)
    }
}

/// One ring: an ordered run of 2-D tile coordinates.
pub type Ring = Vec<IVec2>;

/// Per-feature coordinates, as an ordered list of rings:
///
/// - `Point`: `[[p]]`
/// - `MultiPoint`: `[[p1], [p2], ...]`
/// - `LineString`: `[[p1, ..., pn]]`
/// - `MultiLineString`: one ring per line
/// - `Polygon`: `[shell, hole1, ...]`, rings closed
/// - `MultiPolygon`: all polygon rings concatenated in polygon order
pub type Coordinates = Vec<Ring>;
