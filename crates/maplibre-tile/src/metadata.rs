//! Stream metadata: the self-describing record preceding every integer
//! stream.
//!
//! Wire layout, in order:
//!
//! 1. one byte packing the physical stream type (low nibble) and the logical
//!    stream type discriminant (high nibble: 0 none, 1 dictionary, 2 length,
//!    3 offset);
//! 2. when the discriminant is non-zero, one byte with the logical kind;
//! 3. one byte packing the techniques: logical technique 1 in bits 5..8,
//!    logical technique 2 in bits 2..5, the physical technique in bits 0..2;
//! 4. varints `numValues` and `byteLength`;
//! 5. for RLE streams, varints `runs` and `numRleValues`;
//! 6. for Morton streams, varints `numBits` and `coordinateShift`.

use mlt_codec::Cursor;
use mlt_vector::MortonSettings;
use num_enum::TryFromPrimitive;

use crate::{DecodeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum PhysicalStreamType {
    Present = 0,
    Data = 1,
    Offset = 2,
    Length = 3,
}

/// What a dictionary-backed DATA or OFFSET stream refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum DictionaryType {
    None = 0,
    Vertex = 1,
    Morton = 2,
    String = 3,
}

/// What a LENGTH stream measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum LengthType {
    VarBinary = 0,
    Geometries = 1,
    Parts = 2,
    Rings = 3,
    Triangles = 4,
    Dictionary = 5,
}

/// What an OFFSET stream indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum OffsetType {
    Vertex = 0,
    Index = 1,
    String = 2,
    Key = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalStreamType {
    Dictionary(DictionaryType),
    Length(LengthType),
    Offset(OffsetType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum LogicalLevelTechnique {
    None = 0,
    Rle = 1,
    Delta = 2,
    ComponentwiseDelta = 3,
    Morton = 4,
    Pfor = 5,
    PforDelta = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum PhysicalLevelTechnique {
    None = 0,
    FastPfor = 1,
    Varint = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleMetadata {
    pub runs: u32,
    pub num_rle_values: u32,
}

/// The decoded metadata record of one integer stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamMetadata {
    pub physical_stream_type: PhysicalStreamType,
    pub logical_stream_type: Option<LogicalStreamType>,
    pub logical_technique1: LogicalLevelTechnique,
    pub logical_technique2: LogicalLevelTechnique,
    pub physical_technique: PhysicalLevelTechnique,
    /// Element count of the physical stream.
    pub num_values: u32,
    /// Bytes occupied by the stream payload after this record.
    pub byte_length: u32,
    pub rle: Option<RleMetadata>,
    pub morton: Option<MortonSettings>,
}

impl StreamMetadata {
    pub fn decode(cursor: &mut Cursor) -> Result<Self> {
        let stream_type = cursor.read_u8()?;
        let physical_stream_type = PhysicalStreamType::try_from(stream_type & 0x0f)
            .map_err(|e| DecodeError::InvalidField("physical stream type", e.number.to_string()))?;
        let logical_stream_type = match stream_type >> 4 {
            0 => None,
            1 => Some(LogicalStreamType::Dictionary(
                DictionaryType::try_from(cursor.read_u8()?).map_err(|e| {
                    DecodeError::InvalidField("dictionary type", e.number.to_string())
                })?,
            )),
            2 => Some(LogicalStreamType::Length(
                LengthType::try_from(cursor.read_u8()?)
                    .map_err(|e| DecodeError::InvalidField("length type", e.number.to_string()))?,
            )),
            3 => Some(LogicalStreamType::Offset(
                OffsetType::try_from(cursor.read_u8()?)
                    .map_err(|e| DecodeError::InvalidField("offset type", e.number.to_string()))?,
            )),
            other => {
                return Err(DecodeError::InvalidField(
                    "logical stream type",
                    other.to_string(),
                ));
            }
        };

        let techniques = cursor.read_u8()?;
        let logical_technique1 = LogicalLevelTechnique::try_from(techniques >> 5)
            .map_err(|e| DecodeError::InvalidField("logical technique 1", e.number.to_string()))?;
        let logical_technique2 = LogicalLevelTechnique::try_from((techniques >> 2) & 0x07)
            .map_err(|e| DecodeError::InvalidField("logical technique 2", e.number.to_string()))?;
        let physical_technique = PhysicalLevelTechnique::try_from(techniques & 0x03)
            .map_err(|e| DecodeError::InvalidField("physical technique", e.number.to_string()))?;

        let num_values = cursor.read_varint_u32()?;
        let byte_length = cursor.read_varint_u32()?;

        let mut metadata = Self {
            physical_stream_type,
            logical_stream_type,
            logical_technique1,
            logical_technique2,
            physical_technique,
            num_values,
            byte_length,
            rle: None,
            morton: None,
        };
        if metadata.uses(LogicalLevelTechnique::Rle) {
            metadata.rle = Some(RleMetadata {
                runs: cursor.read_varint_u32()?,
                num_rle_values: cursor.read_varint_u32()?,
            });
        }
        if metadata.uses(LogicalLevelTechnique::Morton) {
            metadata.morton = Some(MortonSettings {
                num_bits: cursor.read_varint_u32()?,
                coordinate_shift: cursor.read_varint_u32()?,
            });
        }
        Ok(metadata)
    }

    pub fn uses(&self, technique: LogicalLevelTechnique) -> bool {
        self.logical_technique1 == technique || self.logical_technique2 == technique
    }

    /// Final element count after the logical cascade.
    pub fn decompressed_count(&self) -> usize {
        match self.rle {
            Some(rle) => rle.num_rle_values as usize,
            None => self.num_values as usize,
        }
    }

    pub fn dictionary_type(&self) -> Option<DictionaryType> {
        match self.logical_stream_type {
            Some(LogicalStreamType::Dictionary(t)) => Some(t),
            _ => None,
        }
    }

    pub fn length_type(&self) -> Option<LengthType> {
        match self.logical_stream_type {
            Some(LogicalStreamType::Length(t)) => Some(t),
            _ => None,
        }
    }

    pub fn offset_type(&self) -> Option<OffsetType> {
        match self.logical_stream_type {
            Some(LogicalStreamType::Offset(t)) => Some(t),
            _ => None,
        }
    }
}

/// How an integer stream's values are laid out once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorType {
    /// One value per element
    Flat,
    /// A single value shared by every element
    Const,
    /// An arithmetic sequence `base + i * delta`
    Sequence,
}

impl StreamMetadata {
    /// Classifies the stream's decoded layout from its metadata alone.
    pub fn vector_type(&self) -> VectorType {
        if let Some(rle) = self.rle {
            if rle.runs == 1 && !self.uses(LogicalLevelTechnique::Delta) {
                return VectorType::Const;
            }
            if rle.runs == 2 && self.logical_technique1 == LogicalLevelTechnique::Delta {
                return VectorType::Sequence;
            }
        } else if self.num_values == 1 {
            return VectorType::Const;
        }
        VectorType::Flat
    }
}
