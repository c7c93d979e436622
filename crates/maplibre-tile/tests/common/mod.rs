//! Hand-assembly helpers for tile byte streams, mirroring the wire layout
//! the decoder expects.

#![allow(dead_code)]

use maplibre_tile::{LogicalLevelTechnique, PhysicalLevelTechnique, PhysicalStreamType};

pub fn put_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn varints(values: &[u64]) -> Vec<u8> {
    let mut out = Vec::new();
    for &value in values {
        put_varint(&mut out, value);
    }
    out
}

pub fn zigzag32(value: i32) -> u64 {
    ((value << 1) ^ (value >> 31)) as u32 as u64
}

/// Logical stream kind discriminants for the packed stream-type byte.
pub const LOGICAL_NONE: u8 = 0;
pub const LOGICAL_DICTIONARY: u8 = 1;
pub const LOGICAL_LENGTH: u8 = 2;
pub const LOGICAL_OFFSET: u8 = 3;

/// One stream ready for serialization.
pub struct Stream {
    pub physical: PhysicalStreamType,
    /// `(discriminant, kind)` for the optional logical stream type byte.
    pub logical: Option<(u8, u8)>,
    pub technique1: LogicalLevelTechnique,
    pub technique2: LogicalLevelTechnique,
    pub physical_technique: PhysicalLevelTechnique,
    pub num_values: u32,
    pub rle: Option<(u32, u32)>,
    pub morton: Option<(u32, u32)>,
    pub payload: Vec<u8>,
}

impl Stream {
    pub fn varint(physical: PhysicalStreamType, values: &[u64]) -> Self {
        Self {
            physical,
            logical: None,
            technique1: LogicalLevelTechnique::None,
            technique2: LogicalLevelTechnique::None,
            physical_technique: PhysicalLevelTechnique::Varint,
            num_values: values.len() as u32,
            rle: None,
            morton: None,
            payload: varints(values),
        }
    }

    pub fn logical(mut self, discriminant: u8, kind: u8) -> Self {
        self.logical = Some((discriminant, kind));
        self
    }

    pub fn techniques(mut self, t1: LogicalLevelTechnique, t2: LogicalLevelTechnique) -> Self {
        self.technique1 = t1;
        self.technique2 = t2;
        self
    }

    pub fn rle(mut self, runs: u32, num_rle_values: u32) -> Self {
        self.rle = Some((runs, num_rle_values));
        self.technique2 = self.technique1;
        self.technique1 = LogicalLevelTechnique::Rle;
        self
    }

    /// RLE as the *second* technique (`t1` stays, e.g. DELTA over RLE runs).
    pub fn rle_under(mut self, t1: LogicalLevelTechnique, runs: u32, num_rle_values: u32) -> Self {
        self.technique1 = t1;
        self.technique2 = LogicalLevelTechnique::Rle;
        self.rle = Some((runs, num_rle_values));
        self
    }

    pub fn write(self, out: &mut Vec<u8>) {
        let (discriminant, kind) = self.logical.unwrap_or((LOGICAL_NONE, 0));
        out.push((self.physical as u8) | (discriminant << 4));
        if discriminant != LOGICAL_NONE {
            out.push(kind);
        }
        out.push(
            (self.technique1 as u8) << 5
                | (self.technique2 as u8) << 2
                | self.physical_technique as u8,
        );
        put_varint(out, u64::from(self.num_values));
        put_varint(out, self.payload.len() as u64);
        if let Some((runs, num_rle_values)) = self.rle {
            put_varint(out, u64::from(runs));
            put_varint(out, u64::from(num_rle_values));
        }
        if let Some((num_bits, shift)) = self.morton {
            put_varint(out, u64::from(num_bits));
            put_varint(out, u64::from(shift));
        }
        out.extend_from_slice(&self.payload);
    }

    pub fn to_bytes(self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write(&mut out);
        out
    }
}

/// A constant-classified stream: one run covering every value.
pub fn const_stream(physical: PhysicalStreamType, value: u64, count: u32) -> Stream {
    Stream::varint(physical, &[u64::from(count), value]).rle(1, count)
}

/// A zig-zag componentwise-delta DATA stream from literal `(x, y)` vertices.
pub fn vertex_stream(vertices: &[(i32, i32)]) -> Stream {
    let mut deltas = Vec::new();
    let (mut last_x, mut last_y) = (0i32, 0i32);
    for &(x, y) in vertices {
        deltas.push(zigzag32(x.wrapping_sub(last_x)));
        deltas.push(zigzag32(y.wrapping_sub(last_y)));
        last_x = x;
        last_y = y;
    }
    Stream::varint(PhysicalStreamType::Data, &deltas)
        .logical(LOGICAL_DICTIONARY, 1) // DictionaryType::Vertex
        .techniques(
            LogicalLevelTechnique::ComponentwiseDelta,
            LogicalLevelTechnique::None,
        )
}

/// A LENGTH stream from literal lengths.
pub fn length_stream(kind: u8, lengths: &[u64]) -> Stream {
    Stream::varint(PhysicalStreamType::Length, lengths).logical(LOGICAL_LENGTH, kind)
}
