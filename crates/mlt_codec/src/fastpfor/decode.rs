use byteorder::{ByteOrder, LittleEndian};

use super::{BLOCK_SIZE, PAGE_SIZE};
use crate::unpack::{unpack256, unpack32};
use crate::{CodecError, Result};

/// FastPFOR decoder with reusable scratch buffers.
///
/// A single value can decode any number of streams sequentially; it is not
/// safe to share between concurrent decodes.
pub struct FastPfor {
    /// Stream payload converted to little-endian words.
    words: Vec<u32>,
    /// Unpacked exception streams of the current page, indexed by bit width.
    exceptions: Vec<Vec<u32>>,
    pointers: Vec<usize>,
}

impl Default for FastPfor {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            exceptions: vec![Vec::new(); 33],
            pointers: vec![0; 33],
        }
    }
}

impl FastPfor {
    /// Decodes `num_values` integers from `data`.
    ///
    /// `data` must span exactly the stream payload; the caller advances its
    /// cursor by the stream's byte length independently.
    pub fn decode(&mut self, data: &[u8], num_values: usize) -> Result<Vec<u32>> {
        self.words.clear();
        self.words
            .extend(data.chunks_exact(4).map(LittleEndian::read_u32));

        let mut word_pos = 0usize;
        let aligned = self.word(word_pos)? as usize;
        word_pos += 1;
        if aligned % BLOCK_SIZE != 0 {
            return Err(CodecError::MisalignedHeader(aligned));
        }
        if aligned > num_values {
            return Err(CodecError::MisalignedHeader(aligned));
        }

        log::trace!(
            "decoding {aligned} aligned + {} tail values from {} bytes",
            num_values - aligned,
            data.len()
        );
        let mut out = Vec::with_capacity(num_values);
        while out.len() < aligned {
            let page_len = (aligned - out.len()).min(PAGE_SIZE);
            word_pos = self.decode_page(word_pos, page_len, &mut out)?;
        }
        self.decode_tail(data, word_pos * 4, num_values, &mut out)?;
        Ok(out)
    }

    fn decode_page(&mut self, start: usize, page_len: usize, out: &mut Vec<u32>) -> Result<usize> {
        let where_meta = self.word(start)? as usize;
        let mut meta = start
            .checked_add(where_meta)
            .ok_or(CodecError::PageBodyMismatch)?;

        let byte_size = self.word(meta)? as usize;
        meta += 1;
        let container = ByteContainer {
            words: meta,
            len: byte_size,
        };
        meta += byte_size.div_ceil(4);

        let bitmap = self.word(meta)?;
        meta += 1;
        meta = self.read_exception_streams(bitmap, meta)?;

        let mut body = start + 1;
        let mut header = 0usize;
        for _ in 0..page_len / BLOCK_SIZE {
            let bit_width = u32::from(container.byte(&self.words, header)?);
            let num_exceptions = container.byte(&self.words, header + 1)?;
            header += 2;
            if bit_width > 32 {
                return Err(CodecError::InvalidBitWidth(bit_width));
            }

            let block_start = out.len();
            out.resize(block_start + BLOCK_SIZE, 0);
            let body_words = self
                .words
                .get(body..)
                .ok_or(CodecError::UnexpectedEndOfBuffer {
                    offset: self.words.len() * 4,
                    needed: bit_width as usize * 8 * 4,
                })?;
            unpack256(body_words, bit_width, &mut out[block_start..])?;
            body += bit_width as usize * 8;

            if num_exceptions > 0 {
                let max_bits = u32::from(container.byte(&self.words, header)?);
                header += 1;
                let index = i64::from(max_bits) - i64::from(bit_width);
                if max_bits > 32 || !(1..=32).contains(&index) {
                    return Err(CodecError::InvalidExceptionBitWidth(index));
                }
                let index = index as usize;
                for _ in 0..num_exceptions {
                    let position = container.byte(&self.words, header)? as usize;
                    header += 1;
                    let patch = if index == 1 {
                        1
                    } else {
                        let pointer = self.pointers[index];
                        let value = self.exceptions[index]
                            .get(pointer)
                            .copied()
                            .ok_or(CodecError::ExceptionCountMismatch(index as u32))?;
                        self.pointers[index] = pointer + 1;
                        value
                    };
                    out[block_start + position] |= patch << bit_width;
                }
            }
        }
        if body != start + where_meta {
            return Err(CodecError::PageBodyMismatch);
        }
        Ok(meta)
    }

    /// Unpacks the per-width exception streams flagged in `bitmap`, starting
    /// at word `meta`. Returns the word offset of the next page.
    fn read_exception_streams(&mut self, bitmap: u32, mut meta: usize) -> Result<usize> {
        for width in 2..=32usize {
            self.exceptions[width].clear();
            self.pointers[width] = 0;
            if bitmap & (1 << (width - 1)) == 0 {
                continue;
            }
            let size = self.word(meta)? as usize;
            meta += 1;
            let rounded = size.div_ceil(32) * 32;
            self.exceptions[width].resize(rounded, 0);
            for group in 0..rounded / 32 {
                let input = self
                    .words
                    .get(meta..)
                    .ok_or(CodecError::UnexpectedEndOfBuffer {
                        offset: self.words.len() * 4,
                        needed: width * 4,
                    })?;
                unpack32(input, width as u32, &mut self.exceptions[width][group * 32..])?;
                meta += width;
            }
            self.exceptions[width].truncate(size);
        }
        Ok(meta)
    }

    /// Decodes the byte-wise tail: 7 bits per byte, terminator byte flagged
    /// with the MSB (the inverse of the varint convention).
    fn decode_tail(
        &self,
        data: &[u8],
        mut byte_pos: usize,
        num_values: usize,
        out: &mut Vec<u32>,
    ) -> Result<()> {
        let mut value = 0u32;
        let mut shift = 0u32;
        while out.len() < num_values {
            let byte = *data
                .get(byte_pos)
                .ok_or(CodecError::UnexpectedEndOfBuffer {
                    offset: byte_pos,
                    needed: 1,
                })?;
            byte_pos += 1;
            value |= u32::from(byte & 0x7f)
                .checked_shl(shift)
                .ok_or(CodecError::TruncatedVarint(byte_pos - 1))?;
            if byte & 0x80 != 0 {
                out.push(value);
                value = 0;
                shift = 0;
            } else {
                shift += 7;
            }
        }
        Ok(())
    }

    fn word(&self, index: usize) -> Result<u32> {
        self.words
            .get(index)
            .copied()
            .ok_or(CodecError::UnexpectedEndOfBuffer {
                offset: index * 4,
                needed: 4,
            })
    }
}

/// Byte-addressed view of the page metadata section, which lives inside the
/// word stream.
struct ByteContainer {
    words: usize,
    len: usize,
}

impl ByteContainer {
    fn byte(&self, words: &[u32], index: usize) -> Result<u8> {
        if index >= self.len {
            return Err(CodecError::UnexpectedEndOfBuffer {
                offset: self.words * 4 + index,
                needed: 1,
            });
        }
        let word = words
            .get(self.words + index / 4)
            .ok_or(CodecError::UnexpectedEndOfBuffer {
                offset: (self.words + index / 4) * 4,
                needed: 4,
            })?;
        Ok((word >> (8 * (index % 4))) as u8)
    }
}
