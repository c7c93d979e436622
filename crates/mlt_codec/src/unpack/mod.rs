//! Fixed-width unpacking of bit-packed int32 words.
//!
//! Packed streams store values most-significant-bit last: value `i` of width
//! `w` occupies bits `i*w .. (i+1)*w` of the word sequence, low bits first
//! within each 32-bit word. A `w`-bit unpack over 32 values consumes exactly
//! `w` input words.

mod generated;

use crate::{CodecError, Result};

/// Decodes 32 values of `width` bits from `input` into `output[..32]`.
pub fn unpack32(input: &[u32], width: u32, output: &mut [u32]) -> Result<()> {
    check_bounds(input, width, output, 32)?;
    match width {
        0 => output[..32].fill(0),
        1 => generated::unpack32_1(input, output),
        2 => generated::unpack32_2(input, output),
        3 => generated::unpack32_3(input, output),
        4 => generated::unpack32_4(input, output),
        5 => generated::unpack32_5(input, output),
        6 => generated::unpack32_6(input, output),
        7 => generated::unpack32_7(input, output),
        8 => generated::unpack32_8(input, output),
        9 => generated::unpack32_9(input, output),
        10 => generated::unpack32_10(input, output),
        11 => generated::unpack32_11(input, output),
        12 => generated::unpack32_12(input, output),
        16 => generated::unpack32_16(input, output),
        _ => unpack_generic(input, width, &mut output[..32])?,
    }
    Ok(())
}

/// Decodes a whole 256-value block of `width` bits from `8 * width` words.
pub fn unpack256(input: &[u32], width: u32, output: &mut [u32]) -> Result<()> {
    check_bounds(input, width * 8, output, 256)?;
    match width {
        0 => output[..256].fill(0),
        1 => generated::unpack256_1(input, output),
        2 => generated::unpack256_2(input, output),
        3 => generated::unpack256_3(input, output),
        4 => generated::unpack256_4(input, output),
        5 => generated::unpack256_5(input, output),
        6 => generated::unpack256_6(input, output),
        7 => generated::unpack256_7(input, output),
        8 => generated::unpack256_8(input, output),
        9 => generated::unpack256_9(input, output),
        10 => generated::unpack256_10(input, output),
        11 => generated::unpack256_11(input, output),
        12 => generated::unpack256_12(input, output),
        16 => generated::unpack256_16(input, output),
        _ => {
            for chunk in 0..8 {
                unpack_generic(
                    &input[chunk * width as usize..],
                    width,
                    &mut output[chunk * 32..(chunk + 1) * 32],
                )?;
            }
        }
    }
    Ok(())
}

/// Unpacks `output.len()` values of any width in 0..=32, tracking a running
/// bit offset and performing one or two shifts per value.
pub fn unpack_generic(input: &[u32], width: u32, output: &mut [u32]) -> Result<()> {
    if width > 32 {
        return Err(CodecError::InvalidBitWidth(width));
    }
    if width == 0 {
        output.fill(0);
        return Ok(());
    }
    let needed = (output.len() * width as usize).div_ceil(32);
    if input.len() < needed {
        return Err(CodecError::UnexpectedEndOfBuffer {
            offset: input.len() * 4,
            needed: needed * 4,
        });
    }
    let mask = width_mask(width);
    let mut bit_offset = 0usize;
    for out in output.iter_mut() {
        let word = bit_offset / 32;
        let shift = (bit_offset % 32) as u32;
        *out = if shift + width <= 32 {
            (input[word] >> shift) & mask
        } else {
            ((input[word] >> shift) | (input[word + 1] << (32 - shift))) & mask
        };
        bit_offset += width as usize;
    }
    Ok(())
}

/// Packs 32 values of `width` bits, appending exactly `width` words.
///
/// Values wider than `width` bits are masked; the caller routes their high
/// bits through an exception stream. Encoder support only.
pub fn pack32(values: &[u32], width: u32, output: &mut Vec<u32>) {
    debug_assert!(values.len() >= 32 && width <= 32);
    if width == 0 {
        return;
    }
    let mask = u64::from(width_mask(width));
    let mut current = 0u64;
    let mut bits = 0u32;
    for &value in &values[..32] {
        current |= (u64::from(value) & mask) << bits;
        bits += width;
        if bits >= 32 {
            output.push(current as u32);
            current >>= 32;
            bits -= 32;
        }
    }
    if bits > 0 {
        output.push(current as u32);
    }
}

#[inline]
fn width_mask(width: u32) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

fn check_bounds(input: &[u32], words: u32, output: &mut [u32], count: usize) -> Result<()> {
    if input.len() < words as usize {
        return Err(CodecError::UnexpectedEndOfBuffer {
            offset: input.len() * 4,
            needed: words as usize * 4,
        });
    }
    if output.len() < count {
        return Err(CodecError::UnexpectedEndOfBuffer {
            offset: output.len() * 4,
            needed: count * 4,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_any(values: &[u32], width: u32) -> Vec<u32> {
        let mut out = Vec::new();
        for chunk in values.chunks(32) {
            let mut block = chunk.to_vec();
            block.resize(32, 0);
            pack32(&block, width, &mut out);
        }
        out
    }

    fn sample(width: u32, len: usize) -> Vec<u32> {
        let mask = width_mask(width);
        (0..len as u32)
            .map(|i| i.wrapping_mul(2654435761) & mask)
            .collect()
    }

    #[test]
    fn specialized_widths_match_generic() {
        for width in [1u32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 16] {
            let values = sample(width, 32);
            let words = pack_any(&values, width);
            assert_eq!(words.len(), width as usize);

            let mut fast = [0u32; 32];
            unpack32(&words, width, &mut fast).unwrap();
            let mut generic = [0u32; 32];
            unpack_generic(&words, width, &mut generic).unwrap();
            assert_eq!(fast, generic);
            assert_eq!(&fast[..], &values[..]);
        }
    }

    #[test]
    fn unpack256_consumes_eight_times_width() {
        for width in [1u32, 3, 7, 11, 12, 16, 19, 27, 32] {
            let values = sample(width, 256);
            let words = pack_any(&values, width);
            assert_eq!(words.len(), width as usize * 8);

            let mut out = [0u32; 256];
            unpack256(&words, width, &mut out).unwrap();
            assert_eq!(&out[..], &values[..]);
        }
    }

    #[test]
    fn generic_handles_all_widths() {
        for width in 0..=32u32 {
            let values = sample(width, 64);
            let words = pack_any(&values, width);
            let mut out = vec![0u32; 64];
            unpack_generic(&words, width, &mut out).unwrap();
            assert_eq!(out, values);
        }
    }

    #[test]
    fn width_zero_is_all_zeros() {
        let mut out = [1u32; 32];
        unpack32(&[], 0, &mut out).unwrap();
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn short_input_is_rejected() {
        let words = [0u32; 3];
        let mut out = [0u32; 32];
        assert!(unpack32(&words, 4, &mut out).is_err());
        assert!(unpack_generic(&words, 33, &mut out).is_err());
    }
}
