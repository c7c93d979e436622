//! Fixed-width bit unpacking, specialized per width.
//!
//! Each `unpack32_w` decodes 32 values from exactly `w` packed words; the
//! `unpack256_w` variants decode a whole block from `8 * w` words. Generated
//! routines, behaviorally identical to [`super::unpack_generic`].

#![allow(clippy::identity_op)]

pub(crate) fn unpack32_1(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x1;
    output[1] = (input[0] >> 1) & 0x1;
    output[2] = (input[0] >> 2) & 0x1;
    output[3] = (input[0] >> 3) & 0x1;
    output[4] = (input[0] >> 4) & 0x1;
    output[5] = (input[0] >> 5) & 0x1;
    output[6] = (input[0] >> 6) & 0x1;
    output[7] = (input[0] >> 7) & 0x1;
    output[8] = (input[0] >> 8) & 0x1;
    output[9] = (input[0] >> 9) & 0x1;
    output[10] = (input[0] >> 10) & 0x1;
    output[11] = (input[0] >> 11) & 0x1;
    output[12] = (input[0] >> 12) & 0x1;
    output[13] = (input[0] >> 13) & 0x1;
    output[14] = (input[0] >> 14) & 0x1;
    output[15] = (input[0] >> 15) & 0x1;
    output[16] = (input[0] >> 16) & 0x1;
    output[17] = (input[0] >> 17) & 0x1;
    output[18] = (input[0] >> 18) & 0x1;
    output[19] = (input[0] >> 19) & 0x1;
    output[20] = (input[0] >> 20) & 0x1;
    output[21] = (input[0] >> 21) & 0x1;
    output[22] = (input[0] >> 22) & 0x1;
    output[23] = (input[0] >> 23) & 0x1;
    output[24] = (input[0] >> 24) & 0x1;
    output[25] = (input[0] >> 25) & 0x1;
    output[26] = (input[0] >> 26) & 0x1;
    output[27] = (input[0] >> 27) & 0x1;
    output[28] = (input[0] >> 28) & 0x1;
    output[29] = (input[0] >> 29) & 0x1;
    output[30] = (input[0] >> 30) & 0x1;
    output[31] = input[0] >> 31;
}

pub(crate) fn unpack256_1(input: &[u32], output: &mut [u32]) {
    unpack32_1(&input[0..], &mut output[0..]);
    unpack32_1(&input[1..], &mut output[32..]);
    unpack32_1(&input[2..], &mut output[64..]);
    unpack32_1(&input[3..], &mut output[96..]);
    unpack32_1(&input[4..], &mut output[128..]);
    unpack32_1(&input[5..], &mut output[160..]);
    unpack32_1(&input[6..], &mut output[192..]);
    unpack32_1(&input[7..], &mut output[224..]);
}

pub(crate) fn unpack32_2(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x3;
    output[1] = (input[0] >> 2) & 0x3;
    output[2] = (input[0] >> 4) & 0x3;
    output[3] = (input[0] >> 6) & 0x3;
    output[4] = (input[0] >> 8) & 0x3;
    output[5] = (input[0] >> 10) & 0x3;
    output[6] = (input[0] >> 12) & 0x3;
    output[7] = (input[0] >> 14) & 0x3;
    output[8] = (input[0] >> 16) & 0x3;
    output[9] = (input[0] >> 18) & 0x3;
    output[10] = (input[0] >> 20) & 0x3;
    output[11] = (input[0] >> 22) & 0x3;
    output[12] = (input[0] >> 24) & 0x3;
    output[13] = (input[0] >> 26) & 0x3;
    output[14] = (input[0] >> 28) & 0x3;
    output[15] = input[0] >> 30;
    output[16] = input[1] & 0x3;
    output[17] = (input[1] >> 2) & 0x3;
    output[18] = (input[1] >> 4) & 0x3;
    output[19] = (input[1] >> 6) & 0x3;
    output[20] = (input[1] >> 8) & 0x3;
    output[21] = (input[1] >> 10) & 0x3;
    output[22] = (input[1] >> 12) & 0x3;
    output[23] = (input[1] >> 14) & 0x3;
    output[24] = (input[1] >> 16) & 0x3;
    output[25] = (input[1] >> 18) & 0x3;
    output[26] = (input[1] >> 20) & 0x3;
    output[27] = (input[1] >> 22) & 0x3;
    output[28] = (input[1] >> 24) & 0x3;
    output[29] = (input[1] >> 26) & 0x3;
    output[30] = (input[1] >> 28) & 0x3;
    output[31] = input[1] >> 30;
}

pub(crate) fn unpack256_2(input: &[u32], output: &mut [u32]) {
    unpack32_2(&input[0..], &mut output[0..]);
    unpack32_2(&input[2..], &mut output[32..]);
    unpack32_2(&input[4..], &mut output[64..]);
    unpack32_2(&input[6..], &mut output[96..]);
    unpack32_2(&input[8..], &mut output[128..]);
    unpack32_2(&input[10..], &mut output[160..]);
    unpack32_2(&input[12..], &mut output[192..]);
    unpack32_2(&input[14..], &mut output[224..]);
}

pub(crate) fn unpack32_3(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x7;
    output[1] = (input[0] >> 3) & 0x7;
    output[2] = (input[0] >> 6) & 0x7;
    output[3] = (input[0] >> 9) & 0x7;
    output[4] = (input[0] >> 12) & 0x7;
    output[5] = (input[0] >> 15) & 0x7;
    output[6] = (input[0] >> 18) & 0x7;
    output[7] = (input[0] >> 21) & 0x7;
    output[8] = (input[0] >> 24) & 0x7;
    output[9] = (input[0] >> 27) & 0x7;
    output[10] = (input[0] >> 30) | ((input[1] & 0x1) << 2);
    output[11] = (input[1] >> 1) & 0x7;
    output[12] = (input[1] >> 4) & 0x7;
    output[13] = (input[1] >> 7) & 0x7;
    output[14] = (input[1] >> 10) & 0x7;
    output[15] = (input[1] >> 13) & 0x7;
    output[16] = (input[1] >> 16) & 0x7;
    output[17] = (input[1] >> 19) & 0x7;
    output[18] = (input[1] >> 22) & 0x7;
    output[19] = (input[1] >> 25) & 0x7;
    output[20] = (input[1] >> 28) & 0x7;
    output[21] = (input[1] >> 31) | ((input[2] & 0x3) << 1);
    output[22] = (input[2] >> 2) & 0x7;
    output[23] = (input[2] >> 5) & 0x7;
    output[24] = (input[2] >> 8) & 0x7;
    output[25] = (input[2] >> 11) & 0x7;
    output[26] = (input[2] >> 14) & 0x7;
    output[27] = (input[2] >> 17) & 0x7;
    output[28] = (input[2] >> 20) & 0x7;
    output[29] = (input[2] >> 23) & 0x7;
    output[30] = (input[2] >> 26) & 0x7;
    output[31] = input[2] >> 29;
}

pub(crate) fn unpack256_3(input: &[u32], output: &mut [u32]) {
    unpack32_3(&input[0..], &mut output[0..]);
    unpack32_3(&input[3..], &mut output[32..]);
    unpack32_3(&input[6..], &mut output[64..]);
    unpack32_3(&input[9..], &mut output[96..]);
    unpack32_3(&input[12..], &mut output[128..]);
    unpack32_3(&input[15..], &mut output[160..]);
    unpack32_3(&input[18..], &mut output[192..]);
    unpack32_3(&input[21..], &mut output[224..]);
}

pub(crate) fn unpack32_4(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0xf;
    output[1] = (input[0] >> 4) & 0xf;
    output[2] = (input[0] >> 8) & 0xf;
    output[3] = (input[0] >> 12) & 0xf;
    output[4] = (input[0] >> 16) & 0xf;
    output[5] = (input[0] >> 20) & 0xf;
    output[6] = (input[0] >> 24) & 0xf;
    output[7] = input[0] >> 28;
    output[8] = input[1] & 0xf;
    output[9] = (input[1] >> 4) & 0xf;
    output[10] = (input[1] >> 8) & 0xf;
    output[11] = (input[1] >> 12) & 0xf;
    output[12] = (input[1] >> 16) & 0xf;
    output[13] = (input[1] >> 20) & 0xf;
    output[14] = (input[1] >> 24) & 0xf;
    output[15] = input[1] >> 28;
    output[16] = input[2] & 0xf;
    output[17] = (input[2] >> 4) & 0xf;
    output[18] = (input[2] >> 8) & 0xf;
    output[19] = (input[2] >> 12) & 0xf;
    output[20] = (input[2] >> 16) & 0xf;
    output[21] = (input[2] >> 20) & 0xf;
    output[22] = (input[2] >> 24) & 0xf;
    output[23] = input[2] >> 28;
    output[24] = input[3] & 0xf;
    output[25] = (input[3] >> 4) & 0xf;
    output[26] = (input[3] >> 8) & 0xf;
    output[27] = (input[3] >> 12) & 0xf;
    output[28] = (input[3] >> 16) & 0xf;
    output[29] = (input[3] >> 20) & 0xf;
    output[30] = (input[3] >> 24) & 0xf;
    output[31] = input[3] >> 28;
}

pub(crate) fn unpack256_4(input: &[u32], output: &mut [u32]) {
    unpack32_4(&input[0..], &mut output[0..]);
    unpack32_4(&input[4..], &mut output[32..]);
    unpack32_4(&input[8..], &mut output[64..]);
    unpack32_4(&input[12..], &mut output[96..]);
    unpack32_4(&input[16..], &mut output[128..]);
    unpack32_4(&input[20..], &mut output[160..]);
    unpack32_4(&input[24..], &mut output[192..]);
    unpack32_4(&input[28..], &mut output[224..]);
}

pub(crate) fn unpack32_5(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x1f;
    output[1] = (input[0] >> 5) & 0x1f;
    output[2] = (input[0] >> 10) & 0x1f;
    output[3] = (input[0] >> 15) & 0x1f;
    output[4] = (input[0] >> 20) & 0x1f;
    output[5] = (input[0] >> 25) & 0x1f;
    output[6] = (input[0] >> 30) | ((input[1] & 0x7) << 2);
    output[7] = (input[1] >> 3) & 0x1f;
    output[8] = (input[1] >> 8) & 0x1f;
    output[9] = (input[1] >> 13) & 0x1f;
    output[10] = (input[1] >> 18) & 0x1f;
    output[11] = (input[1] >> 23) & 0x1f;
    output[12] = (input[1] >> 28) | ((input[2] & 0x1) << 4);
    output[13] = (input[2] >> 1) & 0x1f;
    output[14] = (input[2] >> 6) & 0x1f;
    output[15] = (input[2] >> 11) & 0x1f;
    output[16] = (input[2] >> 16) & 0x1f;
    output[17] = (input[2] >> 21) & 0x1f;
    output[18] = (input[2] >> 26) & 0x1f;
    output[19] = (input[2] >> 31) | ((input[3] & 0xf) << 1);
    output[20] = (input[3] >> 4) & 0x1f;
    output[21] = (input[3] >> 9) & 0x1f;
    output[22] = (input[3] >> 14) & 0x1f;
    output[23] = (input[3] >> 19) & 0x1f;
    output[24] = (input[3] >> 24) & 0x1f;
    output[25] = (input[3] >> 29) | ((input[4] & 0x3) << 3);
    output[26] = (input[4] >> 2) & 0x1f;
    output[27] = (input[4] >> 7) & 0x1f;
    output[28] = (input[4] >> 12) & 0x1f;
    output[29] = (input[4] >> 17) & 0x1f;
    output[30] = (input[4] >> 22) & 0x1f;
    output[31] = input[4] >> 27;
}

pub(crate) fn unpack256_5(input: &[u32], output: &mut [u32]) {
    unpack32_5(&input[0..], &mut output[0..]);
    unpack32_5(&input[5..], &mut output[32..]);
    unpack32_5(&input[10..], &mut output[64..]);
    unpack32_5(&input[15..], &mut output[96..]);
    unpack32_5(&input[20..], &mut output[128..]);
    unpack32_5(&input[25..], &mut output[160..]);
    unpack32_5(&input[30..], &mut output[192..]);
    unpack32_5(&input[35..], &mut output[224..]);
}

pub(crate) fn unpack32_6(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x3f;
    output[1] = (input[0] >> 6) & 0x3f;
    output[2] = (input[0] >> 12) & 0x3f;
    output[3] = (input[0] >> 18) & 0x3f;
    output[4] = (input[0] >> 24) & 0x3f;
    output[5] = (input[0] >> 30) | ((input[1] & 0xf) << 2);
    output[6] = (input[1] >> 4) & 0x3f;
    output[7] = (input[1] >> 10) & 0x3f;
    output[8] = (input[1] >> 16) & 0x3f;
    output[9] = (input[1] >> 22) & 0x3f;
    output[10] = (input[1] >> 28) | ((input[2] & 0x3) << 4);
    output[11] = (input[2] >> 2) & 0x3f;
    output[12] = (input[2] >> 8) & 0x3f;
    output[13] = (input[2] >> 14) & 0x3f;
    output[14] = (input[2] >> 20) & 0x3f;
    output[15] = input[2] >> 26;
    output[16] = input[3] & 0x3f;
    output[17] = (input[3] >> 6) & 0x3f;
    output[18] = (input[3] >> 12) & 0x3f;
    output[19] = (input[3] >> 18) & 0x3f;
    output[20] = (input[3] >> 24) & 0x3f;
    output[21] = (input[3] >> 30) | ((input[4] & 0xf) << 2);
    output[22] = (input[4] >> 4) & 0x3f;
    output[23] = (input[4] >> 10) & 0x3f;
    output[24] = (input[4] >> 16) & 0x3f;
    output[25] = (input[4] >> 22) & 0x3f;
    output[26] = (input[4] >> 28) | ((input[5] & 0x3) << 4);
    output[27] = (input[5] >> 2) & 0x3f;
    output[28] = (input[5] >> 8) & 0x3f;
    output[29] = (input[5] >> 14) & 0x3f;
    output[30] = (input[5] >> 20) & 0x3f;
    output[31] = input[5] >> 26;
}

pub(crate) fn unpack256_6(input: &[u32], output: &mut [u32]) {
    unpack32_6(&input[0..], &mut output[0..]);
    unpack32_6(&input[6..], &mut output[32..]);
    unpack32_6(&input[12..], &mut output[64..]);
    unpack32_6(&input[18..], &mut output[96..]);
    unpack32_6(&input[24..], &mut output[128..]);
    unpack32_6(&input[30..], &mut output[160..]);
    unpack32_6(&input[36..], &mut output[192..]);
    unpack32_6(&input[42..], &mut output[224..]);
}

pub(crate) fn unpack32_7(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x7f;
    output[1] = (input[0] >> 7) & 0x7f;
    output[2] = (input[0] >> 14) & 0x7f;
    output[3] = (input[0] >> 21) & 0x7f;
    output[4] = (input[0] >> 28) | ((input[1] & 0x7) << 4);
    output[5] = (input[1] >> 3) & 0x7f;
    output[6] = (input[1] >> 10) & 0x7f;
    output[7] = (input[1] >> 17) & 0x7f;
    output[8] = (input[1] >> 24) & 0x7f;
    output[9] = (input[1] >> 31) | ((input[2] & 0x3f) << 1);
    output[10] = (input[2] >> 6) & 0x7f;
    output[11] = (input[2] >> 13) & 0x7f;
    output[12] = (input[2] >> 20) & 0x7f;
    output[13] = (input[2] >> 27) | ((input[3] & 0x3) << 5);
    output[14] = (input[3] >> 2) & 0x7f;
    output[15] = (input[3] >> 9) & 0x7f;
    output[16] = (input[3] >> 16) & 0x7f;
    output[17] = (input[3] >> 23) & 0x7f;
    output[18] = (input[3] >> 30) | ((input[4] & 0x1f) << 2);
    output[19] = (input[4] >> 5) & 0x7f;
    output[20] = (input[4] >> 12) & 0x7f;
    output[21] = (input[4] >> 19) & 0x7f;
    output[22] = (input[4] >> 26) | ((input[5] & 0x1) << 6);
    output[23] = (input[5] >> 1) & 0x7f;
    output[24] = (input[5] >> 8) & 0x7f;
    output[25] = (input[5] >> 15) & 0x7f;
    output[26] = (input[5] >> 22) & 0x7f;
    output[27] = (input[5] >> 29) | ((input[6] & 0xf) << 3);
    output[28] = (input[6] >> 4) & 0x7f;
    output[29] = (input[6] >> 11) & 0x7f;
    output[30] = (input[6] >> 18) & 0x7f;
    output[31] = input[6] >> 25;
}

pub(crate) fn unpack256_7(input: &[u32], output: &mut [u32]) {
    unpack32_7(&input[0..], &mut output[0..]);
    unpack32_7(&input[7..], &mut output[32..]);
    unpack32_7(&input[14..], &mut output[64..]);
    unpack32_7(&input[21..], &mut output[96..]);
    unpack32_7(&input[28..], &mut output[128..]);
    unpack32_7(&input[35..], &mut output[160..]);
    unpack32_7(&input[42..], &mut output[192..]);
    unpack32_7(&input[49..], &mut output[224..]);
}

pub(crate) fn unpack32_8(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0xff;
    output[1] = (input[0] >> 8) & 0xff;
    output[2] = (input[0] >> 16) & 0xff;
    output[3] = input[0] >> 24;
    output[4] = input[1] & 0xff;
    output[5] = (input[1] >> 8) & 0xff;
    output[6] = (input[1] >> 16) & 0xff;
    output[7] = input[1] >> 24;
    output[8] = input[2] & 0xff;
    output[9] = (input[2] >> 8) & 0xff;
    output[10] = (input[2] >> 16) & 0xff;
    output[11] = input[2] >> 24;
    output[12] = input[3] & 0xff;
    output[13] = (input[3] >> 8) & 0xff;
    output[14] = (input[3] >> 16) & 0xff;
    output[15] = input[3] >> 24;
    output[16] = input[4] & 0xff;
    output[17] = (input[4] >> 8) & 0xff;
    output[18] = (input[4] >> 16) & 0xff;
    output[19] = input[4] >> 24;
    output[20] = input[5] & 0xff;
    output[21] = (input[5] >> 8) & 0xff;
    output[22] = (input[5] >> 16) & 0xff;
    output[23] = input[5] >> 24;
    output[24] = input[6] & 0xff;
    output[25] = (input[6] >> 8) & 0xff;
    output[26] = (input[6] >> 16) & 0xff;
    output[27] = input[6] >> 24;
    output[28] = input[7] & 0xff;
    output[29] = (input[7] >> 8) & 0xff;
    output[30] = (input[7] >> 16) & 0xff;
    output[31] = input[7] >> 24;
}

pub(crate) fn unpack256_8(input: &[u32], output: &mut [u32]) {
    unpack32_8(&input[0..], &mut output[0..]);
    unpack32_8(&input[8..], &mut output[32..]);
    unpack32_8(&input[16..], &mut output[64..]);
    unpack32_8(&input[24..], &mut output[96..]);
    unpack32_8(&input[32..], &mut output[128..]);
    unpack32_8(&input[40..], &mut output[160..]);
    unpack32_8(&input[48..], &mut output[192..]);
    unpack32_8(&input[56..], &mut output[224..]);
}

pub(crate) fn unpack32_9(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x1ff;
    output[1] = (input[0] >> 9) & 0x1ff;
    output[2] = (input[0] >> 18) & 0x1ff;
    output[3] = (input[0] >> 27) | ((input[1] & 0xf) << 5);
    output[4] = (input[1] >> 4) & 0x1ff;
    output[5] = (input[1] >> 13) & 0x1ff;
    output[6] = (input[1] >> 22) & 0x1ff;
    output[7] = (input[1] >> 31) | ((input[2] & 0xff) << 1);
    output[8] = (input[2] >> 8) & 0x1ff;
    output[9] = (input[2] >> 17) & 0x1ff;
    output[10] = (input[2] >> 26) | ((input[3] & 0x7) << 6);
    output[11] = (input[3] >> 3) & 0x1ff;
    output[12] = (input[3] >> 12) & 0x1ff;
    output[13] = (input[3] >> 21) & 0x1ff;
    output[14] = (input[3] >> 30) | ((input[4] & 0x7f) << 2);
    output[15] = (input[4] >> 7) & 0x1ff;
    output[16] = (input[4] >> 16) & 0x1ff;
    output[17] = (input[4] >> 25) | ((input[5] & 0x3) << 7);
    output[18] = (input[5] >> 2) & 0x1ff;
    output[19] = (input[5] >> 11) & 0x1ff;
    output[20] = (input[5] >> 20) & 0x1ff;
    output[21] = (input[5] >> 29) | ((input[6] & 0x3f) << 3);
    output[22] = (input[6] >> 6) & 0x1ff;
    output[23] = (input[6] >> 15) & 0x1ff;
    output[24] = (input[6] >> 24) | ((input[7] & 0x1) << 8);
    output[25] = (input[7] >> 1) & 0x1ff;
    output[26] = (input[7] >> 10) & 0x1ff;
    output[27] = (input[7] >> 19) & 0x1ff;
    output[28] = (input[7] >> 28) | ((input[8] & 0x1f) << 4);
    output[29] = (input[8] >> 5) & 0x1ff;
    output[30] = (input[8] >> 14) & 0x1ff;
    output[31] = input[8] >> 23;
}

pub(crate) fn unpack256_9(input: &[u32], output: &mut [u32]) {
    unpack32_9(&input[0..], &mut output[0..]);
    unpack32_9(&input[9..], &mut output[32..]);
    unpack32_9(&input[18..], &mut output[64..]);
    unpack32_9(&input[27..], &mut output[96..]);
    unpack32_9(&input[36..], &mut output[128..]);
    unpack32_9(&input[45..], &mut output[160..]);
    unpack32_9(&input[54..], &mut output[192..]);
    unpack32_9(&input[63..], &mut output[224..]);
}

pub(crate) fn unpack32_10(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x3ff;
    output[1] = (input[0] >> 10) & 0x3ff;
    output[2] = (input[0] >> 20) & 0x3ff;
    output[3] = (input[0] >> 30) | ((input[1] & 0xff) << 2);
    output[4] = (input[1] >> 8) & 0x3ff;
    output[5] = (input[1] >> 18) & 0x3ff;
    output[6] = (input[1] >> 28) | ((input[2] & 0x3f) << 4);
    output[7] = (input[2] >> 6) & 0x3ff;
    output[8] = (input[2] >> 16) & 0x3ff;
    output[9] = (input[2] >> 26) | ((input[3] & 0xf) << 6);
    output[10] = (input[3] >> 4) & 0x3ff;
    output[11] = (input[3] >> 14) & 0x3ff;
    output[12] = (input[3] >> 24) | ((input[4] & 0x3) << 8);
    output[13] = (input[4] >> 2) & 0x3ff;
    output[14] = (input[4] >> 12) & 0x3ff;
    output[15] = input[4] >> 22;
    output[16] = input[5] & 0x3ff;
    output[17] = (input[5] >> 10) & 0x3ff;
    output[18] = (input[5] >> 20) & 0x3ff;
    output[19] = (input[5] >> 30) | ((input[6] & 0xff) << 2);
    output[20] = (input[6] >> 8) & 0x3ff;
    output[21] = (input[6] >> 18) & 0x3ff;
    output[22] = (input[6] >> 28) | ((input[7] & 0x3f) << 4);
    output[23] = (input[7] >> 6) & 0x3ff;
    output[24] = (input[7] >> 16) & 0x3ff;
    output[25] = (input[7] >> 26) | ((input[8] & 0xf) << 6);
    output[26] = (input[8] >> 4) & 0x3ff;
    output[27] = (input[8] >> 14) & 0x3ff;
    output[28] = (input[8] >> 24) | ((input[9] & 0x3) << 8);
    output[29] = (input[9] >> 2) & 0x3ff;
    output[30] = (input[9] >> 12) & 0x3ff;
    output[31] = input[9] >> 22;
}

pub(crate) fn unpack256_10(input: &[u32], output: &mut [u32]) {
    unpack32_10(&input[0..], &mut output[0..]);
    unpack32_10(&input[10..], &mut output[32..]);
    unpack32_10(&input[20..], &mut output[64..]);
    unpack32_10(&input[30..], &mut output[96..]);
    unpack32_10(&input[40..], &mut output[128..]);
    unpack32_10(&input[50..], &mut output[160..]);
    unpack32_10(&input[60..], &mut output[192..]);
    unpack32_10(&input[70..], &mut output[224..]);
}

pub(crate) fn unpack32_11(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0x7ff;
    output[1] = (input[0] >> 11) & 0x7ff;
    output[2] = (input[0] >> 22) | ((input[1] & 0x1) << 10);
    output[3] = (input[1] >> 1) & 0x7ff;
    output[4] = (input[1] >> 12) & 0x7ff;
    output[5] = (input[1] >> 23) | ((input[2] & 0x3) << 9);
    output[6] = (input[2] >> 2) & 0x7ff;
    output[7] = (input[2] >> 13) & 0x7ff;
    output[8] = (input[2] >> 24) | ((input[3] & 0x7) << 8);
    output[9] = (input[3] >> 3) & 0x7ff;
    output[10] = (input[3] >> 14) & 0x7ff;
    output[11] = (input[3] >> 25) | ((input[4] & 0xf) << 7);
    output[12] = (input[4] >> 4) & 0x7ff;
    output[13] = (input[4] >> 15) & 0x7ff;
    output[14] = (input[4] >> 26) | ((input[5] & 0x1f) << 6);
    output[15] = (input[5] >> 5) & 0x7ff;
    output[16] = (input[5] >> 16) & 0x7ff;
    output[17] = (input[5] >> 27) | ((input[6] & 0x3f) << 5);
    output[18] = (input[6] >> 6) & 0x7ff;
    output[19] = (input[6] >> 17) & 0x7ff;
    output[20] = (input[6] >> 28) | ((input[7] & 0x7f) << 4);
    output[21] = (input[7] >> 7) & 0x7ff;
    output[22] = (input[7] >> 18) & 0x7ff;
    output[23] = (input[7] >> 29) | ((input[8] & 0xff) << 3);
    output[24] = (input[8] >> 8) & 0x7ff;
    output[25] = (input[8] >> 19) & 0x7ff;
    output[26] = (input[8] >> 30) | ((input[9] & 0x1ff) << 2);
    output[27] = (input[9] >> 9) & 0x7ff;
    output[28] = (input[9] >> 20) & 0x7ff;
    output[29] = (input[9] >> 31) | ((input[10] & 0x3ff) << 1);
    output[30] = (input[10] >> 10) & 0x7ff;
    output[31] = input[10] >> 21;
}

pub(crate) fn unpack256_11(input: &[u32], output: &mut [u32]) {
    unpack32_11(&input[0..], &mut output[0..]);
    unpack32_11(&input[11..], &mut output[32..]);
    unpack32_11(&input[22..], &mut output[64..]);
    unpack32_11(&input[33..], &mut output[96..]);
    unpack32_11(&input[44..], &mut output[128..]);
    unpack32_11(&input[55..], &mut output[160..]);
    unpack32_11(&input[66..], &mut output[192..]);
    unpack32_11(&input[77..], &mut output[224..]);
}

pub(crate) fn unpack32_12(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0xfff;
    output[1] = (input[0] >> 12) & 0xfff;
    output[2] = (input[0] >> 24) | ((input[1] & 0xf) << 8);
    output[3] = (input[1] >> 4) & 0xfff;
    output[4] = (input[1] >> 16) & 0xfff;
    output[5] = (input[1] >> 28) | ((input[2] & 0xff) << 4);
    output[6] = (input[2] >> 8) & 0xfff;
    output[7] = input[2] >> 20;
    output[8] = input[3] & 0xfff;
    output[9] = (input[3] >> 12) & 0xfff;
    output[10] = (input[3] >> 24) | ((input[4] & 0xf) << 8);
    output[11] = (input[4] >> 4) & 0xfff;
    output[12] = (input[4] >> 16) & 0xfff;
    output[13] = (input[4] >> 28) | ((input[5] & 0xff) << 4);
    output[14] = (input[5] >> 8) & 0xfff;
    output[15] = input[5] >> 20;
    output[16] = input[6] & 0xfff;
    output[17] = (input[6] >> 12) & 0xfff;
    output[18] = (input[6] >> 24) | ((input[7] & 0xf) << 8);
    output[19] = (input[7] >> 4) & 0xfff;
    output[20] = (input[7] >> 16) & 0xfff;
    output[21] = (input[7] >> 28) | ((input[8] & 0xff) << 4);
    output[22] = (input[8] >> 8) & 0xfff;
    output[23] = input[8] >> 20;
    output[24] = input[9] & 0xfff;
    output[25] = (input[9] >> 12) & 0xfff;
    output[26] = (input[9] >> 24) | ((input[10] & 0xf) << 8);
    output[27] = (input[10] >> 4) & 0xfff;
    output[28] = (input[10] >> 16) & 0xfff;
    output[29] = (input[10] >> 28) | ((input[11] & 0xff) << 4);
    output[30] = (input[11] >> 8) & 0xfff;
    output[31] = input[11] >> 20;
}

pub(crate) fn unpack256_12(input: &[u32], output: &mut [u32]) {
    unpack32_12(&input[0..], &mut output[0..]);
    unpack32_12(&input[12..], &mut output[32..]);
    unpack32_12(&input[24..], &mut output[64..]);
    unpack32_12(&input[36..], &mut output[96..]);
    unpack32_12(&input[48..], &mut output[128..]);
    unpack32_12(&input[60..], &mut output[160..]);
    unpack32_12(&input[72..], &mut output[192..]);
    unpack32_12(&input[84..], &mut output[224..]);
}

pub(crate) fn unpack32_16(input: &[u32], output: &mut [u32]) {
    output[0] = input[0] & 0xffff;
    output[1] = input[0] >> 16;
    output[2] = input[1] & 0xffff;
    output[3] = input[1] >> 16;
    output[4] = input[2] & 0xffff;
    output[5] = input[2] >> 16;
    output[6] = input[3] & 0xffff;
    output[7] = input[3] >> 16;
    output[8] = input[4] & 0xffff;
    output[9] = input[4] >> 16;
    output[10] = input[5] & 0xffff;
    output[11] = input[5] >> 16;
    output[12] = input[6] & 0xffff;
    output[13] = input[6] >> 16;
    output[14] = input[7] & 0xffff;
    output[15] = input[7] >> 16;
    output[16] = input[8] & 0xffff;
    output[17] = input[8] >> 16;
    output[18] = input[9] & 0xffff;
    output[19] = input[9] >> 16;
    output[20] = input[10] & 0xffff;
    output[21] = input[10] >> 16;
    output[22] = input[11] & 0xffff;
    output[23] = input[11] >> 16;
    output[24] = input[12] & 0xffff;
    output[25] = input[12] >> 16;
    output[26] = input[13] & 0xffff;
    output[27] = input[13] >> 16;
    output[28] = input[14] & 0xffff;
    output[29] = input[14] >> 16;
    output[30] = input[15] & 0xffff;
    output[31] = input[15] >> 16;
}

pub(crate) fn unpack256_16(input: &[u32], output: &mut [u32]) {
    unpack32_16(&input[0..], &mut output[0..]);
    unpack32_16(&input[16..], &mut output[32..]);
    unpack32_16(&input[32..], &mut output[64..]);
    unpack32_16(&input[48..], &mut output[96..]);
    unpack32_16(&input[64..], &mut output[128..]);
    unpack32_16(&input[80..], &mut output[160..]);
    unpack32_16(&input[96..], &mut output[192..]);
    unpack32_16(&input[112..], &mut output[224..]);
}
