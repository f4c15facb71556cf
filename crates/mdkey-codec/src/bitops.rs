// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Leaf bitwise primitives over byte buffers.

Bits are numbered from the most significant bit of byte 0, so bit `p` lives in
byte `p / 8` under the mask `0x80 >> (p % 8)`. Every function returns a fresh
buffer and leaves its inputs untouched.
*/

use crate::error::{rejected, MortonError, MortonResult};

/// Single-bit mask for `position` within its byte (MSB first).
#[inline]
pub(crate) const fn bit_in_byte(position: usize) -> u8 {
    0x80 >> (position & 7)
}

/// Test bit `position` of `bytes` without bounds reporting.
#[inline]
pub(crate) fn bit_at(bytes: &[u8], position: usize) -> bool {
    bytes[position >> 3] & bit_in_byte(position) != 0
}

/// Bitwise complement.
pub fn not(bytes: &[u8]) -> Box<[u8]> {
    bytes.iter().map(|b| !b).collect()
}

/// Bitwise AND of two equal-length buffers.
pub fn and(left: &[u8], right: &[u8]) -> MortonResult<Box<[u8]>> {
    zip_with(left, right, |a, b| a & b)
}

/// Bitwise OR of two equal-length buffers.
pub fn or(left: &[u8], right: &[u8]) -> MortonResult<Box<[u8]>> {
    zip_with(left, right, |a, b| a | b)
}

fn zip_with(left: &[u8], right: &[u8], op: impl Fn(u8, u8) -> u8) -> MortonResult<Box<[u8]>> {
    if left.len() != right.len() {
        return Err(rejected(MortonError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        }));
    }
    Ok(left.iter().zip(right).map(|(&a, &b)| op(a, b)).collect())
}

/// Copy of `bytes` with bit `position` forced to 1.
pub fn set_bit(bytes: &[u8], position: usize) -> MortonResult<Box<[u8]>> {
    let bit_len = bytes.len() * 8;
    if position >= bit_len {
        return Err(rejected(MortonError::BitPositionOutOfRange { position, bit_len }));
    }
    let mut out: Box<[u8]> = bytes.into();
    out[position >> 3] |= bit_in_byte(position);
    Ok(out)
}

/// Concatenate three buffers in argument order.
pub fn concat(first: &[u8], second: &[u8], third: &[u8]) -> Box<[u8]> {
    let mut out = Vec::with_capacity(first.len() + second.len() + third.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out.extend_from_slice(third);
    out.into_boxed_slice()
}

/// Render every bit of `bytes` as '0' or '1', MSB first.
pub fn to_binary_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for position in 0..bytes.len() * 8 {
        out.push(if bit_at(bytes, position) { '1' } else { '0' });
    }
    out
}
