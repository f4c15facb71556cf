// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Morton (Z-order) interleaving for `K` coordinates of `W` bits each.

Output bit `i` (counted from the MSB of byte 0) is bit `i / K` of dimension
`i % K`, also counted from the MSB. Dimensions are visited round-robin in
argument order, so for the 3x32 layout bit 0 is the top bit of x, bit 1 the top
bit of y, bit 2 the top bit of t, and bit 93 the lowest bit of x.

Signed values are not interpreted: raw bit patterns are interleaved. Use
[`MortonLayout::flip_sign`] first if negative coordinates must sort in
numeric order.
*/

use crate::error::{rejected, MortonError, MortonResult};
use crate::key::MortonKey;
use crate::layout::MortonLayout;

impl MortonLayout {
    /// Interleave one coordinate per dimension into a key.
    ///
    /// Fails with `InvalidArity` if `coords.len()` differs from the layout's
    /// dimension count, and with `CoordinateOutOfRange` if any value needs
    /// more than `bits_per_dimension` bits.
    pub fn encode(&self, coords: &[u64]) -> MortonResult<MortonKey> {
        if coords.len() != self.dimensions() {
            return Err(rejected(MortonError::InvalidArity {
                expected: self.dimensions(),
                actual: coords.len(),
            }));
        }
        let max = self.max_coordinate();
        if let Some((dimension, &value)) = coords.iter().enumerate().find(|&(_, &v)| v > max) {
            return Err(rejected(MortonError::CoordinateOutOfRange {
                dimension,
                value,
                bits: self.bits_per_dimension(),
            }));
        }
        Ok(self.interleave(coords))
    }

    fn interleave(&self, coords: &[u64]) -> MortonKey {
        let dims = self.dimensions();
        let width = self.bits_per_dimension() as usize;
        let mut bytes = vec![0u8; self.key_len()];

        for level in 0..width {
            let shift = width - 1 - level;
            for (dimension, &value) in coords.iter().enumerate() {
                let position = level * dims + dimension;
                let bit = ((value >> shift) & 1) as u8;
                bytes[position >> 3] |= bit << (7 - (position & 7));
            }
        }

        tracing::trace!(target: "mdkey_codec", ?coords, "encoded key");
        MortonKey::from_boxed(bytes.into_boxed_slice())
    }

    /// Split a key back into its coordinates.
    ///
    /// `key` must be exactly `key_len()` bytes. Padding bits past `K * W` are
    /// ignored.
    pub fn decode(&self, key: &[u8]) -> MortonResult<Vec<u64>> {
        self.check_key_len(key.len())?;

        let dims = self.dimensions();
        let width = self.bits_per_dimension() as usize;
        let mut coords = vec![0u64; dims];

        for level in 0..width {
            for (dimension, coord) in coords.iter_mut().enumerate() {
                let position = level * dims + dimension;
                let bit = (key[position >> 3] >> (7 - (position & 7))) & 1;
                *coord = (*coord << 1) | bit as u64;
            }
        }

        tracing::trace!(target: "mdkey_codec", ?coords, "decoded key");
        Ok(coords)
    }
}

/// Encode (x, y, t) with the 3x32 layout.
#[inline]
pub fn encode_xyt(x: u32, y: u32, t: u32) -> MortonKey {
    MortonLayout::XYT.interleave(&[x as u64, y as u64, t as u64])
}

/// Decode a 12-byte key produced by [`encode_xyt`].
pub fn decode_xyt(key: &[u8]) -> MortonResult<(u32, u32, u32)> {
    let coords = MortonLayout::XYT.decode(key)?;
    Ok((coords[0] as u32, coords[1] as u32, coords[2] as u32))
}
