// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Order-preserving pre-transform for signed coordinates.

Interleaving raw two's-complement values puts every negative coordinate after
every positive one. Flipping the sign bit maps the signed `W`-bit range onto
`[0, 2^W)` in numeric order, so keys built from flipped values sort correctly
across zero. The transform is opt-in; `encode` never applies it.
*/

use crate::error::{rejected, MortonError, MortonResult};
use crate::key::MortonKey;
use crate::layout::MortonLayout;

impl MortonLayout {
    fn sign_bit(&self) -> u64 {
        1u64 << (self.bits_per_dimension() - 1)
    }

    /// Map a signed value onto the unsigned coordinate range, preserving order.
    ///
    /// `value` must fit in `bits_per_dimension` bits as two's complement.
    pub fn flip_sign(&self, value: i64) -> MortonResult<u64> {
        let half = 1i128 << (self.bits_per_dimension() - 1);
        let wide = value as i128;
        if wide < -half || wide >= half {
            return Err(rejected(MortonError::SignedOutOfRange {
                value,
                bits: self.bits_per_dimension(),
            }));
        }
        Ok(((value as u64) ^ self.sign_bit()) & self.max_coordinate())
    }

    /// Inverse of [`flip_sign`](Self::flip_sign).
    pub fn unflip_sign(&self, value: u64) -> MortonResult<i64> {
        let bits = self.bits_per_dimension();
        if value > self.max_coordinate() {
            return Err(rejected(MortonError::UnsignedOutOfRange { value, bits }));
        }
        let shift = 64 - bits;
        Ok((((value ^ self.sign_bit()) << shift) as i64) >> shift)
    }

    /// Flip every coordinate, then interleave.
    pub fn encode_signed(&self, coords: &[i64]) -> MortonResult<MortonKey> {
        let flipped = coords
            .iter()
            .map(|&value| self.flip_sign(value))
            .collect::<MortonResult<Vec<u64>>>()?;
        self.encode(&flipped)
    }

    /// Decode, then undo the sign flip on every coordinate.
    pub fn decode_signed(&self, key: &[u8]) -> MortonResult<Vec<i64>> {
        self.decode(key)?
            .into_iter()
            .map(|value| self.unflip_sign(value))
            .collect()
    }
}
