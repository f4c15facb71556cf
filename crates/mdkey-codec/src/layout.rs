// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Key layout: how many dimensions are interleaved and how wide each one is.

A layout is a small immutable value. Every codec operation is a method on it,
so callers can share one layout freely across threads.
*/

use std::fmt;

use crate::error::{rejected, MortonError, MortonResult};
use crate::key::MortonKey;

/// Dimension count `K` and per-dimension width `W` of a Morton key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MortonLayout {
    dimensions: usize,
    bits_per_dimension: u32,
}

impl MortonLayout {
    pub const MAX_DIMENSIONS: usize = 64;
    pub const MAX_BITS_PER_DIMENSION: u32 = 64;

    /// Three 32-bit dimensions (x, y, t) packed into 12 bytes.
    pub const XYT: MortonLayout = MortonLayout {
        dimensions: 3,
        bits_per_dimension: 32,
    };

    /// Create a layout of `dimensions` coordinates, `bits_per_dimension` bits each.
    pub fn new(dimensions: usize, bits_per_dimension: u32) -> MortonResult<Self> {
        if !(1..=Self::MAX_DIMENSIONS).contains(&dimensions)
            || !(1..=Self::MAX_BITS_PER_DIMENSION).contains(&bits_per_dimension)
        {
            return Err(rejected(MortonError::InvalidLayout {
                dimensions,
                bits_per_dimension,
            }));
        }
        Ok(Self {
            dimensions,
            bits_per_dimension,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn bits_per_dimension(&self) -> u32 {
        self.bits_per_dimension
    }

    /// Number of significant bits in a key (`K * W`).
    pub fn total_bits(&self) -> u32 {
        self.dimensions as u32 * self.bits_per_dimension
    }

    /// Key length in bytes (`ceil(K * W / 8)`).
    pub fn key_len(&self) -> usize {
        (self.total_bits() as usize + 7) / 8
    }

    /// Largest coordinate value representable in one dimension.
    pub fn max_coordinate(&self) -> u64 {
        u64::MAX >> (64 - self.bits_per_dimension)
    }

    pub(crate) fn check_key_len(&self, actual: usize) -> MortonResult<()> {
        let expected = self.key_len();
        if actual != expected {
            return Err(rejected(MortonError::OutOfBandKeyLength { expected, actual }));
        }
        Ok(())
    }

    pub(crate) fn check_prefix_length(&self, prefix_length: u32) -> MortonResult<()> {
        let max = self.total_bits();
        if prefix_length == 0 || prefix_length > max {
            return Err(rejected(MortonError::InvalidPrefixLength { prefix_length, max }));
        }
        Ok(())
    }

    /// Wrap raw bytes (e.g. a row key read back from storage) as a key of this layout.
    pub fn key_from_bytes(&self, bytes: &[u8]) -> MortonResult<MortonKey> {
        self.check_key_len(bytes.len())?;
        Ok(MortonKey::from_boxed(bytes.into()))
    }

    /// All-zero key, the lower corner of the whole key space.
    pub fn zero_key(&self) -> MortonKey {
        MortonKey::from_boxed(vec![0u8; self.key_len()].into_boxed_slice())
    }
}

impl Default for MortonLayout {
    fn default() -> Self {
        Self::XYT
    }
}

impl fmt::Display for MortonLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} bits ({} bytes)",
            self.dimensions,
            self.bits_per_dimension,
            self.key_len()
        )
    }
}
