// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Prefix masks and cell tests.

A prefix of `n` leading key bits names a hierarchical cell (quadtree / octree
node). Shorter prefixes are coarser cells. A range-query planner builds a mask
for the cell resolution it wants and tests every scanned row key against the
cell prefix with [`MortonLayout::matches_prefix`].
*/

use crate::bitops::{self, bit_at};
use crate::error::{rejected, MortonError, MortonResult};
use crate::key::MortonKey;
use crate::layout::MortonLayout;

/// Key-length buffer with exactly the leading `prefix_length` bits set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixMask {
    prefix_length: u32,
    bytes: Box<[u8]>,
}

impl PrefixMask {
    pub fn prefix_length(&self) -> u32 {
        self.prefix_length
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for PrefixMask {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl MortonLayout {
    /// Build the mask for the leading `prefix_length` bits.
    ///
    /// Whole bytes of `0xFF`, then one partial byte, then zeros up to the key
    /// length. A prefix on a byte boundary leaves no partial byte.
    pub fn make_mask(&self, prefix_length: u32) -> MortonResult<PrefixMask> {
        self.check_prefix_length(prefix_length)?;

        let mut bytes = vec![0u8; self.key_len()];
        let last = (prefix_length as usize - 1) / 8;
        let rem = (prefix_length as usize - 1) % 8;
        bytes[..last].fill(0xFF);
        bytes[last] = 0xFFu8 << (7 - rem);

        Ok(PrefixMask {
            prefix_length,
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Whether `candidate` falls in the cell named by the first
    /// `prefix_length` bits of `prefix`.
    ///
    /// Both buffers may be longer than a key (row keys with tags appended);
    /// only the masked bits are compared.
    pub fn matches_prefix(
        &self,
        prefix: &[u8],
        prefix_length: u32,
        candidate: &[u8],
    ) -> MortonResult<bool> {
        let mask = self.make_mask(prefix_length)?;
        let needed = mask.len();
        for buffer in [prefix, candidate] {
            if buffer.len() < needed {
                return Err(rejected(MortonError::BufferTooShort {
                    needed,
                    actual: buffer.len(),
                }));
            }
        }

        Ok(mask
            .as_bytes()
            .iter()
            .zip(prefix.iter().zip(candidate))
            .all(|(&m, (&p, &c))| p & m == c & m))
    }

    /// Show the first `prefix_length` bits of `key` as '0'/'1' and every other
    /// bit as '*'. Diagnostic output only.
    pub fn render(&self, key: &[u8], prefix_length: u32) -> MortonResult<String> {
        self.check_prefix_length(prefix_length)?;
        self.check_key_len(key.len())?;

        let significant = prefix_length as usize;
        Ok((0..key.len() * 8)
            .map(|position| match position < significant {
                true if bit_at(key, position) => '1',
                true => '0',
                false => '*',
            })
            .collect())
    }

    /// Inclusive key range `[low, high]` covered by a cell.
    ///
    /// `low` clears every bit after the prefix; `high` sets every significant
    /// bit after it. Padding bits stay zero in both.
    pub fn cell_bounds(
        &self,
        prefix: &[u8],
        prefix_length: u32,
    ) -> MortonResult<(MortonKey, MortonKey)> {
        self.check_key_len(prefix.len())?;
        let mask = self.make_mask(prefix_length)?;
        let significant = self.make_mask(self.total_bits())?;

        let low = bitops::and(prefix, mask.as_bytes())?;
        let span = bitops::and(&bitops::not(mask.as_bytes()), significant.as_bytes())?;
        let high = bitops::or(&low, &span)?;

        Ok((MortonKey::from_boxed(low), MortonKey::from_boxed(high)))
    }

    /// The two child cells one level below a cell, as `(prefix, prefix_length + 1)` pairs.
    ///
    /// The left child keeps the next bit clear, the right child sets it.
    /// A cell at full resolution has no children.
    pub fn split_cell(
        &self,
        prefix: &[u8],
        prefix_length: u32,
    ) -> MortonResult<(MortonKey, MortonKey)> {
        self.check_key_len(prefix.len())?;
        self.check_prefix_length(prefix_length)?;
        if prefix_length == self.total_bits() {
            return Err(rejected(MortonError::InvalidPrefixLength {
                prefix_length,
                max: self.total_bits() - 1,
            }));
        }

        let mask = self.make_mask(prefix_length)?;
        let left = bitops::and(prefix, mask.as_bytes())?;
        let right = bitops::set_bit(&left, prefix_length as usize)?;

        tracing::trace!(target: "mdkey_codec", prefix_length, "split cell");
        Ok((MortonKey::from_boxed(left), MortonKey::from_boxed(right)))
    }

    /// Number of leading bits two keys share, capped at `total_bits()`.
    pub fn common_prefix_length(&self, a: &[u8], b: &[u8]) -> MortonResult<u32> {
        self.check_key_len(a.len())?;
        self.check_key_len(b.len())?;

        let shared = a
            .iter()
            .zip(b)
            .enumerate()
            .find(|&(_, (x, y))| x != y)
            .map(|(index, (x, y))| index as u32 * 8 + (x ^ y).leading_zeros())
            .unwrap_or(a.len() as u32 * 8);
        Ok(shared.min(self.total_bits()))
    }
}
