// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Immutable fixed-length key value.

use std::fmt;

use crate::bitops::{bit_at, to_binary_string};

/// An interleaved (Morton / Z-order) key.
///
/// The length is fixed when the key is built by a [`MortonLayout`](crate::MortonLayout)
/// and never changes. Byte-wise ordering of keys is Z-order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MortonKey {
    bytes: Box<[u8]>,
}

impl MortonKey {
    pub(crate) fn from_boxed(bytes: Box<[u8]>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bit at `position`, counted from the MSB of byte 0.
    pub fn bit(&self, position: usize) -> Option<bool> {
        if position < self.bytes.len() * 8 {
            Some(bit_at(&self.bytes, position))
        } else {
            None
        }
    }

    /// Number of bits set to 1.
    pub fn count_ones(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl AsRef<[u8]> for MortonKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::LowerHex for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MortonKey({:x})", self)
    }
}

impl fmt::Display for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_binary_string(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(bytes: &[u8]) -> MortonKey {
        MortonKey::from_boxed(bytes.into())
    }

    #[test]
    fn test_bit_access() {
        let k = key(&[0b1000_0001, 0x00]);
        assert_eq!(k.bit(0), Some(true));
        assert_eq!(k.bit(1), Some(false));
        assert_eq!(k.bit(7), Some(true));
        assert_eq!(k.bit(15), Some(false));
        assert_eq!(k.bit(16), None);
        assert_eq!(k.count_ones(), 2);
    }

    #[test]
    fn test_formatting() {
        let k = key(&[0xAB, 0x01]);
        assert_eq!(format!("{:x}", k), "ab01");
        assert_eq!(format!("{:?}", k), "MortonKey(ab01)");
        assert_eq!(k.to_string(), "1010101100000001");
    }

    #[test]
    fn test_ordering_is_bytewise() {
        assert!(key(&[0x00, 0xFF]) < key(&[0x01, 0x00]));
        assert!(key(&[0x80]) > key(&[0x7F]));
    }
}
