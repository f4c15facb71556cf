// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Storage row keys: a Morton key followed by region and version tags.

use crate::bitops;
use crate::error::{rejected, MortonError, MortonResult};

/// Assembles `key ++ region ++ version` for a sorted store.
///
/// All three parts are required; an empty slice is a valid (zero-length) tag,
/// a part that was never set is not.
///
/// ```
/// use mdkey_codec::{encode_xyt, RowKeyBuilder};
///
/// let key = encode_xyt(5, 9, 2);
/// let row = RowKeyBuilder::new()
///     .key(key.as_bytes())
///     .region(b"r01")
///     .version(&[0, 1])
///     .build()?;
/// assert_eq!(row.len(), 12 + 3 + 2);
/// # Ok::<(), mdkey_codec::MortonError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RowKeyBuilder<'a> {
    key: Option<&'a [u8]>,
    region: Option<&'a [u8]>,
    version: Option<&'a [u8]>,
}

impl<'a> RowKeyBuilder<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: None,
            region: None,
            version: None,
        }
    }

    #[must_use]
    pub const fn key(mut self, key: &'a [u8]) -> Self {
        self.key = Some(key);
        self
    }

    #[must_use]
    pub const fn region(mut self, region: &'a [u8]) -> Self {
        self.region = Some(region);
        self
    }

    #[must_use]
    pub const fn version(mut self, version: &'a [u8]) -> Self {
        self.version = Some(version);
        self
    }

    /// Concatenate the parts in order.
    ///
    /// # Errors
    ///
    /// `NullArgument` naming the first part that was never set.
    pub fn build(self) -> MortonResult<Box<[u8]>> {
        let key = self.key.ok_or_else(|| rejected(MortonError::NullArgument("key")))?;
        let region = self
            .region
            .ok_or_else(|| rejected(MortonError::NullArgument("region")))?;
        let version = self
            .version
            .ok_or_else(|| rejected(MortonError::NullArgument("version")))?;
        Ok(bitops::concat(key, region, version))
    }
}
