// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# mdkey-codec

Morton (Z-order) keys for multidimensional range indexes over sorted
key-value stores.

- **Interleaver**: `K` coordinates of `W` bits each into one
  `ceil(K * W / 8)`-byte key and back ([`MortonLayout::encode`],
  [`MortonLayout::decode`]).
- **Prefix masks**: masks for the leading `n` bits of a key, cell membership
  tests and a printable cell view ([`MortonLayout::make_mask`],
  [`MortonLayout::matches_prefix`], [`MortonLayout::render`]).
- **Bit primitives**: NOT / AND / OR, single-bit set and concatenation over
  byte buffers ([`bitops`]).

Everything is a pure function over immutable buffers. A [`MortonLayout`] is a
`Copy` value and can be shared across threads without coordination.

## Byte layout

Byte 0 holds bits 0..8 of the interleaved stream, most significant bit first.
Bit `i` belongs to dimension `i % K`, source bit `i / K` counted from that
dimension's MSB. For the 3x32 layout this is a 12-byte key.

```
use mdkey_codec::{encode_xyt, MortonLayout};

let layout = MortonLayout::XYT;
let key = encode_xyt(5, 9, 2);
assert_eq!(layout.decode(key.as_bytes())?, vec![5, 9, 2]);

let cell = layout.make_mask(12)?;
assert_eq!(&cell.as_bytes()[..2], &[0xFF, 0xF0]);
assert!(layout.matches_prefix(key.as_bytes(), 12, key.as_bytes())?);
# Ok::<(), mdkey_codec::MortonError>(())
```
*/

pub mod bitops;
pub mod error;
pub mod interleave;
pub mod key;
pub mod layout;
pub mod prefix;
pub mod row_key;
pub mod signed;

pub use error::{MortonError, MortonResult};
pub use interleave::{decode_xyt, encode_xyt};
pub use key::MortonKey;
pub use layout::MortonLayout;
pub use prefix::PrefixMask;
pub use row_key::RowKeyBuilder;
