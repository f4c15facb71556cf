//! Property-based tests for the Morton codec.
//!
//! These tests check the codec invariants over randomized layouts, coordinates
//! and buffers.

use mdkey_codec::bitops::{and, concat, not, or, set_bit};
use mdkey_codec::{decode_xyt, encode_xyt, MortonLayout};
use proptest::prelude::*;

/// A layout together with one in-range coordinate vector for it.
fn layout_and_coords() -> impl Strategy<Value = (MortonLayout, Vec<u64>)> {
    (1usize..=8, 1u32..=64).prop_flat_map(|(dims, bits)| {
        let layout = MortonLayout::new(dims, bits).unwrap();
        let max = layout.max_coordinate();
        (Just(layout), prop::collection::vec(0..=max, dims))
    })
}

proptest! {
    /// decode(encode(c)) == c for the 3x32 layout.
    #[test]
    fn prop_xyt_round_trip(x: u32, y: u32, t: u32) {
        let key = encode_xyt(x, y, t);
        prop_assert_eq!(key.len(), 12);
        prop_assert_eq!(decode_xyt(key.as_bytes()).unwrap(), (x, y, t));
    }

    /// decode(encode(c)) == c for arbitrary layouts.
    #[test]
    fn prop_layout_round_trip((layout, coords) in layout_and_coords()) {
        let key = layout.encode(&coords).unwrap();
        prop_assert_eq!(key.len(), layout.key_len());
        prop_assert_eq!(layout.decode(key.as_bytes()).unwrap(), coords);
    }

    /// Interleaving moves bits around but never creates or drops one.
    #[test]
    fn prop_bit_count_preserved((layout, coords) in layout_and_coords()) {
        let key = layout.encode(&coords).unwrap();
        let expected: u32 = coords.iter().map(|c| c.count_ones()).sum();
        prop_assert_eq!(key.count_ones(), expected);
    }

    /// Bit i of the key is bit (i / K) from the MSB of dimension (i % K).
    #[test]
    fn prop_layout_formula((layout, coords) in layout_and_coords()) {
        let key = layout.encode(&coords).unwrap();
        let dims = layout.dimensions();
        let width = layout.bits_per_dimension() as usize;
        for i in 0..layout.total_bits() as usize {
            let source = (coords[i % dims] >> (width - 1 - i / dims)) & 1 == 1;
            prop_assert_eq!(key.bit(i), Some(source), "bit {}", i);
        }
    }

    /// make_mask(n) has exactly n leading ones and zeros after them.
    #[test]
    fn prop_mask_leading_ones(n in 1u32..=96) {
        let mask = MortonLayout::XYT.make_mask(n).unwrap();
        for position in 0..96usize {
            let set = mask.as_bytes()[position / 8] & (0x80 >> (position % 8)) != 0;
            prop_assert_eq!(set, position < n as usize, "bit {}", position);
        }
    }

    /// Every key matches its own prefix at every resolution.
    #[test]
    fn prop_key_matches_itself(x in any::<u32>(), y in any::<u32>(), t in any::<u32>(), n in 1u32..=96) {
        let key = encode_xyt(x, y, t);
        prop_assert!(MortonLayout::XYT.matches_prefix(key.as_bytes(), n, key.as_bytes()).unwrap());
    }

    /// A key lies inside both bounds of every cell containing it.
    #[test]
    fn prop_key_within_cell_bounds(x in any::<u32>(), y in any::<u32>(), t in any::<u32>(), n in 1u32..=96) {
        let layout = MortonLayout::XYT;
        let key = encode_xyt(x, y, t);
        let (low, high) = layout.cell_bounds(key.as_bytes(), n).unwrap();
        prop_assert!(low <= key);
        prop_assert!(key <= high);
        prop_assert!(layout.matches_prefix(low.as_bytes(), n, high.as_bytes()).unwrap());
    }

    /// Exactly one child of a split cell contains the key.
    #[test]
    fn prop_split_partitions_cell(x in any::<u32>(), y in any::<u32>(), t in any::<u32>(), n in 1u32..96) {
        let layout = MortonLayout::XYT;
        let key = encode_xyt(x, y, t);
        let (left, right) = layout.split_cell(key.as_bytes(), n).unwrap();
        let in_left = layout.matches_prefix(left.as_bytes(), n + 1, key.as_bytes()).unwrap();
        let in_right = layout.matches_prefix(right.as_bytes(), n + 1, key.as_bytes()).unwrap();
        prop_assert!(in_left != in_right);
    }

    /// Sign flipping keeps numeric order.
    #[test]
    fn prop_flip_sign_monotonic(a: i32, b: i32) {
        let layout = MortonLayout::XYT;
        let fa = layout.flip_sign(a as i64).unwrap();
        let fb = layout.flip_sign(b as i64).unwrap();
        prop_assert_eq!(a.cmp(&b), fa.cmp(&fb));
        prop_assert_eq!(layout.unflip_sign(fa).unwrap(), a as i64);
    }

    /// not(not(b)) == b
    #[test]
    fn prop_double_complement(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(&*not(&not(&bytes)), &bytes[..]);
    }

    /// and(b, ones) == b and or(b, zeros) == b
    #[test]
    fn prop_and_or_identity(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let ones = vec![0xFFu8; bytes.len()];
        let zeros = vec![0u8; bytes.len()];
        prop_assert_eq!(&*and(&bytes, &ones).unwrap(), &bytes[..]);
        prop_assert_eq!(&*or(&bytes, &zeros).unwrap(), &bytes[..]);
    }

    /// set_bit touches exactly the requested bit.
    #[test]
    fn prop_set_bit_single(bytes in prop::collection::vec(any::<u8>(), 1..32), seed in any::<usize>()) {
        let position = seed % (bytes.len() * 8);
        let out = set_bit(&bytes, position).unwrap();
        for i in 0..bytes.len() * 8 {
            let before = bytes[i / 8] & (0x80 >> (i % 8)) != 0;
            let after = out[i / 8] & (0x80 >> (i % 8)) != 0;
            prop_assert_eq!(after, before || i == position, "bit {}", i);
        }
    }

    /// concat places its parts back to back.
    #[test]
    fn prop_concat_layout(
        a in prop::collection::vec(any::<u8>(), 0..16),
        b in prop::collection::vec(any::<u8>(), 0..16),
        c in prop::collection::vec(any::<u8>(), 0..16)
    ) {
        let out = concat(&a, &b, &c);
        prop_assert_eq!(out.len(), a.len() + b.len() + c.len());
        prop_assert_eq!(&out[..a.len()], &a[..]);
        prop_assert_eq!(&out[a.len()..a.len() + b.len()], &b[..]);
        prop_assert_eq!(&out[a.len() + b.len()..], &c[..]);
    }
}
