// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Error types for codec operations.

Every variant is a precondition violation detected synchronously. Nothing in
this crate truncates, pads or wraps an argument to make it fit.
*/

/// Result type for codec operations
pub type MortonResult<T> = Result<T, MortonError>;

/// Errors that can occur while building, reading or comparing keys
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MortonError {
    #[error("Invalid layout: {dimensions} dimensions x {bits_per_dimension} bits (both must be in 1..=64)")]
    InvalidLayout {
        dimensions: usize,
        bits_per_dimension: u32,
    },

    #[error("Invalid arity: expected {expected} coordinates, got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    #[error("Coordinate out of range: dimension {dimension} value {value} does not fit in {bits} bits")]
    CoordinateOutOfRange {
        dimension: usize,
        value: u64,
        bits: u32,
    },

    #[error("Signed value {value} does not fit in {bits} bits")]
    SignedOutOfRange { value: i64, bits: u32 },

    #[error("Unsigned value {value} does not fit in {bits} bits")]
    UnsignedOutOfRange { value: u64, bits: u32 },

    #[error("Key length out of band: expected {expected} bytes, got {actual}")]
    OutOfBandKeyLength { expected: usize, actual: usize },

    #[error("Invalid prefix length {prefix_length}: must be in 1..={max}")]
    InvalidPrefixLength { prefix_length: u32, max: u32 },

    #[error("Buffer too short: need at least {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    #[error("Length mismatch: {left} bytes vs {right} bytes")]
    LengthMismatch { left: usize, right: usize },

    #[error("Bit position {position} out of range for a {bit_len}-bit buffer")]
    BitPositionOutOfRange { position: usize, bit_len: usize },

    #[error("Missing required argument: {0}")]
    NullArgument(&'static str),
}

/// Log a rejected precondition and hand the error back to the caller.
#[inline]
pub(crate) fn rejected(err: MortonError) -> MortonError {
    tracing::debug!(target: "mdkey_codec", error = %err, "precondition rejected");
    err
}
