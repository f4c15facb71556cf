//! # mdkey - Morton keys for multidimensional range indexes
//!
//! mdkey turns several fixed-width unsigned coordinates into one fixed-length,
//! bit-interleaved (Morton / Z-order) byte key and back. Stored as row keys in
//! a sorted key-value store, these keys keep nearby points close together, and
//! the leading `n` bits of a key name a hierarchical cell that a range scan can
//! test with a prefix mask.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! mdkey = "0.1"  # Default: codec + config + observability
//! ```
//!
//! ## Feature Flags
//!
//! - **`config`** (default): TOML layout configuration (`mdkey-config`)
//! - **`observability`** (default): logging setup (`mdkey-observability`)
//!
//! The codec itself (`mdkey-codec`) is always included.
//!
//! ## Usage
//!
//! ```rust
//! use mdkey::prelude::*;
//!
//! let layout = MortonLayout::XYT;
//! let key = layout.encode(&[5, 9, 2])?;
//! assert_eq!(key.len(), 12);
//!
//! // Is the key inside the cell named by its first 12 bits?
//! let (low, high) = layout.cell_bounds(key.as_bytes(), 12)?;
//! assert!(low <= key && key <= high);
//! assert!(layout.matches_prefix(low.as_bytes(), 12, key.as_bytes())?);
//! println!("{}", layout.render(key.as_bytes(), 12)?);
//! # Ok::<(), MortonError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: mdkey-codec                                │
//! │  (bitops -> prefix masks -> interleaver)                │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: mdkey-config, mdkey-observability      │
//! │  (TOML layout settings, tracing setup)                  │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Tools: mdkey_inspect                                   │
//! │  (encode / decode / mask / render / match from a shell) │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

// Re-export foundation
pub use mdkey_codec as codec;

// Re-export infrastructure
#[cfg(feature = "config")]
pub use mdkey_config as config;

#[cfg(feature = "observability")]
pub use mdkey_observability as observability;

pub mod hex;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::codec::bitops;
    pub use crate::codec::{
        decode_xyt, encode_xyt, MortonError, MortonKey, MortonLayout, MortonResult, PrefixMask,
        RowKeyBuilder,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{load_config, LayoutConfig, MdkeyConfig};
}
