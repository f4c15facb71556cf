// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # mdkey-observability
//!
//! Logging setup shared by the mdkey tools, with per-crate debug flag support.
//! Library crates only emit `tracing` events; binaries call [`init_logging`]
//! once at startup.

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known mdkey crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &["mdkey-codec", "mdkey-config", "mdkey"];

/// Convert a crate name to its tracing target (`mdkey-codec` -> `mdkey_codec`).
pub fn crate_target(crate_name: &str) -> String {
    crate_name.replace('-', "_")
}
