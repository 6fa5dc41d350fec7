// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index I/O and format validation.
//!
//! Only structural failures become errors: an unreadable file, a header that
//! isn't ours, or a value that doesn't fit its on-disk width. Recoverable
//! conditions (a term missing from the index, a doc_id missing from the
//! forward map, an empty query) degrade to empty values instead.

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Underlying read or write failure, surfaced as-is.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with the index magic number.
    #[error("bad magic: expected 0x49445831, got {found:#010x}")]
    BadMagic { found: u32 },

    /// The file's major format version is one this reader does not
    /// understand. Minor versions are accepted without inspection.
    #[error("unsupported index version {major}.{minor}")]
    BadVersion { major: u16, minor: u16 },

    /// A value exceeds the width its on-disk encoding allows
    /// (titles and URLs carry a u16 length prefix, terms a u8 one).
    #[error("{what} is {len} bytes, on-disk limit is {max}")]
    FormatLimit {
        what: &'static str,
        len: usize,
        max: usize,
    },
}
