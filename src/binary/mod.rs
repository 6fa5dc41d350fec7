// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format for korpus index files.
//!
//! One file, three parts, all integers little-endian. The header is written
//! last (the writer zero-fills its slot first and backpatches in
//! `finalize`), so a build that dies halfway leaves a file no reader will
//! accept — the magic is still zeros.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (32 bytes)                                          │
//! │   magic: u32 = 0x49445831                                  │
//! │   version_major: u16, version_minor: u16                   │
//! │   flags: u32                                               │
//! │   num_documents: u32, num_terms: u32                       │
//! │   reserved: u32                                            │
//! │   forward_offset: u64                                      │
//! ├────────────────────────────────────────────────────────────┤
//! │ FORWARD SECTION (at forward_offset)                        │
//! │   num_documents × {                                        │
//! │     doc_id: u32                                            │
//! │     title_len: u16, title bytes                            │
//! │     url_len: u16, url bytes                                │
//! │   }                                                        │
//! ├────────────────────────────────────────────────────────────┤
//! │ INVERTED SECTION (immediately after)                       │
//! │   num_terms: u32                                           │
//! │   num_terms × {                                            │
//! │     term_len: u8, term bytes                               │
//! │     df: u32                                                │
//! │     df × doc_id: u32   (ascending)                         │
//! │   }                                                        │
//! │   terms in ascending byte-lexicographic order              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The format is write-once: there is no in-place update, no checksum, no
//! compression. Posting lists are stored sorted so readers can merge them
//! without re-sorting.

mod header;
mod reader;
mod writer;

pub use header::{IndexHeader, MAGIC, VERSION_MAJOR, VERSION_MINOR};
pub use reader::IndexReader;
pub use writer::IndexWriter;

use std::io::Read;

use crate::error::Result;

pub(crate) fn read_u16<R: Read>(r: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

pub(crate) fn read_u32<R: Read>(r: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a u16-length-prefixed string (forward section titles and URLs).
pub(crate) fn read_string_u16<R: Read>(r: &mut R) -> Result<String> {
    let len = read_u16(r)? as usize;
    read_string(r, len)
}

/// Read a u8-length-prefixed string (inverted section terms).
pub(crate) fn read_string_u8<R: Read>(r: &mut R) -> Result<String> {
    let mut len = [0u8; 1];
    r.read_exact(&mut len)?;
    read_string(r, len[0] as usize)
}

fn read_string<R: Read>(r: &mut R, len: usize) -> Result<String> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
