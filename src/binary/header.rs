// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed 32-byte index header.
//!
//! The header is parsed in one read before anything else and tells the
//! reader where the forward section starts; the inverted section follows it
//! directly, so one u64 offset is all the layout bookkeeping the format
//! needs.

use std::io::{Read, Write};

use crate::error::{Error, Result};

/// Magic number at offset 0.
pub const MAGIC: u32 = 0x4944_5831;

/// Current major format version. Readers reject anything else.
pub const VERSION_MAJOR: u16 = 1;

/// Current minor format version. Written, but readers accept any minor.
pub const VERSION_MINOR: u16 = 0;

/// On-disk header: 32 bytes at offset 0, all fields little-endian.
#[derive(Debug, Clone)]
pub struct IndexHeader {
    pub magic: u32,
    pub version_major: u16,
    pub version_minor: u16,
    pub flags: u32,
    pub num_documents: u32,
    pub num_terms: u32,
    pub reserved: u32,
    /// Byte offset of the first forward record.
    pub forward_offset: u64,
}

impl Default for IndexHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version_major: VERSION_MAJOR,
            version_minor: VERSION_MINOR,
            flags: 0,
            num_documents: 0,
            num_terms: 0,
            reserved: 0,
            forward_offset: 0,
        }
    }
}

impl IndexHeader {
    // 4 (magic) + 2 + 2 (version) + 4 (flags) + 4 + 4 (counts) + 4 (reserved) + 8 (offset)
    pub const SIZE: usize = 32;

    pub fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.magic.to_le_bytes())?;
        w.write_all(&self.version_major.to_le_bytes())?;
        w.write_all(&self.version_minor.to_le_bytes())?;
        w.write_all(&self.flags.to_le_bytes())?;
        w.write_all(&self.num_documents.to_le_bytes())?;
        w.write_all(&self.num_terms.to_le_bytes())?;
        w.write_all(&self.reserved.to_le_bytes())?;
        w.write_all(&self.forward_offset.to_le_bytes())?;
        Ok(())
    }

    /// Read and validate a header. Wrong magic or an unknown major version
    /// rejects the whole file.
    pub fn read<R: Read>(r: &mut R) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        r.read_exact(&mut buf)?;

        let magic = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        if magic != MAGIC {
            return Err(Error::BadMagic { found: magic });
        }

        let version_major = u16::from_le_bytes([buf[4], buf[5]]);
        let version_minor = u16::from_le_bytes([buf[6], buf[7]]);
        if version_major != VERSION_MAJOR {
            return Err(Error::BadVersion {
                major: version_major,
                minor: version_minor,
            });
        }

        Ok(Self {
            magic,
            version_major,
            version_minor,
            flags: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            num_documents: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            num_terms: u32::from_le_bytes([buf[16], buf[17], buf[18], buf[19]]),
            reserved: u32::from_le_bytes([buf[20], buf[21], buf[22], buf[23]]),
            forward_offset: u64::from_le_bytes([
                buf[24], buf[25], buf[26], buf[27], buf[28], buf[29], buf[30], buf[31],
            ]),
        })
    }
}
