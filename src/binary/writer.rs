// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index writer: forward section, inverted section, header backpatch.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use super::header::IndexHeader;
use crate::error::{Error, Result};
use crate::types::DocumentInfo;

/// Single-use writer for one index file.
///
/// Call order: [`create`](Self::create),
/// [`write_forward_index`](Self::write_forward_index),
/// [`write_inverted_index`](Self::write_inverted_index),
/// [`finalize`](Self::finalize). The header slot is zero-filled at create
/// time and written last, so an interrupted build leaves a file that fails
/// the magic check.
///
/// Length limits are enforced before a record is started: a title or URL
/// over `u16::MAX` bytes, or a term over 255 bytes, fails with
/// [`Error::FormatLimit`] without emitting partial bytes for that record.
pub struct IndexWriter {
    file: BufWriter<File>,
    header: IndexHeader,
}

impl IndexWriter {
    /// Create (or truncate) the output file and reserve the header slot.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(&[0u8; IndexHeader::SIZE])?;
        Ok(Self {
            file,
            header: IndexHeader::default(),
        })
    }

    /// Write the forward section and record its offset in the header.
    pub fn write_forward_index(&mut self, docs: &[DocumentInfo]) -> Result<()> {
        self.header.forward_offset = self.file.stream_position()?;
        self.header.num_documents = docs.len() as u32;

        for doc in docs {
            if doc.title.len() > u16::MAX as usize {
                return Err(Error::FormatLimit {
                    what: "document title",
                    len: doc.title.len(),
                    max: u16::MAX as usize,
                });
            }
            if doc.url.len() > u16::MAX as usize {
                return Err(Error::FormatLimit {
                    what: "document url",
                    len: doc.url.len(),
                    max: u16::MAX as usize,
                });
            }

            self.file.write_all(&doc.doc_id.to_le_bytes())?;
            self.file.write_all(&(doc.title.len() as u16).to_le_bytes())?;
            self.file.write_all(doc.title.as_bytes())?;
            self.file.write_all(&(doc.url.len() as u16).to_le_bytes())?;
            self.file.write_all(doc.url.as_bytes())?;
        }

        Ok(())
    }

    /// Write the inverted section: term count, then each term with its df
    /// and posting list.
    ///
    /// Terms go out in ascending byte-lexicographic order. Posting lists are
    /// sorted before writing; callers that append doc_ids in ingestion order
    /// hand them over sorted already, but the format guarantee should not
    /// depend on that.
    pub fn write_inverted_index(&mut self, index: &HashMap<String, Vec<u32>>) -> Result<()> {
        self.header.num_terms = index.len() as u32;

        let mut terms: Vec<&String> = index.keys().collect();
        terms.sort_unstable();

        self.file.write_all(&(terms.len() as u32).to_le_bytes())?;

        for term in terms {
            if term.len() > u8::MAX as usize {
                return Err(Error::FormatLimit {
                    what: "term",
                    len: term.len(),
                    max: u8::MAX as usize,
                });
            }

            self.file.write_all(&[term.len() as u8])?;
            self.file.write_all(term.as_bytes())?;

            let mut postings = index[term].clone();
            postings.sort_unstable();

            self.file.write_all(&(postings.len() as u32).to_le_bytes())?;
            for doc_id in postings {
                self.file.write_all(&doc_id.to_le_bytes())?;
            }
        }

        Ok(())
    }

    /// Seek back to offset 0, write the completed header, flush, close.
    pub fn finalize(mut self) -> Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.header.write(&mut self.file)?;
        self.file.flush()?;
        Ok(())
    }
}
